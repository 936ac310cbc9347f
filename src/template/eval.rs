use log::debug;

use crate::tables::ValueIndex;
use crate::template::errors::TemplateError;

const SUM_SEPARATORS: &[&str] = &["+"];
const DIFFERENCE_SEPARATORS: &[&str] = &["-"];
const PRODUCT_SEPARATORS: &[&str] = &["\\cdot", "·", "*"];

const OPENERS: &[&str] = &["{", "(", "[", "\\lfloor", "\\lceil"];
const CLOSERS: &[&str] = &["}", ")", "]", "\\rfloor", "\\rceil"];

fn starts_with_any(rest: &str, patterns: &[&str]) -> Option<usize> {
    patterns
        .iter()
        .find(|p| rest.starts_with(*p))
        .map(|p| p.len())
}

/// Split `text` on any of `separators` occurring at nesting depth zero.
///
/// Braces, parentheses, brackets and floor/ceiling delimiters all open a level.
/// Pieces are trimmed. A text without a top-level separator comes back as a
/// single piece.
pub fn split_top_level<'a>(text: &'a str, separators: &[&str]) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut depth: usize = 0;
    let mut piece_start = 0;
    let mut pos = 0;

    while let Some(rest) = text.get(pos..) {
        if rest.is_empty() {
            break;
        }
        if let Some(len) = starts_with_any(rest, OPENERS) {
            depth += 1;
            pos += len;
            continue;
        }
        if let Some(len) = starts_with_any(rest, CLOSERS) {
            depth = depth.saturating_sub(1);
            pos += len;
            continue;
        }
        if depth == 0
            && let Some(len) = starts_with_any(rest, separators)
        {
            if let Some(piece) = text.get(piece_start..pos) {
                pieces.push(piece.trim());
            }
            pos += len;
            piece_start = pos;
            continue;
        }
        pos += rest.chars().next().map_or(1, char::len_utf8);
    }

    if let Some(piece) = text.get(piece_start..) {
        pieces.push(piece.trim());
    }
    pieces
}

/// A template is compound when it has a `+` outside every bracket.
pub fn is_compound(text: &str) -> bool {
    split_top_level(text, SUM_SEPARATORS).len() > 1
}

/// Remove one pair of enclosing `( )` or `\left( \right)` that spans the whole text.
fn strip_outer_parens(text: &str) -> Option<&str> {
    let (open, close) = if text.starts_with("\\left(") && text.ends_with("\\right)") {
        ("\\left(", "\\right)")
    } else if text.starts_with('(') && text.ends_with(')') {
        ("(", ")")
    } else {
        return None;
    };
    let inner = text.get(open.len()..text.len().checked_sub(close.len())?)?;

    // "(a)(b)" starts and ends with parens but is not wrapped
    let mut depth: usize = 0;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    (depth == 0).then_some(inner.trim())
}

/// Evaluate a template or generated expression to an integer.
///
/// Indexed texts resolve directly. Otherwise handles top-level sums and
/// differences, `\cdot` products, enclosing parentheses and integer literals.
///
/// # Errors
///
/// Returns an error when the text is empty, when neither the index nor a literal
/// resolves a piece, or when the arithmetic overflows `i64`.
pub fn evaluate(text: &str, index: &ValueIndex) -> Result<i64, TemplateError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TemplateError::Empty);
    }

    if let Some(value) = index.value_of(text) {
        return Ok(value);
    }

    let terms = split_top_level(text, SUM_SEPARATORS);
    if terms.len() > 1 {
        let mut sum: i64 = 0;
        for term in terms {
            let value = evaluate(term, index)?;
            sum = sum
                .checked_add(value)
                .ok_or_else(|| TemplateError::Overflow(text.to_string()))?;
        }
        debug!("Evaluated sum '{}' = {}", text, sum);
        return Ok(sum);
    }

    let parts = split_top_level(text, DIFFERENCE_SEPARATORS);
    if let Some((first, rest)) = parts.split_first()
        && !rest.is_empty()
    {
        // a leading minus leaves an empty first part
        let mut difference = if first.is_empty() {
            0
        } else {
            evaluate(first, index)?
        };
        for part in rest {
            let value = evaluate(part, index)?;
            difference = difference
                .checked_sub(value)
                .ok_or_else(|| TemplateError::Overflow(text.to_string()))?;
        }
        debug!("Evaluated difference '{}' = {}", text, difference);
        return Ok(difference);
    }

    let factors = split_top_level(text, PRODUCT_SEPARATORS);
    if factors.len() > 1 {
        let mut product: i64 = 1;
        for factor in factors {
            let value = evaluate(factor, index)?;
            product = product
                .checked_mul(value)
                .ok_or_else(|| TemplateError::Overflow(text.to_string()))?;
        }
        debug!("Evaluated product '{}' = {}", text, product);
        return Ok(product);
    }

    if let Some(inner) = strip_outer_parens(text) {
        return evaluate(inner, index);
    }

    text.parse::<i64>()
        .map_err(|_| TemplateError::Unknown(text.to_string()))
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::strip_outer_parens;

    #[test]
    fn test_strip_outer_parens() {
        assert_eq!(strip_outer_parens("(4 + 4)"), Some("4 + 4"));
        assert_eq!(strip_outer_parens("\\left(4^{4}\\right)"), Some("4^{4}"));
        assert_eq!(strip_outer_parens("(4!)(4)"), None);
        assert_eq!(strip_outer_parens("4!"), None);
    }
}
