use std::collections::HashSet;

use log::debug;

use crate::generator::errors::ValidationError;
use crate::strategy::{Term, render_terms};
use crate::template::split_top_level;

const SUMMAND_SEPARATORS: &[&str] = &["+", "-"];

/// Check the expression the terms render to.
///
/// There must be at most `max_terms` terms. With more than one term, splitting
/// the rendered text at top-level `+` and `-` must give back exactly one
/// distinct summand per term.
///
/// # Errors
///
/// Returns an error if the budget is exceeded, if the rendered text shows a
/// different number of summands, or if two summands are identical.
pub fn validate_terms(terms: &[Term], max_terms: usize) -> Result<(), ValidationError> {
    if terms.len() > max_terms {
        debug!("Rejecting {} terms (budget {})", terms.len(), max_terms);
        return Err(ValidationError::TooManyTerms {
            count: terms.len(),
            max: max_terms,
        });
    }
    if terms.len() < 2 {
        return Ok(());
    }

    let text = render_terms(terms);
    let summands = split_top_level(&text, SUMMAND_SEPARATORS);
    if summands.len() != terms.len() {
        debug!(
            "Rejecting '{}': {} summands for {} terms",
            text,
            summands.len(),
            terms.len()
        );
        return Err(ValidationError::SummandMismatch {
            terms: terms.len(),
            summands: summands.len(),
        });
    }

    let mut seen = HashSet::with_capacity(summands.len());
    for summand in summands {
        if !seen.insert(summand) {
            debug!("Rejecting duplicate term '{}'", summand);
            return Err(ValidationError::DuplicateTerm(summand.to_string()));
        }
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the term values do not add up to `target`.
pub fn check_sum(terms: &[Term], target: i64) -> Result<(), ValidationError> {
    let actual = terms
        .iter()
        .try_fold(0_i64, |acc, term| acc.checked_add(term.value));
    match actual {
        Some(actual) if actual == target => Ok(()),
        Some(actual) => Err(ValidationError::ValueMismatch {
            expected: target,
            actual,
        }),
        None => Err(ValidationError::ValueMismatch {
            expected: target,
            actual: i64::MAX,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_distinct_terms() {
        let terms = vec![Term::plain("4!", 24), Term::plain("4", 4)];
        assert!(validate_terms(&terms, 4).is_ok());
        assert!(check_sum(&terms, 28).is_ok());
    }

    #[test]
    fn test_validate_rejects_too_many_terms() {
        let terms = vec![
            Term::plain("4", 4),
            Term::plain(r"\sqrt{4}", 2),
            Term::plain(r"\log_{4}4", 1),
        ];
        assert_eq!(
            validate_terms(&terms, 2),
            Err(ValidationError::TooManyTerms { count: 3, max: 2 })
        );
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let terms = vec![Term::plain("4", 4), Term::plain("4", 4)];
        assert_eq!(
            validate_terms(&terms, 4),
            Err(ValidationError::DuplicateTerm("4".to_string()))
        );
    }

    #[test]
    fn test_negated_term_differs_from_plain() {
        let terms = vec![Term::plain("4", 4), Term::negated("4", 4)];
        assert!(validate_terms(&terms, 4).is_ok());
        assert!(check_sum(&terms, 0).is_ok());
    }

    #[test]
    fn test_compound_terms_stay_one_summand() {
        let terms = vec![Term::plain("4 + 4", 8), Term::plain("4", 4)];
        assert!(validate_terms(&terms, 2).is_ok());

        let terms = vec![
            Term::plain("4 + 4", 8),
            Term::plain(r"\sqrt{4}", 2),
            Term::negated("4", 4),
        ];
        assert!(validate_terms(&terms, 3).is_ok());
    }

    #[test]
    fn test_leading_negation_is_rejected() {
        let terms = vec![Term::negated("4", 4), Term::plain("4!", 24)];
        assert_eq!(
            validate_terms(&terms, 4),
            Err(ValidationError::SummandMismatch {
                terms: 2,
                summands: 3
            })
        );
    }

    #[test]
    fn test_check_sum_mismatch() {
        let terms = vec![Term::plain("4", 4)];
        assert_eq!(
            check_sum(&terms, 5),
            Err(ValidationError::ValueMismatch {
                expected: 5,
                actual: 4
            })
        );
        let terms = vec![Term::plain("a", i64::MAX), Term::plain("b", 1)];
        assert!(check_sum(&terms, 0).is_err());
    }
}
