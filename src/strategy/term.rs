use crate::template::is_compound;

/// How a term's source text appears in the expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermForm {
    Plain,
    /// Rendered `-\left(X\right)`
    Negated,
    /// Rendered `k \cdot X`; `factor_text` is the table text for `k`, if any
    Scaled {
        factor: i64,
        factor_text: Option<&'static str>,
    },
}

/// One top-level additive component of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Table text this term is built from
    pub source: &'static str,
    /// Signed contribution to the sum
    pub value: i64,
    pub form: TermForm,
}

fn wrap_if_compound(text: &str) -> String {
    if is_compound(text) {
        format!("\\left({}\\right)", text)
    } else {
        text.to_string()
    }
}

impl Term {
    pub fn plain(source: &'static str, value: i64) -> Self {
        Self {
            source,
            value,
            form: TermForm::Plain,
        }
    }

    /// A term subtracting `magnitude`
    pub fn negated(source: &'static str, magnitude: i64) -> Self {
        Self {
            source,
            value: -magnitude,
            form: TermForm::Negated,
        }
    }

    /// `factor` copies of `source`; `None` if the product overflows
    pub fn scaled(
        source: &'static str,
        unit_value: i64,
        factor: i64,
        factor_text: Option<&'static str>,
    ) -> Option<Self> {
        Some(Self {
            source,
            value: unit_value.checked_mul(factor)?,
            form: TermForm::Scaled {
                factor,
                factor_text,
            },
        })
    }

    pub fn is_negated(&self) -> bool {
        matches!(self.form, TermForm::Negated)
    }

    pub fn is_scaled(&self) -> bool {
        matches!(self.form, TermForm::Scaled { .. })
    }

    /// The term as it would stand alone
    pub fn render(&self) -> String {
        match self.form {
            TermForm::Plain => self.source.to_string(),
            TermForm::Negated => format!("-\\left({}\\right)", self.source),
            TermForm::Scaled {
                factor,
                factor_text,
            } => {
                let factor = match factor_text {
                    Some(text) => wrap_if_compound(text),
                    None => factor.to_string(),
                };
                format!("{} \\cdot {}", factor, wrap_if_compound(self.source))
            }
        }
    }
}

/// Join terms into one expression, writing negated terms as subtractions.
///
/// With more than one term, a compound plain source is bracketed so that each
/// term stays a single visible summand.
pub fn render_terms(terms: &[Term]) -> String {
    let bracket = terms.len() > 1;
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        let text = match term.form {
            TermForm::Plain if bracket => wrap_if_compound(term.source),
            _ => term.render(),
        };
        if i == 0 {
            out.push_str(&text);
        } else if term.is_negated() {
            out.push_str(&format!(" - \\left({}\\right)", term.source));
        } else {
            out.push_str(" + ");
            out.push_str(&text);
        }
    }
    out
}
