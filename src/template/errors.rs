use thiserror::Error;

/// Errors that can occur while resolving a template to an integer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Template is empty")]
    Empty,
    #[error("Unknown template: {0}")]
    Unknown(String),
    #[error("Integer overflow while evaluating: {0}")]
    Overflow(String),
}
