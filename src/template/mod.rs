//! Best-effort integer evaluation of the small LaTeX template language

mod errors;
mod eval;

pub use errors::TemplateError;
pub use eval::{evaluate, is_compound, split_top_level};
