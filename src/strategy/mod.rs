//! Decomposition strategies: each turns a non-negative target into at most
//! `max_terms` distinct terms whose values sum to the target exactly.

mod binary;
pub mod constants;
mod fill;
mod greedy;
mod kind;
mod mixed;
mod relaxed;
mod term;

pub use kind::{StrategyKind, UsedTexts};
pub use term::{Term, TermForm, render_terms};
