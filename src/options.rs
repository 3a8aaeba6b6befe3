#![forbid(unsafe_code)]

//! Option declarations and per-command option scopes

mod option_def;
mod option_set;

// Re-export core types
pub use option_def::{Constraint, OptionDef};
pub use option_set::{OptionSet, standard_options};
