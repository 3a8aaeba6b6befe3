#![forbid(unsafe_code)]

//! cmdcmd: declarative command and option definitions with typed coercion
//!
//! cmdcmd is the definition side of a command line interface: an
//! embedding application declares commands and typed options, and an
//! argument-parsing driver feeds raw string tokens in, getting back
//! typed values or structured usage errors. Option types cover the
//! primitive kinds plus enumerations whose members carry string values.

pub mod cli;
pub mod coerce;
pub mod commands;
pub mod config;
pub mod error;
pub mod options;
pub mod types;
pub mod values;

// Re-export error types for convenient access
pub use error::{CmdError, CoercionError, CommandError, DefinitionError};

// Re-export core domain types for convenient access
pub use cli::Cli;
pub use coerce::{EnumBinding, EnumMember, Value, ValueKind, coerce};
pub use commands::{Command, CommandRegistry};
pub use config::ToolConfig;
pub use options::{Constraint, OptionDef, OptionSet, standard_options};
pub use types::{CommandName, OptionName, ParamName};
pub use values::{RESET_TOKEN, ValueBag};
