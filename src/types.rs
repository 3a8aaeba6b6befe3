#![forbid(unsafe_code)]

//! Core domain types for cmdcmd
//!
//! This module defines the validated name newtypes used throughout the
//! library: option names, command names, and the parameter names under
//! which coerced values are stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Checks the shared naming rule for options, commands, and enum members:
/// non-empty, starts with an alphanumeric character, and contains only
/// alphanumerics, hyphens, and underscores.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// A validated option name
///
/// Option names are used in the double-dash form on the command line and
/// must be non-empty, start with an alphanumeric character, and contain
/// only alphanumerics, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionName(String);

impl OptionName {
    /// Creates a new OptionName, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if is_valid_name(&name) {
            Some(OptionName(name))
        } else {
            None
        }
    }

    /// Returns the option name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the parameter name under which this option's coerced value
    /// is stored: the option name with hyphens replaced by underscores.
    pub fn param_name(&self) -> ParamName {
        ParamName(self.0.replace('-', "_"))
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for OptionName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        OptionName::new(value).ok_or_else(|| "Invalid option name".to_string())
    }
}

impl From<OptionName> for String {
    fn from(name: OptionName) -> Self {
        name.0
    }
}

/// A validated command name
///
/// Command names follow the same rule as option names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommandName(String);

impl CommandName {
    /// Creates a new CommandName, validating the input
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if is_valid_name(&name) {
            Some(CommandName(name))
        } else {
            None
        }
    }

    /// Returns the command name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CommandName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CommandName::new(value).ok_or_else(|| "Invalid command name".to_string())
    }
}

impl From<CommandName> for String {
    fn from(name: CommandName) -> Self {
        name.0
    }
}

/// The key under which a coerced option value is stored
///
/// Parameter names are derived from option names (hyphens become
/// underscores) but may be overridden per option. They must be non-empty
/// and contain only alphanumerics and underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParamName(String);

impl ParamName {
    /// Creates a new ParamName, validating the input
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return None;
        }
        Some(ParamName(name))
    }

    /// Returns the parameter name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ParamName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ParamName::new(value).ok_or_else(|| "Invalid parameter name".to_string())
    }
}

impl From<ParamName> for String {
    fn from(name: ParamName) -> Self {
        name.0
    }
}
