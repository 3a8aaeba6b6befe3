#![forbid(unsafe_code)]

//! Option collections scoped to one command
//!
//! An `OptionSet` holds the options one command accepts, in declaration
//! order, and enforces that long names and short names are unique within
//! the scope.

use crate::coerce::ValueKind;
use crate::error::DefinitionError;
use crate::options::option_def::OptionDef;

/// Builds the standard options every command supports
///
/// `--help` (with `-h`) and `--usage`, mirroring the pair registered for
/// all commands by default.
pub fn standard_options() -> Vec<OptionDef> {
    // Names and short name are static and pass the naming rule
    let help = OptionDef::new("help", ValueKind::Bool)
        .and_then(|o| o.with_short_name('h'))
        .map(|o| o.with_help("Show help message"));
    let usage = OptionDef::new("usage", ValueKind::Bool)
        .map(|o| o.with_help("Show usage message and options"));
    [help, usage].into_iter().flatten().collect()
}

/// The options accepted by one command scope
///
/// Options keep their declaration order, which makes generated listings
/// deterministic. Lookups are linear: per-command option counts are
/// small and the set is built once.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    options: Vec<OptionDef>,
}

impl OptionSet {
    /// Creates an empty option set
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Creates a set pre-populated with the standard options
    pub fn standard() -> Self {
        Self {
            options: standard_options(),
        }
    }

    /// Adds an option to the scope
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::DuplicateOption` if the long name is
    /// already taken, or `DefinitionError::DuplicateShortName` if the
    /// short name is.
    pub fn add(&mut self, option: OptionDef) -> Result<(), DefinitionError> {
        if self.get(option.name().as_str()).is_some() {
            return Err(DefinitionError::DuplicateOption(
                option.name().as_str().to_string(),
            ));
        }
        if let Some(short) = option.short_name()
            && self.get_by_short(short).is_some()
        {
            return Err(DefinitionError::DuplicateShortName(short));
        }
        self.options.push(option);
        Ok(())
    }

    /// Looks up an option by its long name
    pub fn get(&self, name: &str) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.name().as_str() == name)
    }

    /// Looks up an option by its single-letter alias
    pub fn get_by_short(&self, short: char) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.short_name() == Some(short))
    }

    /// Looks up an option by the parameter name its value is stored under
    pub fn get_by_param(&self, param: &str) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.param_name().as_str() == param)
    }

    /// Iterates over the options in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &OptionDef> {
        self.options.iter()
    }

    /// Iterates over the options not hidden from help output
    pub fn visible(&self) -> impl Iterator<Item = &OptionDef> {
        self.options.iter().filter(|o| !o.is_hidden())
    }

    /// Number of options in the scope
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the scope has no options
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
