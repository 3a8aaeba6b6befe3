#![forbid(unsafe_code)]

//! Option declarations
//!
//! An `OptionDef` describes one command-line option: its name, the type
//! raw tokens are coerced to, and the metadata a driver needs to present
//! it (help text, short name, argument name, hidden flag). Declarations
//! are built once when the CLI is defined and are immutable afterwards;
//! everything that can be validated is validated here, at definition
//! time.

use crate::coerce::{Value, ValueKind, coerce};
use crate::error::DefinitionError;
use crate::types::{OptionName, ParamName};

/// Default argument name shown for options that take an argument
const DEFAULT_ARGNAME: &str = "ARG";

/// A validation constraint checked after kind coercion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Inclusive bounds for integer options; either end may be open
    Range { min: Option<i64>, max: Option<i64> },
    /// String options must not be empty
    NonEmpty,
}

impl Constraint {
    /// Human-readable description used in error messages
    pub fn describe(&self) -> String {
        match self {
            Constraint::Range { min, max } => match (min, max) {
                (Some(lo), Some(hi)) => format!("must be between {} and {}", lo, hi),
                (Some(lo), None) => format!("must be at least {}", lo),
                (None, Some(hi)) => format!("must be at most {}", hi),
                (None, None) => "unbounded range".to_string(),
            },
            Constraint::NonEmpty => "must not be empty".to_string(),
        }
    }

    /// Whether this constraint can apply to the given kind
    fn applies_to(&self, kind: &ValueKind) -> bool {
        match self {
            Constraint::Range { .. } => matches!(kind, ValueKind::Int),
            Constraint::NonEmpty => matches!(kind, ValueKind::Str),
        }
    }
}

/// Describes a command line option
///
/// Constructed with [`OptionDef::new`] and refined through the builder
/// methods; the fallible ones return `DefinitionError` so that a
/// malformed declaration can never be parsed against.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDef {
    name: OptionName,
    kind: ValueKind,
    help: String,
    short_name: Option<char>,
    argname: Option<String>,
    param_name: ParamName,
    hidden: bool,
    repeated: bool,
    default: Option<Value>,
    constraints: Vec<Constraint>,
}

impl OptionDef {
    /// Creates a new option declaration
    ///
    /// The parameter name defaults to the option name with hyphens
    /// replaced by underscores, and argument-taking kinds get the
    /// default `ARG` argument name.
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::InvalidOptionName` if the name fails
    /// the naming rule.
    pub fn new(name: &str, kind: ValueKind) -> Result<Self, DefinitionError> {
        let name = OptionName::new(name)
            .ok_or_else(|| DefinitionError::InvalidOptionName(name.to_string()))?;
        let param_name = name.param_name();
        let argname = kind
            .takes_argument()
            .then(|| DEFAULT_ARGNAME.to_string());
        Ok(OptionDef {
            name,
            kind,
            help: String::new(),
            short_name: None,
            argname,
            param_name,
            hidden: false,
            repeated: false,
            default: None,
            constraints: Vec::new(),
        })
    }

    /// Sets the help message displayed in command help
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the single-letter alias, e.g. `v` to enable `-v`
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::InvalidShortName` unless the character
    /// is ASCII alphanumeric.
    pub fn with_short_name(mut self, short: char) -> Result<Self, DefinitionError> {
        if !short.is_ascii_alphanumeric() {
            return Err(DefinitionError::InvalidShortName(short.to_string()));
        }
        self.short_name = Some(short);
        Ok(self)
    }

    /// Sets the name of the option argument shown in usage text
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::ArgnameNotAllowed` for boolean options,
    /// which take no argument.
    pub fn with_argname(mut self, argname: impl Into<String>) -> Result<Self, DefinitionError> {
        if !self.kind.takes_argument() {
            return Err(DefinitionError::ArgnameNotAllowed(
                self.name.as_str().to_string(),
            ));
        }
        self.argname = Some(argname.into());
        Ok(self)
    }

    /// Overrides the parameter name the coerced value is stored under
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::InvalidParamName` if the name fails the
    /// naming rule.
    pub fn with_param_name(mut self, param: &str) -> Result<Self, DefinitionError> {
        self.param_name = ParamName::new(param)
            .ok_or_else(|| DefinitionError::InvalidParamName(param.to_string()))?;
        Ok(self)
    }

    /// Hides the option from help and documentation
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Marks the option as list-valued
    ///
    /// Repeated occurrences accumulate into a list; the `-` token resets
    /// the accumulated values.
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Sets the default value used when the option is not supplied
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::DefaultKindMismatch` if the value does
    /// not belong to the declared kind. For enumeration options the
    /// member must belong to the binding.
    pub fn with_default(mut self, value: Value) -> Result<Self, DefinitionError> {
        if !self.kind.admits(&value) {
            return Err(DefinitionError::DefaultKindMismatch {
                option: self.name.as_str().to_string(),
                expected: self.kind.name().to_string(),
                found: value.kind_name().to_string(),
            });
        }
        self.default = Some(value);
        Ok(self)
    }

    /// Sets the default by coercing a raw token at definition time
    ///
    /// Convenient for enumeration options, where the default can be
    /// written as the member's string value. The token goes through the
    /// option's own coercion rule, constraints included.
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::InvalidDefault` if the token does not
    /// coerce.
    pub fn with_default_token(mut self, raw: &str) -> Result<Self, DefinitionError> {
        let value = coerce(&self, raw).map_err(|e| DefinitionError::InvalidDefault {
            option: self.name.as_str().to_string(),
            message: e.to_string(),
        })?;
        self.default = Some(value);
        Ok(self)
    }

    /// Attaches a validation constraint
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::ConstraintKindMismatch` if the
    /// constraint cannot apply to the declared kind.
    pub fn with_constraint(mut self, constraint: Constraint) -> Result<Self, DefinitionError> {
        if !constraint.applies_to(&self.kind) {
            return Err(DefinitionError::ConstraintKindMismatch {
                option: self.name.as_str().to_string(),
                constraint: constraint.describe(),
                kind: self.kind.name().to_string(),
            });
        }
        self.constraints.push(constraint);
        Ok(self)
    }

    /// Returns the option's name
    pub fn name(&self) -> &OptionName {
        &self.name
    }

    /// Returns the declared coercion target
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Returns the help message
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Returns the single-letter alias, if any
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// Returns the argument name, if the option takes an argument
    pub fn argname(&self) -> Option<&str> {
        self.argname.as_deref()
    }

    /// Returns the parameter name the coerced value is stored under
    pub fn param_name(&self) -> &ParamName {
        &self.param_name
    }

    /// Whether the option is hidden from help and documentation
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the option is list-valued
    pub fn is_repeated(&self) -> bool {
        self.repeated
    }

    /// Returns the declared default value, if any
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the declared constraints
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Whether the option consumes an argument token
    pub fn takes_argument(&self) -> bool {
        self.kind.takes_argument()
    }

    /// Returns the negated spelling for a boolean option
    ///
    /// `dry-run` negates to `no-dry-run`, and an option already named
    /// with a `no-` prefix negates to the stripped form. Non-boolean
    /// options have no negation.
    pub fn negation_name(&self) -> Option<String> {
        if !matches!(self.kind, ValueKind::Bool) {
            return None;
        }
        let name = self.name.as_str();
        Some(match name.strip_prefix("no-") {
            Some(stripped) => stripped.to_string(),
            None => format!("no-{}", name),
        })
    }
}
