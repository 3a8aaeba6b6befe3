//! Error types for cmdcmd
//!
//! Two failure categories exist: `DefinitionError` is raised while a CLI
//! is being declared (malformed names, bad enum bindings, conflicting
//! registrations) and is fatal to setup; `CoercionError` is raised when a
//! raw command-line token cannot be converted to the declared type and is
//! meant to be rendered back to the user by the calling driver.

use serde::Serialize;

/// Errors raised while declaring options, enum bindings, or commands
///
/// Any of these means the CLI definition itself is wrong: they surface
/// immediately at definition time, never at first parse.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// Option name fails the naming rule
    #[error("Invalid option name: '{0}'")]
    InvalidOptionName(String),

    /// Short name is not a single ASCII alphanumeric character
    #[error("Invalid short name '{0}': must be a single ASCII alphanumeric character")]
    InvalidShortName(String),

    /// Parameter name fails the naming rule
    #[error("Invalid parameter name: '{0}'")]
    InvalidParamName(String),

    /// Command name fails the naming rule
    #[error("Invalid command name: '{0}'")]
    InvalidCommandName(String),

    /// Argument name given for an option kind that takes no argument
    #[error("Option '{0}' takes no argument, argname is not valid")]
    ArgnameNotAllowed(String),

    /// Enumeration name fails the naming rule
    #[error("Invalid enumeration name: '{0}'")]
    InvalidEnumName(String),

    /// Enumeration declared with no members
    #[error("Enumeration '{0}' has no members")]
    EmptyEnum(String),

    /// Enumeration member name fails the naming rule
    #[error("Invalid member name '{member}' in enumeration '{enum_name}'")]
    InvalidMemberName { enum_name: String, member: String },

    /// Two members of one enumeration share a name
    #[error("Duplicate member '{member}' in enumeration '{enum_name}'")]
    DuplicateMember { enum_name: String, member: String },

    /// Two members of one enumeration share a string value
    #[error("Duplicate member value '{value}' in enumeration '{enum_name}'")]
    DuplicateMemberValue { enum_name: String, value: String },

    /// An enumeration member carries a non-string value
    #[error(
        "Member '{member}' of enumeration '{enum_name}' has a {found} value, expected a string"
    )]
    NonStringMember {
        enum_name: String,
        member: String,
        found: String,
    },

    /// Enumeration definition file could not be parsed
    #[error("Invalid enumeration definition: {0}")]
    InvalidSyntax(String),

    /// Declared default does not match the option's kind
    #[error("Default for option '{option}' must be {expected}, got {found}")]
    DefaultKindMismatch {
        option: String,
        expected: String,
        found: String,
    },

    /// Declared default is rejected by the option's own coercion rule
    #[error("Invalid default for option '{option}': {message}")]
    InvalidDefault { option: String, message: String },

    /// Constraint attached to an option kind it cannot apply to
    #[error("Constraint '{constraint}' cannot apply to {kind} option '{option}'")]
    ConstraintKindMismatch {
        option: String,
        constraint: String,
        kind: String,
    },

    /// Two options in one scope share a long name
    #[error("Duplicate option '{0}' in this scope")]
    DuplicateOption(String),

    /// Two options in one scope share a short name
    #[error("Duplicate short name '-{0}' in this scope")]
    DuplicateShortName(char),

    /// Two registered commands share a name
    #[error("Duplicate command '{0}'")]
    DuplicateCommand(String),

    /// A command alias collides with an existing name or alias
    #[error("Alias '{alias}' for command '{command}' is already taken")]
    DuplicateAlias { alias: String, command: String },

    /// I/O error reading a definition file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when a raw token cannot be coerced to an option's type
///
/// These carry the option name and the offending token so the driver can
/// build a precise usage message without re-deriving context. For
/// enumerations the complete legal value set is included, sorted, and is
/// identical across repeated failures of the same binding.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoercionError {
    /// Token is not among an enumeration's member values
    #[error(
        "invalid choice '{token}' for option '{option}' (choose from: {list})",
        list = .choices.join(", ")
    )]
    InvalidChoice {
        option: String,
        token: String,
        choices: Vec<String>,
    },

    /// Token is not a valid integer
    #[error("invalid integer '{token}' for option '{option}'")]
    InvalidInt { option: String, token: String },

    /// Token is not a valid floating-point number
    #[error("invalid number '{token}' for option '{option}'")]
    InvalidFloat { option: String, token: String },

    /// Token is not in the recognized boolean vocabulary
    #[error("invalid boolean '{token}' for option '{option}'")]
    InvalidBool { option: String, token: String },

    /// Coerced value violates a declared constraint
    #[error("value '{token}' for option '{option}' violates constraint: {constraint}")]
    ConstraintViolation {
        option: String,
        token: String,
        constraint: String,
    },
}

impl CoercionError {
    /// Returns the name of the option the failure belongs to
    pub fn option(&self) -> &str {
        match self {
            CoercionError::InvalidChoice { option, .. }
            | CoercionError::InvalidInt { option, .. }
            | CoercionError::InvalidFloat { option, .. }
            | CoercionError::InvalidBool { option, .. }
            | CoercionError::ConstraintViolation { option, .. } => option,
        }
    }

    /// Returns the offending raw token
    pub fn token(&self) -> &str {
        match self {
            CoercionError::InvalidChoice { token, .. }
            | CoercionError::InvalidInt { token, .. }
            | CoercionError::InvalidFloat { token, .. }
            | CoercionError::InvalidBool { token, .. }
            | CoercionError::ConstraintViolation { token, .. } => token,
        }
    }

    /// Returns the sorted legal value set for choice failures
    pub fn choices(&self) -> Option<&[String]> {
        match self {
            CoercionError::InvalidChoice { choices, .. } => Some(choices),
            _ => None,
        }
    }

    /// Renders the failure as a single JSON object
    ///
    /// Drivers that emit machine-readable usage errors get one record per
    /// failure with a stable field layout.
    pub fn to_json(&self) -> String {
        let record = FailureRecord {
            error: match self {
                CoercionError::InvalidChoice { .. } => "invalid-choice",
                CoercionError::InvalidInt { .. } => "invalid-integer",
                CoercionError::InvalidFloat { .. } => "invalid-number",
                CoercionError::InvalidBool { .. } => "invalid-boolean",
                CoercionError::ConstraintViolation { .. } => "constraint-violation",
            },
            option: self.option().to_string(),
            token: self.token().to_string(),
            choices: self.choices().map(<[String]>::to_vec),
            message: self.to_string(),
        };
        serde_json::to_string(&record).unwrap_or_default()
    }
}

/// Machine-readable record for a coercion failure
#[derive(Debug, Serialize)]
struct FailureRecord {
    error: &'static str,
    option: String,
    token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<Vec<String>>,
    message: String,
}

/// Errors raised while dispatching or running a command
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// No command registered under the given name or alias
    #[error("command '{0}' does not exist")]
    UnknownCommand(String),

    /// The command ran and reported a failure
    #[error("{command}: {message}")]
    Failed { command: String, message: String },
}

/// Top-level error type for cmdcmd
#[derive(Debug, thiserror::Error)]
pub enum CmdError {
    /// Definition error
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// Coercion error
    #[error("Usage error: {0}")]
    Coercion(#[from] CoercionError),

    /// Command error
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
