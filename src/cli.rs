#![forbid(unsafe_code)]

//! The top-level CLI controller
//!
//! A `Cli` groups registered commands under a tool name and dispatches
//! them. Tokenizing `argv` and pairing option flags with their raw value
//! tokens is the calling driver's job; the controller takes over once
//! the driver knows which command was named and has filled a `ValueBag`
//! against that command's option scope.

use crate::commands::{Command, CommandRegistry};
use crate::config::ToolConfig;
use crate::error::{CmdError, CommandError, DefinitionError};
use crate::values::ValueBag;

/// Groups commands and dispatches them under one tool name
pub struct Cli {
    name: String,
    config: ToolConfig,
    registry: CommandRegistry,
}

impl Cli {
    /// Creates a new controller for the given tool name
    ///
    /// The tool configuration (config file path and override variable)
    /// is derived from the name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            config: ToolConfig::for_tool(name),
            registry: CommandRegistry::new(),
        }
    }

    /// Replaces the derived tool configuration
    pub fn with_config(mut self, config: ToolConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a command
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError` on name or alias collisions.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), DefinitionError> {
        self.registry.register(command)
    }

    /// Returns the tool name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Returns the command registry
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Runs the named command with the given coerced values
    ///
    /// Lookup honors aliases. Returns the command's exit code.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::UnknownCommand` wrapped in `CmdError` if
    /// no command matches, or the command's own failure.
    pub fn dispatch(&self, command: &str, values: &ValueBag) -> Result<i32, CmdError> {
        let command = self
            .registry
            .get(command, true)
            .ok_or_else(|| CommandError::UnknownCommand(command.to_string()))?;
        Ok(command.run(values)?)
    }
}

impl std::fmt::Debug for Cli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("commands", &self.registry.sorted_names(true))
            .finish()
    }
}
