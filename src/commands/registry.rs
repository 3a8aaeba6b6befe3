#![forbid(unsafe_code)]

//! Command registry
//!
//! The CommandRegistry is responsible for:
//! - Holding registered commands as trait objects, keyed by name
//! - Maintaining the alias index
//! - Rejecting name and alias collisions at registration time
//! - Alias-aware lookup

use crate::commands::command::Command;
use crate::error::DefinitionError;
use crate::types::CommandName;
use std::collections::HashMap;

/// Registry for storing and looking up commands
///
/// Commands are stored as trait objects to allow different
/// implementations behind one dispatch surface. Registration is
/// all-or-nothing: a command whose name or aliases collide leaves the
/// registry untouched.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<CommandName, Box<dyn Command>>,
    aliases: HashMap<CommandName, CommandName>,
}

impl CommandRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Registers a command
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::DuplicateCommand` if the name is
    /// already taken (as a name or as an alias), and
    /// `DefinitionError::DuplicateAlias` if any alias collides with an
    /// existing name, an existing alias, or another alias of the same
    /// command.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), DefinitionError> {
        let name = command.name().clone();
        if self.commands.contains_key(&name) || self.aliases.contains_key(&name) {
            return Err(DefinitionError::DuplicateCommand(
                name.as_str().to_string(),
            ));
        }

        let mut new_aliases = Vec::with_capacity(command.aliases().len());
        for alias in command.aliases() {
            let collides = alias == &name
                || self.commands.contains_key(alias)
                || self.aliases.contains_key(alias)
                || new_aliases.contains(alias);
            if collides {
                return Err(DefinitionError::DuplicateAlias {
                    alias: alias.as_str().to_string(),
                    command: name.as_str().to_string(),
                });
            }
            new_aliases.push(alias.clone());
        }

        for alias in new_aliases {
            self.aliases.insert(alias, name.clone());
        }
        self.commands.insert(name, command);
        Ok(())
    }

    /// Obtains a command given its name
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the command
    /// * `aliases` - Allow searching for aliases
    pub fn get(&self, name: &str, aliases: bool) -> Option<&dyn Command> {
        let key = CommandName::new(name)?;
        if let Some(command) = self.commands.get(&key) {
            return Some(command.as_ref());
        }
        if aliases
            && let Some(canonical) = self.aliases.get(&key)
        {
            return self.commands.get(canonical).map(|c| c.as_ref());
        }
        None
    }

    /// Checks whether a command exists given its name
    pub fn contains(&self, name: &str, aliases: bool) -> bool {
        self.get(name, aliases).is_some()
    }

    /// Iterates over all registered commands
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|boxed| boxed.as_ref())
    }

    /// Returns command names in sorted order
    ///
    /// Listings built from this are reproducible run to run. Hidden
    /// commands are filtered out unless asked for.
    pub fn sorted_names(&self, include_hidden: bool) -> Vec<CommandName> {
        let mut names: Vec<CommandName> = self
            .commands
            .values()
            .filter(|c| include_hidden || !c.is_hidden())
            .map(|c| c.name().clone())
            .collect();
        names.sort();
        names
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.sorted_names(true))
            .field("aliases", &self.aliases)
            .finish()
    }
}
