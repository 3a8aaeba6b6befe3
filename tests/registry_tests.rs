//! Integration tests for command registration and lookup
//!
//! Lookup by name and by alias, collision rejection, and deterministic
//! listings, all through the public API.

use cmdcmd::{
    Command, CommandError, CommandName, CommandRegistry, DefinitionError, OptionSet, ValueBag,
};

struct PlainCommand {
    name: CommandName,
    aliases: Vec<CommandName>,
    options: OptionSet,
}

impl PlainCommand {
    fn boxed(name: &str, aliases: &[&str]) -> Box<dyn Command> {
        Box::new(PlainCommand {
            name: CommandName::new(name).unwrap(),
            aliases: aliases
                .iter()
                .map(|a| CommandName::new(*a).unwrap())
                .collect(),
            options: OptionSet::standard(),
        })
    }
}

impl Command for PlainCommand {
    fn name(&self) -> &CommandName {
        &self.name
    }

    fn summary(&self) -> &str {
        "a plain command"
    }

    fn aliases(&self) -> &[CommandName] {
        &self.aliases
    }

    fn options(&self) -> &OptionSet {
        &self.options
    }

    fn run(&self, _values: &ValueBag) -> Result<i32, CommandError> {
        Ok(0)
    }
}

#[test]
fn test_get_nonexistent_command() {
    let mut registry = CommandRegistry::new();
    registry.register(PlainCommand::boxed("foo", &[])).unwrap();
    registry.register(PlainCommand::boxed("bar", &[])).unwrap();

    assert!(registry.get("baz", true).is_none());
    assert!(registry.get("baz", false).is_none());

    // Adding a command with aliases does not mess things up
    registry
        .register(PlainCommand::boxed("spam", &["eggs"]))
        .unwrap();
    assert!(registry.get("baz", true).is_none());
    assert!(registry.get("baz", false).is_none());
}

#[test]
fn test_get_command() {
    let mut registry = CommandRegistry::new();
    registry.register(PlainCommand::boxed("foo", &[])).unwrap();
    registry.register(PlainCommand::boxed("bar", &[])).unwrap();

    assert_eq!(registry.get("foo", true).unwrap().name().as_str(), "foo");
    assert_eq!(registry.get("foo", false).unwrap().name().as_str(), "foo");
}

#[test]
fn test_get_command_alias() {
    let mut registry = CommandRegistry::new();
    registry.register(PlainCommand::boxed("foo", &[])).unwrap();
    registry.register(PlainCommand::boxed("bar", &[])).unwrap();
    registry
        .register(PlainCommand::boxed("spam", &["eggs"]))
        .unwrap();

    assert_eq!(registry.get("eggs", true).unwrap().name().as_str(), "spam");
    assert_eq!(registry.get("spam", true).unwrap().name().as_str(), "spam");
    assert_eq!(registry.get("spam", false).unwrap().name().as_str(), "spam");
    assert!(registry.get("eggs", false).is_none());
}

#[test]
fn test_registration_collisions() {
    let mut registry = CommandRegistry::new();
    registry
        .register(PlainCommand::boxed("commit", &["ci"]))
        .unwrap();

    // Same name again
    assert!(matches!(
        registry.register(PlainCommand::boxed("commit", &[])),
        Err(DefinitionError::DuplicateCommand(_))
    ));

    // New command whose name equals an existing alias
    assert!(matches!(
        registry.register(PlainCommand::boxed("ci", &[])),
        Err(DefinitionError::DuplicateCommand(_))
    ));

    // New command with an alias equal to an existing name
    assert!(matches!(
        registry.register(PlainCommand::boxed("checkin", &["commit"])),
        Err(DefinitionError::DuplicateAlias { .. })
    ));

    // Failed registrations leave the registry as it was
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_sorted_names_for_listings() {
    let mut registry = CommandRegistry::new();
    registry.register(PlainCommand::boxed("rebase", &[])).unwrap();
    registry.register(PlainCommand::boxed("add", &[])).unwrap();
    registry
        .register(PlainCommand::boxed("commit", &["ci"]))
        .unwrap();

    let names: Vec<String> = registry
        .sorted_names(false)
        .iter()
        .map(|n| n.as_str().to_string())
        .collect();
    // Aliases are not listed, and order is alphabetical
    assert_eq!(names, vec!["add", "commit", "rebase"]);
}

#[test]
fn test_commands_carry_standard_options() {
    let mut registry = CommandRegistry::new();
    registry.register(PlainCommand::boxed("foo", &[])).unwrap();

    let command = registry.get("foo", false).unwrap();
    let options = command.options();
    assert!(options.get("help").is_some());
    assert!(options.get("usage").is_some());
    assert_eq!(options.get_by_short('h').unwrap().name().as_str(), "help");
}
