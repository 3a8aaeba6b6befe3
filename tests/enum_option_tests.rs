//! Integration tests for enumeration-typed options
//!
//! This module exercises the coercion engine through the public API:
//! member round-trips, invalid-choice reporting, determinism, and the
//! interaction between enum options, defaults, and command dispatch.

use cmdcmd::{
    Cli, CoercionError, Command, CommandError, CommandName, EnumBinding, OptionDef, OptionSet,
    Value, ValueBag, ValueKind, coerce,
};

fn protocol_binding() -> EnumBinding {
    EnumBinding::new(
        "protocol",
        [("udp", "udp"), ("tcp", "tcp"), ("icmp", "icmp"), ("arp", "arp")],
    )
    .unwrap()
}

fn strategy_binding() -> EnumBinding {
    EnumBinding::new(
        "strategy",
        [
            ("octopus", "octopus"),
            ("ours", "ours"),
            ("recursive", "recursive"),
            ("resolve", "resolve"),
            ("subtree", "subtree"),
        ],
    )
    .unwrap()
}

#[test]
fn test_every_member_value_coerces_to_its_member() {
    let binding = strategy_binding();
    let option = OptionDef::new("strategy", ValueKind::Enum(binding.clone())).unwrap();

    for member in binding.members() {
        let value = coerce(&option, &member.value).unwrap();
        assert_eq!(value.as_member().unwrap(), member);
    }
}

#[test]
fn test_strategy_scenario() {
    let option = OptionDef::new("strategy", ValueKind::Enum(strategy_binding())).unwrap();

    let value = coerce(&option, "recursive").unwrap();
    assert_eq!(value.as_member().unwrap().name, "recursive");

    let err = coerce(&option, "invalid").unwrap_err();
    match err {
        CoercionError::InvalidChoice {
            option,
            token,
            choices,
        } => {
            assert_eq!(option, "strategy");
            assert_eq!(token, "invalid");
            assert_eq!(
                choices,
                vec!["octopus", "ours", "recursive", "resolve", "subtree"]
            );
        }
        other => panic!("Expected InvalidChoice, got {:?}", other),
    }
}

#[test]
fn test_unknown_token_error_is_complete_and_stable() {
    let option = OptionDef::new("protocol", ValueKind::Enum(protocol_binding())).unwrap();

    let first = coerce(&option, "bananas").unwrap_err();
    let second = coerce(&option, "bananas").unwrap_err();

    assert_eq!(first, second);
    assert_eq!(first.choices().unwrap(), &["arp", "icmp", "tcp", "udp"]);
    assert!(first.to_string().contains("invalid choice"));
    assert!(first.to_string().contains("'bananas'"));
}

#[test]
fn test_matching_is_case_sensitive_and_exact() {
    let option = OptionDef::new("protocol", ValueKind::Enum(protocol_binding())).unwrap();

    assert!(coerce(&option, "tcp").is_ok());
    for token in ["TCP", "Tcp", " tcp", "tcp ", "tc", ""] {
        assert!(
            coerce(&option, token).is_err(),
            "token {:?} should not match",
            token
        );
    }
}

#[test]
fn test_binding_reused_across_options() {
    let binding = protocol_binding();
    let listen = OptionDef::new("listen-protocol", ValueKind::Enum(binding.clone())).unwrap();
    let send = OptionDef::new("send-protocol", ValueKind::Enum(binding)).unwrap();

    let listen_value = coerce(&listen, "udp").unwrap();
    let send_value = coerce(&send, "tcp").unwrap();
    assert_eq!(listen_value.as_member().unwrap().name, "udp");
    assert_eq!(send_value.as_member().unwrap().name, "tcp");

    // Errors name the option they belong to, not the shared binding
    let err = coerce(&listen, "smtp").unwrap_err();
    assert_eq!(err.option(), "listen-protocol");
}

/// A command with one enum option and a default, mirroring a `foo -p`
/// style subcommand
struct FooCommand {
    name: CommandName,
    options: OptionSet,
}

impl FooCommand {
    fn new() -> Self {
        let mut options = OptionSet::new();
        options
            .add(
                OptionDef::new("protocol", ValueKind::Enum(protocol_binding()))
                    .unwrap()
                    .with_short_name('p')
                    .unwrap()
                    .with_help("Protocol")
                    .with_default_token("arp")
                    .unwrap(),
            )
            .unwrap();
        Self {
            name: CommandName::new("foo").unwrap(),
            options,
        }
    }
}

impl Command for FooCommand {
    fn name(&self) -> &CommandName {
        &self.name
    }

    fn summary(&self) -> &str {
        "Does foo."
    }

    fn options(&self) -> &OptionSet {
        &self.options
    }

    fn run(&self, values: &ValueBag) -> Result<i32, CommandError> {
        let option = self.options.get("protocol").ok_or(CommandError::Failed {
            command: self.name.as_str().to_string(),
            message: "protocol option missing".to_string(),
        })?;
        let member = values
            .get_or_default(option)
            .and_then(Value::as_member)
            .ok_or(CommandError::Failed {
                command: self.name.as_str().to_string(),
                message: "no protocol value".to_string(),
            })?;
        // Encode the matched member as an exit code the test can observe
        Ok(match member.name.as_str() {
            "udp" => 10,
            "tcp" => 11,
            "icmp" => 12,
            "arp" => 13,
            _ => 99,
        })
    }
}

#[test]
fn test_enum_option_default_applies_when_absent() {
    let mut cli = Cli::new("foobar");
    cli.register(Box::new(FooCommand::new())).unwrap();

    // No occurrence of --protocol: the declared default (arp) is used
    let code = cli.dispatch("foo", &ValueBag::new()).unwrap();
    assert_eq!(code, 13);
}

#[test]
fn test_enum_option_supplied_value_wins() {
    let mut cli = Cli::new("foobar");
    let command = FooCommand::new();
    let option = command.options().get("protocol").unwrap().clone();
    cli.register(Box::new(command)).unwrap();

    let mut values = ValueBag::new();
    values.apply(&option, "tcp").unwrap();
    assert_eq!(cli.dispatch("foo", &values).unwrap(), 11);

    let mut values = ValueBag::new();
    values.apply(&option, "udp").unwrap();
    assert_eq!(cli.dispatch("foo", &values).unwrap(), 10);
}

#[test]
fn test_enum_option_invalid_value_reports_usage_error() {
    let command = FooCommand::new();
    let option = command.options().get("protocol").unwrap();

    let mut values = ValueBag::new();
    let err = values.apply(option, "bananas").unwrap_err();
    assert!(err.to_string().contains("invalid choice"));
    assert_eq!(err.choices().unwrap(), &["arp", "icmp", "tcp", "udp"]);
    // Nothing was stored for the failed occurrence
    assert!(values.is_empty());
}

#[test]
fn test_invalid_choice_json_rendering() {
    let option = OptionDef::new("strategy", ValueKind::Enum(strategy_binding())).unwrap();
    let err = coerce(&option, "invalid").unwrap_err();

    let json: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();
    assert_eq!(json["error"], "invalid-choice");
    assert_eq!(json["option"], "strategy");
    assert_eq!(json["token"], "invalid");
    let choices: Vec<&str> = json["choices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        choices,
        vec!["octopus", "ours", "recursive", "resolve", "subtree"]
    );
}
