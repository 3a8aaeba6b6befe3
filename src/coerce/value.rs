#![forbid(unsafe_code)]

//! Coercion targets and coerced values
//!
//! `ValueKind` is the closed set of coercion strategies an option can
//! declare; `Value` is what a successful coercion produces.

use crate::coerce::enum_binding::{EnumBinding, EnumMember};
use serde::Serialize;

/// The coercion target declared by an option
///
/// A fixed set of primitive kinds plus one variant carrying a bound
/// enumeration with its precomputed lookup table. Selection happens by
/// matching on this type; there is no runtime reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// Raw string, taken as-is
    Str,
    /// Signed 64-bit integer, locale-independent parsing
    Int,
    /// 64-bit floating point, locale-independent parsing
    Float,
    /// Boolean with a fixed recognized vocabulary of truthy/falsy tokens
    Bool,
    /// A bound enumeration whose members carry string values
    Enum(EnumBinding),
}

impl ValueKind {
    /// Returns a human-readable name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
            ValueKind::Float => "number",
            ValueKind::Bool => "boolean",
            ValueKind::Enum(_) => "enumeration",
        }
    }

    /// Whether an option of this kind consumes an argument token
    ///
    /// Boolean options are presence flags on the command line; every
    /// other kind takes an argument.
    pub fn takes_argument(&self) -> bool {
        !matches!(self, ValueKind::Bool)
    }

    /// Checks that a value is a well-formed instance of this kind
    ///
    /// For enumerations the member must actually belong to the binding,
    /// under both its name and its string value.
    pub fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueKind::Str, Value::Str(_)) => true,
            (ValueKind::Int, Value::Int(_)) => true,
            (ValueKind::Float, Value::Float(_)) => true,
            (ValueKind::Bool, Value::Bool(_)) => true,
            (ValueKind::Enum(binding), Value::Member(member)) => binding
                .lookup(&member.value)
                .is_some_and(|found| found.name == member.name),
            _ => false,
        }
    }
}

/// A typed value produced by coercing a raw token
///
/// `List` only appears for repeated options, where occurrences accumulate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Member(EnumMember),
    List(Vec<Value>),
}

impl Value {
    /// Returns a human-readable name for this value's shape
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Member(_) => "enumeration member",
            Value::List(_) => "list",
        }
    }

    /// Returns the contained string, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained integer, if this is an integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained number, if this is a float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained boolean, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the matched member, if this is an enumeration value
    pub fn as_member(&self) -> Option<&EnumMember> {
        match self {
            Value::Member(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the accumulated items, if this is a list value
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protocol_binding() -> EnumBinding {
        EnumBinding::new("protocol", [("udp", "udp"), ("tcp", "tcp")]).unwrap()
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::Str.name(), "string");
        assert_eq!(ValueKind::Int.name(), "integer");
        assert_eq!(ValueKind::Float.name(), "number");
        assert_eq!(ValueKind::Bool.name(), "boolean");
        assert_eq!(ValueKind::Enum(protocol_binding()).name(), "enumeration");
    }

    #[test]
    fn test_takes_argument() {
        assert!(ValueKind::Str.takes_argument());
        assert!(ValueKind::Int.takes_argument());
        assert!(ValueKind::Float.takes_argument());
        assert!(ValueKind::Enum(protocol_binding()).takes_argument());
        assert!(!ValueKind::Bool.takes_argument());
    }

    #[test]
    fn test_admits_matching_values() {
        assert!(ValueKind::Str.admits(&Value::Str("x".to_string())));
        assert!(ValueKind::Int.admits(&Value::Int(42)));
        assert!(ValueKind::Float.admits(&Value::Float(4.2)));
        assert!(ValueKind::Bool.admits(&Value::Bool(true)));
    }

    #[test]
    fn test_admits_rejects_mismatched_values() {
        assert!(!ValueKind::Int.admits(&Value::Str("42".to_string())));
        assert!(!ValueKind::Str.admits(&Value::Int(42)));
        assert!(!ValueKind::Bool.admits(&Value::Int(1)));
    }

    #[test]
    fn test_admits_checks_enum_membership() {
        let kind = ValueKind::Enum(protocol_binding());
        let binding = protocol_binding();

        let udp = binding.lookup("udp").unwrap().clone();
        assert!(kind.admits(&Value::Member(udp)));

        let foreign = EnumMember {
            name: "icmp".to_string(),
            value: "icmp".to_string(),
        };
        assert!(!kind.admits(&Value::Member(foreign)));

        // Same value but a different member name is not admitted either
        let renamed = EnumMember {
            name: "datagram".to_string(),
            value: "udp".to_string(),
        };
        assert!(!kind.admits(&Value::Member(renamed)));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Str("x".to_string()).as_str(), Some("x"));
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Float(4.2).as_float(), Some(4.2));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_str(), None);
        assert_eq!(Value::Str("42".to_string()).as_int(), None);

        let items = vec![Value::Str("a".to_string()), Value::Str("b".to_string())];
        let list = Value::List(items.clone());
        assert_eq!(list.as_list(), Some(items.as_slice()));
    }

    #[test]
    fn test_value_serialization_is_untagged() {
        assert_eq!(serde_json::to_string(&Value::Int(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(
            serde_json::to_string(&Value::Str("x".to_string())).unwrap(),
            "\"x\""
        );

        let binding = protocol_binding();
        let member = Value::Member(binding.lookup("tcp").unwrap().clone());
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&member).unwrap()).unwrap();
        assert_eq!(json["name"], "tcp");
        assert_eq!(json["value"], "tcp");
    }
}
