#![forbid(unsafe_code)]

//! Storage for coerced option values
//!
//! A `ValueBag` is what a driver fills while it walks the command line:
//! each recognized option occurrence is applied with its raw token, and
//! the bag keeps the coerced result under the option's parameter name.
//! Commands read the bag back with typed accessors, falling through to
//! declared defaults for options that never appeared.

use crate::coerce::{Value, coerce};
use crate::error::CoercionError;
use crate::options::OptionDef;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Token that resets a repeated option's accumulated values
///
/// `--foo=a --foo=b --foo=- --foo=c` leaves the value of `foo` at `[c]`.
pub const RESET_TOKEN: &str = "-";

/// Coerced option values keyed by parameter name
///
/// Backed by an ordered map so that listings and serialized snapshots
/// are deterministic.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ValueBag {
    values: BTreeMap<String, Value>,
}

impl ValueBag {
    /// Creates an empty bag
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Coerces a raw token for an option occurrence and stores the result
    ///
    /// Plain options overwrite any earlier occurrence. Repeated options
    /// accumulate values in occurrence order, and the [`RESET_TOKEN`]
    /// clears what has accumulated so far.
    ///
    /// # Errors
    ///
    /// Returns the `CoercionError` from the engine unchanged; the bag is
    /// not modified on failure.
    pub fn apply(&mut self, option: &OptionDef, raw: &str) -> Result<(), CoercionError> {
        let key = option.param_name().as_str().to_string();

        if option.is_repeated() {
            if raw == RESET_TOKEN {
                self.values.insert(key, Value::List(Vec::new()));
                return Ok(());
            }
            let value = coerce(option, raw)?;
            match self.values.entry(key) {
                Entry::Occupied(mut entry) => match entry.get_mut() {
                    Value::List(items) => items.push(value),
                    other => *other = Value::List(vec![value]),
                },
                Entry::Vacant(entry) => {
                    entry.insert(Value::List(vec![value]));
                }
            }
            return Ok(());
        }

        let value = coerce(option, raw)?;
        self.values.insert(key, value);
        Ok(())
    }

    /// Records a bare boolean flag occurrence
    ///
    /// Flags carry no argument token on the command line; the driver
    /// resolves the plain spelling to `true` and the negated spelling
    /// (`--no-X`) to `false` and records the outcome here.
    pub fn set_present(&mut self, option: &OptionDef, present: bool) {
        self.values.insert(
            option.param_name().as_str().to_string(),
            Value::Bool(present),
        );
    }

    /// Returns the stored value for a parameter name, if any
    pub fn get(&self, param: &str) -> Option<&Value> {
        self.values.get(param)
    }

    /// Returns the stored value, or the option's declared default
    pub fn get_or_default<'a>(&'a self, option: &'a OptionDef) -> Option<&'a Value> {
        self.values
            .get(option.param_name().as_str())
            .or_else(|| option.default())
    }

    /// Whether a value was stored for the parameter name
    pub fn contains(&self, param: &str) -> bool {
        self.values.contains_key(param)
    }

    /// Returns a stored string value
    pub fn get_str(&self, param: &str) -> Option<&str> {
        self.get(param).and_then(Value::as_str)
    }

    /// Returns a stored integer value
    pub fn get_int(&self, param: &str) -> Option<i64> {
        self.get(param).and_then(Value::as_int)
    }

    /// Returns a stored float value
    pub fn get_float(&self, param: &str) -> Option<f64> {
        self.get(param).and_then(Value::as_float)
    }

    /// Returns a stored boolean value
    pub fn get_bool(&self, param: &str) -> Option<bool> {
        self.get(param).and_then(Value::as_bool)
    }

    /// Returns a stored enumeration member
    pub fn get_member(&self, param: &str) -> Option<&crate::coerce::EnumMember> {
        self.get(param).and_then(Value::as_member)
    }

    /// Returns a stored list of values
    pub fn get_list(&self, param: &str) -> Option<&[Value]> {
        self.get(param).and_then(Value::as_list)
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Renders the bag as one JSON object, keys in sorted order
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.values).unwrap_or_default()
    }
}
