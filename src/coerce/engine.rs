#![forbid(unsafe_code)]

//! The type coercion engine
//!
//! A single pure function converts a raw command-line token into a typed
//! value according to an option's declared kind, or reports a structured
//! failure. There is no state, no retry, and no recovery path here; the
//! calling driver decides what to do with a failure.

use crate::coerce::value::{Value, ValueKind};
use crate::error::CoercionError;
use crate::options::{Constraint, OptionDef};

/// Tokens recognized as boolean true
const TRUE_TOKENS: [&str; 4] = ["true", "yes", "on", "1"];

/// Tokens recognized as boolean false
const FALSE_TOKENS: [&str; 4] = ["false", "no", "off", "0"];

/// Coerces a raw token into a typed value per the option's declared kind
///
/// Primitive kinds use their native parsing rule; enumeration kinds look
/// the token up against the binding's member values with exact string
/// equality. Declared constraints are checked after the kind coercion.
///
/// The result is a pure function of `(option, raw)`: repeated calls with
/// identical inputs yield identical values or identical errors, including
/// the ordering of any reported legal value set.
///
/// # Errors
///
/// Returns `CoercionError` carrying the option name and the offending
/// token; for enumerations the complete sorted legal value set is
/// included as well.
pub fn coerce(option: &OptionDef, raw: &str) -> Result<Value, CoercionError> {
    let value = match option.kind() {
        ValueKind::Str => Value::Str(raw.to_string()),
        ValueKind::Int => match raw.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => {
                return Err(CoercionError::InvalidInt {
                    option: option.name().as_str().to_string(),
                    token: raw.to_string(),
                });
            }
        },
        ValueKind::Float => match raw.parse::<f64>() {
            Ok(n) => Value::Float(n),
            Err(_) => {
                return Err(CoercionError::InvalidFloat {
                    option: option.name().as_str().to_string(),
                    token: raw.to_string(),
                });
            }
        },
        ValueKind::Bool => match parse_bool(raw) {
            Some(b) => Value::Bool(b),
            None => {
                return Err(CoercionError::InvalidBool {
                    option: option.name().as_str().to_string(),
                    token: raw.to_string(),
                });
            }
        },
        ValueKind::Enum(binding) => match binding.lookup(raw) {
            Some(member) => Value::Member(member.clone()),
            None => {
                return Err(CoercionError::InvalidChoice {
                    option: option.name().as_str().to_string(),
                    token: raw.to_string(),
                    choices: binding.sorted_values().to_vec(),
                });
            }
        },
    };

    check_constraints(option, raw, &value)?;
    Ok(value)
}

/// Parses the fixed boolean vocabulary
///
/// Exact lowercase matching only; `TRUE`, `Yes`, and friends are not
/// recognized.
fn parse_bool(raw: &str) -> Option<bool> {
    if TRUE_TOKENS.contains(&raw) {
        Some(true)
    } else if FALSE_TOKENS.contains(&raw) {
        Some(false)
    } else {
        None
    }
}

/// Checks the option's declared constraints against a coerced value
///
/// Kind compatibility was already validated at declaration time, so a
/// constraint that does not apply to the value's shape is simply inert
/// here rather than an error.
fn check_constraints(
    option: &OptionDef,
    raw: &str,
    value: &Value,
) -> Result<(), CoercionError> {
    for constraint in option.constraints() {
        let ok = match (constraint, value) {
            (Constraint::Range { min, max }, Value::Int(n)) => {
                min.is_none_or(|lo| *n >= lo) && max.is_none_or(|hi| *n <= hi)
            }
            (Constraint::NonEmpty, Value::Str(s)) => !s.is_empty(),
            _ => true,
        };
        if !ok {
            return Err(CoercionError::ConstraintViolation {
                option: option.name().as_str().to_string(),
                token: raw.to_string(),
                constraint: constraint.describe(),
            });
        }
    }
    Ok(())
}
