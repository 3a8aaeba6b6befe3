#![forbid(unsafe_code)]

//! Enumeration type bindings
//!
//! An `EnumBinding` is the closed set of (member-name, string-value) pairs
//! backing an enumeration-typed option. The member list is fixed and
//! ordered at construction time; a value-to-member lookup table and the
//! sorted legal value list are derived once and cached, so coercion is a
//! single hash lookup and error messages are reproducible.

use crate::error::DefinitionError;
use crate::types::is_valid_name;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One member of an enumeration: a symbolic name and its string value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Symbolic member name
    pub name: String,
    /// String value matched against raw tokens
    pub value: String,
}

/// A registered enumeration type
///
/// Bindings are immutable once constructed and may be shared across any
/// number of option declarations. All validation happens here, at
/// registration time; a malformed binding never reaches coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumBinding {
    name: String,
    members: Vec<EnumMember>,
    by_value: HashMap<String, usize>,
    sorted_values: Vec<String>,
}

/// TOML structure for declarative enumeration definitions
///
/// ```toml
/// [enum]
/// name = "protocol"
///
/// [[member]]
/// name = "udp"
/// value = "udp"
///
/// [[member]]
/// name = "tcp"
/// value = "tcp"
/// ```
///
/// Member values are deserialized as raw TOML values so that non-string
/// values can be detected and reported precisely.
#[derive(Debug, Deserialize)]
struct EnumDefinition {
    #[serde(rename = "enum")]
    header: EnumHeader,
    #[serde(default, rename = "member")]
    members: Vec<MemberDefinition>,
}

#[derive(Debug, Deserialize)]
struct EnumHeader {
    name: String,
}

#[derive(Debug, Deserialize)]
struct MemberDefinition {
    name: String,
    value: toml::Value,
}

impl EnumBinding {
    /// Builds a binding from (member-name, string-value) pairs
    ///
    /// Member declaration order is preserved. Construction fails with a
    /// `DefinitionError` if the enumeration name or any member name is
    /// invalid, the member list is empty, or member names or values are
    /// duplicated.
    pub fn new<N, I, S, T>(name: N, pairs: I) -> Result<Self, DefinitionError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let members = pairs
            .into_iter()
            .map(|(name, value)| EnumMember {
                name: name.into(),
                value: value.into(),
            })
            .collect();
        Self::build(name.into(), members)
    }

    /// Parses a binding from a TOML definition string
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError` if:
    /// - TOML syntax is invalid or required fields are missing
    /// - A member value is not a string
    /// - The member set fails the same validation as [`EnumBinding::new`]
    pub fn from_toml(content: &str) -> Result<Self, DefinitionError> {
        let def: EnumDefinition = toml::from_str(content)
            .map_err(|e| DefinitionError::InvalidSyntax(e.to_string()))?;

        let mut members = Vec::with_capacity(def.members.len());
        for member in def.members {
            let value = match member.value {
                toml::Value::String(s) => s,
                other => {
                    return Err(DefinitionError::NonStringMember {
                        enum_name: def.header.name,
                        member: member.name,
                        found: other.type_str().to_string(),
                    });
                }
            };
            members.push(EnumMember {
                name: member.name,
                value,
            });
        }

        Self::build(def.header.name, members)
    }

    /// Parses a binding from a TOML definition file
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, DefinitionError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Shared validation and lookup-table construction
    fn build(name: String, members: Vec<EnumMember>) -> Result<Self, DefinitionError> {
        if !is_valid_name(&name) {
            return Err(DefinitionError::InvalidEnumName(name));
        }
        if members.is_empty() {
            return Err(DefinitionError::EmptyEnum(name));
        }

        let mut by_value = HashMap::with_capacity(members.len());
        let mut seen_names = HashMap::with_capacity(members.len());
        for (index, member) in members.iter().enumerate() {
            if !is_valid_name(&member.name) {
                return Err(DefinitionError::InvalidMemberName {
                    enum_name: name,
                    member: member.name.clone(),
                });
            }
            if seen_names.insert(member.name.clone(), index).is_some() {
                return Err(DefinitionError::DuplicateMember {
                    enum_name: name,
                    member: member.name.clone(),
                });
            }
            if by_value.insert(member.value.clone(), index).is_some() {
                return Err(DefinitionError::DuplicateMemberValue {
                    enum_name: name,
                    value: member.value.clone(),
                });
            }
        }

        let mut sorted_values: Vec<String> =
            members.iter().map(|m| m.value.clone()).collect();
        sorted_values.sort();

        Ok(EnumBinding {
            name,
            members,
            by_value,
            sorted_values,
        })
    }

    /// Returns the enumeration's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the member whose string value equals the token
    ///
    /// Matching is exact: case-sensitive, no normalization, no partial
    /// matching, values only.
    pub fn lookup(&self, token: &str) -> Option<&EnumMember> {
        self.by_value.get(token).map(|&index| &self.members[index])
    }

    /// Returns the members in declaration order
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// Returns the legal value set in lexicographic order
    ///
    /// Computed once at construction; identical across calls for the
    /// same binding, which keeps error messages and generated help text
    /// reproducible.
    pub fn sorted_values(&self) -> &[String] {
        &self.sorted_values
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// A binding is never empty; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
