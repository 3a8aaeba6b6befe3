#![forbid(unsafe_code)]

//! Typed value coercion: kinds, enum bindings, and the engine

mod engine;
mod enum_binding;
mod value;

// Re-export core types
pub use engine::coerce;
pub use enum_binding::{EnumBinding, EnumMember};
pub use value::{Value, ValueKind};
