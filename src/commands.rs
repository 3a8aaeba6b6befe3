#![forbid(unsafe_code)]

//! Command declarations and the registry

mod command;
mod registry;

// Re-export core types
pub use command::Command;
pub use registry::CommandRegistry;
