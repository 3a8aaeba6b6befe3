#![forbid(unsafe_code)]

//! Tool configuration resolution
//!
//! A tool name determines where its configuration file lives and which
//! environment variable can override that location. The library only
//! resolves the path; reading and parsing the file is the embedding
//! application's business.

use std::env;
use std::path::PathBuf;

/// Configuration file resolution for a command line tool
///
/// For a tool named `my-tool` the defaults are `/etc/my-tool.conf` and
/// the `MY_TOOL_CONF` environment variable. Both can be overridden when
/// the defaults do not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    tool_name: String,
    config_file: PathBuf,
    config_env_var: String,
}

impl ToolConfig {
    /// Derives the configuration file path and environment variable
    /// from the tool name
    pub fn for_tool(name: &str) -> Self {
        let config_file = PathBuf::from(format!("/etc/{}.conf", name));
        let config_env_var = format!("{}_CONF", name.replace('-', "_").to_uppercase());
        Self {
            tool_name: name.to_string(),
            config_file,
            config_env_var,
        }
    }

    /// Overrides the default configuration file path
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = path.into();
        self
    }

    /// Overrides the environment variable name
    pub fn with_env_var(mut self, var: impl Into<String>) -> Self {
        self.config_env_var = var.into();
        self
    }

    /// Returns the tool name
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Returns the configured file path, ignoring the environment
    pub fn config_file(&self) -> &PathBuf {
        &self.config_file
    }

    /// Returns the environment variable that can override the path
    pub fn config_env_var(&self) -> &str {
        &self.config_env_var
    }

    /// Resolves the configuration file path
    ///
    /// The environment variable wins when it is set to a non-empty
    /// value; otherwise the configured path is returned.
    pub fn config_path(&self) -> PathBuf {
        self.resolve(env::var(&self.config_env_var).ok().as_deref())
    }

    /// Resolution rule, factored out of the environment lookup
    fn resolve(&self, env_value: Option<&str>) -> PathBuf {
        match env_value {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.config_file.clone(),
        }
    }
}
