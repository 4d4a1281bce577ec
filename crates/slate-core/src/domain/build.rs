//! Bundler invocation planning.
//!
//! The build mode is an explicit value threaded into [`BundlerConfig::new`],
//! never an ambient environment flag. The config file the bundler loads is
//! selected here; its contents are opaque to this crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Which bundler configuration to build with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(DomainError::InvalidBuildMode {
                input: other.to_string(),
            }),
        }
    }
}

/// Plan for one bundler invocation.
///
/// Resolves the mode to a packaged webpack config file and the subprocess
/// argv that runs it. The bundler's stdio is inherited by the caller so the
/// user sees compilation output live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundlerConfig {
    mode: BuildMode,
}

impl BundlerConfig {
    pub fn new(mode: BuildMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Config file the bundler loads, relative to the theme project root.
    pub fn config_path(&self) -> &'static str {
        match self.mode {
            BuildMode::Development => "tools/webpack/config/dev.js",
            BuildMode::Production => "tools/webpack/config/prod.js",
        }
    }

    pub fn program(&self) -> &'static str {
        "npx"
    }

    pub fn args(&self) -> Vec<String> {
        vec![
            "webpack".to_string(),
            "--config".to_string(),
            self.config_path().to_string(),
        ]
    }
}
