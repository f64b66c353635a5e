//! Start-up configuration read from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TUI_BLOCKS_SEED` | u32 seed for piece selection | random |
//! | `TUI_BLOCKS_LOG_PATH` | file to append log lines to | logging off |
//! | `TUI_BLOCKS_LOG` | `tracing` filter directive | `info` |

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const SEED_VAR: &str = "TUI_BLOCKS_SEED";
pub const LOG_PATH_VAR: &str = "TUI_BLOCKS_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "TUI_BLOCKS_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed, or `None` to draw one at start-up.
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get(SEED_VAR)
            .map(|s| {
                s.parse::<u32>()
                    .with_context(|| format!("{SEED_VAR} must be an unsigned 32-bit integer, got {s:?}"))
            })
            .transpose()?;

        Ok(Self {
            seed,
            log_path: get(LOG_PATH_VAR).map(PathBuf::from),
            log_filter: get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
