//! Command-line handling for the `tile-words` driver.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::adapter::SessionConfig;
use crate::types::{GameMode, LevelType};

pub const USAGE: &str = "usage: tile-words [--levels DIR] [--dict FILE] [--level NAME|INDEX] \
[--mode levels|endless] [--aspect RATIO] [--script FILE]";

#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    pub session: SessionConfig,
    /// Read commands from this file instead of stdin.
    pub script: Option<PathBuf>,
}

impl DriverConfig {
    pub fn from_env() -> Self {
        Self {
            session: SessionConfig::from_env(),
            script: None,
        }
    }

    /// Apply command-line flags (program name already stripped) on top of `self`.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "-h" || flag == "--help" {
                return Err(anyhow!("{}", USAGE));
            }
            i += 1;
            let value = args
                .get(i)
                .ok_or_else(|| anyhow!("missing value for {}", flag))?;
            match flag {
                "--levels" => self.session.level_dir = PathBuf::from(value),
                "--dict" => self.session.dictionary_path = PathBuf::from(value),
                "--level" => {
                    self.session.level_type = value
                        .parse::<usize>()
                        .ok()
                        .and_then(LevelType::from_index)
                        .or_else(|| LevelType::from_str(value))
                        .ok_or_else(|| anyhow!("invalid --level value: {}", value))?;
                }
                "--mode" => {
                    self.session.mode = GameMode::from_str(value)
                        .ok_or_else(|| anyhow!("invalid --mode value: {}", value))?;
                }
                "--aspect" => {
                    self.session.aspect_ratio = value
                        .parse::<f32>()
                        .ok()
                        .filter(|a| a.is_finite() && *a > 0.0)
                        .ok_or_else(|| anyhow!("invalid --aspect value: {}", value))?;
                }
                "--script" => self.script = Some(PathBuf::from(value)),
                other => return Err(anyhow!("unknown argument: {}\n{}", other, USAGE)),
            }
            i += 1;
        }
        Ok(self)
    }
}
