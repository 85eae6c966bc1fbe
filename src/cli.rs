//! Command-line configuration.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::LevelFilter;

/// Environment variable holding the default log level.
pub const LOG_ENV: &str = "TERMINO_LOG";

pub const USAGE: &str = "\
usage: termino [--seed <u32>] [--no-ghost] [--log-file <path>] [--log-level <level>]

  --seed <u32>         piece sequence seed (default: from the clock)
  --no-ghost           hide the landing preview
  --log-file <path>    append engine logs to a file
  --log-level <level>  off|error|warn|info|debug|trace (default: $TERMINO_LOG or info)
  -h, --help           print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u32>,
    /// Draw the ghost piece.
    pub ghost: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ghost: true,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

/// Parse arguments (without the program name). `Ok(None)` means help was requested.
///
/// `env_level` is the value of [`LOG_ENV`], if set.
pub fn parse_args(args: &[String], env_level: Option<&str>) -> Result<Option<RunConfig>> {
    let mut config = RunConfig::default();
    if let Some(level) = env_level {
        config.log_level = parse_level(level)
            .map_err(|_| anyhow!("{}: invalid log level: {}", LOG_ENV, level))?;
    }

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--seed" => {
                i += 1;
                let v = value(args, i, "--seed")?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--no-ghost" => config.ghost = false,
            "--log-file" => {
                i += 1;
                config.log_file = Some(PathBuf::from(value(args, i, "--log-file")?));
            }
            "--log-level" => {
                i += 1;
                let v = value(args, i, "--log-level")?;
                config.log_level = parse_level(v)?;
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Some(config))
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_level(s: &str) -> Result<LevelFilter> {
    s.parse::<LevelFilter>()
        .map_err(|_| anyhow!("invalid --log-level value: {}", s))
}
