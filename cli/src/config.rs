use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const FORMAT_ENV: &str = "FORMGUARD_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pretty => write!(f, "pretty"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => anyhow::bail!("Invalid output format: {}. Allowed values: text, json, pretty", s),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    format: Option<String>,
}

pub fn resolve_format(cli_flag: Option<String>) -> Result<OutputFormat> {
    let env_value = std::env::var(FORMAT_ENV).ok();
    resolve_format_from(cli_flag, env_value, config_file_path().as_deref())
}

fn resolve_format_from(
    cli_flag: Option<String>,
    env_value: Option<String>,
    config_path: Option<&Path>,
) -> Result<OutputFormat> {
    // 1. CLI Flag
    if let Some(format) = cli_flag {
        return format.parse::<OutputFormat>();
    }

    // 2. Environment
    if let Some(format) = env_value.filter(|v| !v.trim().is_empty()) {
        return format.parse::<OutputFormat>();
    }

    // 3. Config File
    if let Some(config_path) = config_path {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file at {:?}", config_path))?;

            let config: ConfigFile =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;

            if let Some(format) = config.format {
                return format.parse::<OutputFormat>();
            }
        }
    }

    // 4. Default
    Ok(OutputFormat::Text)
}

fn config_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|mut p| {
        p.push(".formguard.toml");
        p
    })
}
