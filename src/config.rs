/// Configuration resolution module
///
/// This module handles:
/// - Locating and loading the optional TOML config file
/// - Merging CLI arguments over file settings over defaults
/// - Building the immutable ReportPlan that main executes
use crate::cli::{self, CliArgs};
use crate::error::ReportError;
use crate::input::InputSource;
use crate::report::DEFAULT_TITLE;
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "whatif-report.toml";

const KNOWN_KEYS: &[&str] = &["title", "input", "output", "json_blocks", "summary"];

/// Settings read from a TOML config file (all optional)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub title: Option<String>,
    pub input: Option<String>,
    pub output: Option<PathBuf>,
    pub json_blocks: Option<PathBuf>,
    pub summary: Option<bool>,
}

/// Fully resolved settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    pub input: InputSource,
    /// None = stdout
    pub output: Option<PathBuf>,
    pub json_blocks: Option<PathBuf>,
    pub title: String,
    pub summary: bool,
    pub quiet: bool,
}

/// Build a complete ReportPlan from CLI arguments
///
/// Looks for `./whatif-report.toml` and the per-user config file when no
/// `--config` is given.
pub fn build_report_plan(args: &CliArgs) -> Result<ReportPlan, ReportError> {
    build_report_plan_in(args, Path::new("."), cli::default_user_config())
}

/// Build a ReportPlan, resolving the local config file relative to `work_dir`
pub fn build_report_plan_in(
    args: &CliArgs,
    work_dir: &Path,
    user_config: Option<PathBuf>,
) -> Result<ReportPlan, ReportError> {
    debug!("Building report plan from CLI args");

    let (file_config, config_dir) = match discover_config_path(args.config.as_deref(), work_dir, user_config)? {
        Some(path) => {
            debug!("Using config file {:?}", path);
            let config = load_file_config(&path)?;
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (config, dir)
        }
        None => {
            debug!("No config file found, using CLI arguments and defaults");
            (FileConfig::default(), PathBuf::new())
        }
    };

    let input = match (&args.input, &file_config.input) {
        (Some(arg), _) => InputSource::from_arg(arg),
        (None, Some(from_file)) if from_file == "-" => InputSource::Stdin,
        (None, Some(from_file)) => InputSource::File(config_dir.join(from_file)),
        (None, None) => {
            return Err(ReportError::Config(
                "no what-if input given; pass INPUT, set WHATIF_REPORT_INPUT, or set `input` in the config file"
                    .to_string(),
            ));
        }
    };

    let output = args.output.clone().or_else(|| file_config.output.as_ref().map(|p| config_dir.join(p)));
    let json_blocks =
        args.json_blocks.clone().or_else(|| file_config.json_blocks.as_ref().map(|p| config_dir.join(p)));

    let title = args
        .title
        .clone()
        .or_else(|| file_config.title.clone())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let plan = ReportPlan {
        input,
        output,
        json_blocks,
        title,
        summary: args.summary || file_config.summary.unwrap_or(false),
        quiet: args.quiet,
    };

    debug!("Resolved report plan: {:?}", plan);

    Ok(plan)
}

/// Pick the config file to use, if any
///
/// An explicit path must exist; the implicit locations are used only when present.
fn discover_config_path(
    explicit: Option<&Path>,
    work_dir: &Path,
    user_config: Option<PathBuf>,
) -> Result<Option<PathBuf>, ReportError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ReportError::Config(format!("config file {} does not exist", path.display())));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = work_dir.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(user_config.filter(|p| p.is_file()))
}

/// Load and parse a config file
pub fn load_file_config(path: &Path) -> Result<FileConfig, ReportError> {
    let text = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    parse_file_config(&text).map_err(|e| ReportError::Config(format!("{}: {}", path.display(), e)))
}

/// Parse config TOML, warning about keys this tool does not know
pub fn parse_file_config(text: &str) -> Result<FileConfig, String> {
    let table: toml::Table = text.parse().map_err(|e| format!("invalid TOML: {}", e))?;

    for key in table.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
        warn!("Ignoring unknown config key '{}'", key);
    }

    toml::Value::Table(table).try_into().map_err(|e| format!("invalid config value: {}", e))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
