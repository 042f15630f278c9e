use clap::Parser;
use std::path::PathBuf;

/// Name of the per-user config directory and of the project-local config file stem
pub const APP_NAME: &str = "whatif-report";

/// Get the default per-user config file location
/// Uses platform-specific config directories:
/// - Linux: ~/.config/whatif-report/config.toml
/// - macOS: ~/Library/Application Support/whatif-report/config.toml
/// - Windows: %APPDATA%/whatif-report/config.toml
pub fn default_user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_NAME).join("config.toml"))
}

#[derive(Parser, Debug, Clone)]
#[command(name = "whatif-report")]
#[command(about = "Render Bicep/ARM what-if JSON as a Markdown change report")]
#[command(version)]
pub struct CliArgs {
    /// What-if JSON file (output of `az deployment ... what-if --no-pretty-print`), or "-" for stdin
    #[arg(value_name = "INPUT", env = "WHATIF_REPORT_INPUT")]
    pub input: Option<String>,

    /// Write the Markdown report to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also export the intermediate document blocks as JSON
    #[arg(long, value_name = "PATH")]
    pub json_blocks: Option<PathBuf>,

    /// Report title (default: "Bicep What-If Report")
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// TOML config file (default: ./whatif-report.toml, then the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a per-change-type summary table to stderr
    #[arg(long)]
    pub summary: bool,

    /// Suppress status messages
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // Trim accidental whitespace around titles passed through pipeline variables
        args.title = args.title.map(|t| t.trim().to_string());

        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref title) = self.title
            && title.is_empty()
        {
            return Err("--title must not be empty".to_string());
        }

        if let (Some(output), Some(blocks)) = (&self.output, &self.json_blocks)
            && output == blocks
        {
            return Err(format!(
                "--output and --json-blocks both point to {}; choose different files",
                output.display()
            ));
        }

        if let Some(ref input) = self.input
            && input.trim().is_empty()
        {
            return Err("INPUT must not be empty".to_string());
        }

        Ok(())
    }
}
