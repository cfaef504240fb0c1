use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-api",
    version,
    about = "Render form payloads and check client responses against them"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Append a JSON-lines trace of each validated response to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: form-api.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the wire payload of a form definition
    Render {
        /// Form definition file (YAML, or JSON with a .json extension)
        #[arg(long)]
        form: String,
    },

    /// Validate a raw client response against a form definition
    Validate {
        /// Form definition file (YAML, or JSON with a .json extension)
        #[arg(long)]
        form: String,

        /// Raw response as JSON, e.g. '[true, 5]', '1' or 'null'
        #[arg(long)]
        response: String,
    },

    /// List the response slots of a form and the value each one accepts
    Slots {
        /// Form definition file (YAML, or JSON with a .json extension)
        #[arg(long)]
        form: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-api.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-api.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pretty: bool,
    pub trace_path: Option<String>,
    pub verbose: u8,
}

/// CLI flags win over config values.
pub fn resolve_settings(cli: &Cli, config: &AppConfig) -> Settings {
    Settings {
        pretty: cli.pretty || config.output.pretty,
        trace_path: cli.trace.clone().or_else(|| config.trace.path.clone()),
        verbose: cli.verbose,
    }
}
