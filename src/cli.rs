use clap::Parser;
use std::path::PathBuf;

use crate::defaults::Defaults;

/// Interactive multi-select list for picking examples to run
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about = "Interactive example picker")]
pub struct Cli {
    /// Path to the examples JSON (array of items); read before anything else
    #[arg(long, env = "EXAMPLES_JSON_FILE")]
    pub examples_file: Option<PathBuf>,

    /// Inline examples JSON, used when no file is given
    #[arg(long, env = "EXAMPLES_JSON", hide_env_values = true)]
    pub examples_json: Option<String>,

    /// File that receives the selected ordinals, one per line
    #[arg(long, env = "RESULT_FILE")]
    pub result_file: Option<PathBuf>,

    /// Title shown above the list
    #[arg(long, env = "PICKER_TITLE", default_value = Defaults::TITLE)]
    pub title: String,

    /// Append JSON diagnostics to this file
    #[arg(long, env = "PICKER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable colors
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,
}
