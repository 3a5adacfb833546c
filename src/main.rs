//! Help Center - Entry Point

use clap::Parser;
use helpcenter::config::{CliOverrides, THEME_NAMES};
use helpcenter::model::{load_content, PageContent};
use helpcenter::state::{HistorySink, NullSink, QuerySink};
use helpcenter::view::{ColorConfig, RunOptions, Theme, ThemeName};
use std::path::PathBuf;
use tracing::{info, warn};

/// Help Center - terminal help-center page with validated search
#[derive(Parser, Debug)]
#[command(name = "helpcenter")]
#[command(version)]
#[command(about = "Terminal help-center page with header and hero search forms")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_parser = THEME_NAMES)]
    pub theme: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Append accepted searches to this JSON Lines file
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Load page content (cards and footer) from a TOML file
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Pre-fill the "How can we help?" search field
    #[arg(short, long)]
    pub search: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = helpcenter::config::load_config_with_precedence(args.config.clone())?;
        let merged = helpcenter::config::merge_config(config_file);
        let with_env = helpcenter::config::apply_env_overrides(merged);

        helpcenter::config::apply_cli_overrides(
            with_env,
            CliOverrides {
                theme: args.theme.clone(),
                history_file: args.history.clone(),
                content_file: args.content.clone(),
            },
        )
    };

    helpcenter::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Config files and env vars bypass clap's check, so unknown names land here
    let theme_name = ThemeName::from_name(&config.theme).unwrap_or_else(|| {
        warn!(theme = %config.theme, "Unknown theme, using default");
        ThemeName::default()
    });
    let theme = Theme::new(theme_name, ColorConfig::from_env_and_args(args.no_color));

    let content = match &config.content_file {
        Some(path) => load_content(path)?,
        None => PageContent::default(),
    };

    let sink: Box<dyn QuerySink> = match &config.history_file {
        Some(path) => {
            info!(path = %path.display(), "Recording accepted searches");
            Box::new(HistorySink::new(path.clone()))
        }
        None => Box::new(NullSink),
    };

    helpcenter::view::run_with_options(RunOptions {
        theme,
        content,
        sink,
        initial_query: args.search,
    })?;

    Ok(())
}
