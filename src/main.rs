use clap::Parser;
use megamenu::core::config::{self, CliOverrides, ThemeName};
use megamenu::core::sample::sample_menu;
use megamenu::tui;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io::Write;

#[derive(Parser)]
#[command(name = "megamenu", about = "Navigation menu in the terminal")]
struct Args {
    /// Locale for empty-state messages (e.g. en-US, de-DE)
    #[arg(short, long)]
    locale: Option<String>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeName>,

    /// Mark a node active at startup, by label path (e.g. "Dashboards/Browse")
    #[arg(short, long)]
    active: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to megamenu.log in current directory
    if let Ok(log_file) = File::create("megamenu.log") {
        init_logger(log_file);
    }

    let file_config = file_config_or_default(config::load_config());
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            locale: args.locale.as_deref(),
            theme: args.theme,
            active: args.active.as_deref(),
        },
    );
    log::set_max_level(resolved.log_level);

    log::info!(
        "megamenu starting up (locale: {}, theme: {:?})",
        resolved.locale,
        resolved.theme
    );
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved, sample_menu())
}

/// Install the file logger before the config is read. The logger accepts
/// every level; `log::set_max_level` narrows it once the config resolves.
fn init_logger<W: Write + Send + 'static>(writer: W) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if WriteLogger::init(LevelFilter::Trace, log_config, writer).is_ok() {
        log::set_max_level(config::DEFAULT_LOG_LEVEL);
    }
}

fn file_config_or_default(
    result: Result<config::MenuConfig, config::ConfigError>,
) -> config::MenuConfig {
    result.unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {e}");
        config::MenuConfig::default()
    })
}
