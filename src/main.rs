// SPDX-License-Identifier: MPL-2.0
use iced_track::app::{self, paths, Flags};
use iced_track::config::{self, SortOrder};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
IcedTrack - draggable image track

USAGE:
  iced_track [OPTIONS] [DIR]

ARGS:
  DIR                    Directory of images to show (default: current directory)

OPTIONS:
  --config-dir <PATH>    Directory holding settings.toml
  --sort <ORDER>         alphabetical | modified-date | created-date
  --write-config         Write the effective settings.toml and exit
  -h, --help             Print help
";

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_track=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_filter(env_filter))
        .init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let sort: Option<SortOrder> = args.opt_value_from_str("--sort")?;
    let directory = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        directory,
        config_dir,
        sort,
    })
}

/// Saves the loaded config, with CLI overrides applied, so users get a
/// template listing every key.
fn write_config(flags: &Flags) -> iced_track::Result<()> {
    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    if let Some(sort) = flags.sort {
        config.display.sort_order = Some(sort);
    }
    config::save(&config)?;
    if let Some(dir) = paths::get_app_config_dir() {
        tracing::info!(path = %dir.join(config::CONFIG_FILE).display(), "wrote settings");
    }
    Ok(())
}

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    let write_only = args.contains("--write-config");

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    if write_only {
        paths::init_cli_override(flags.config_dir.clone());
        if let Err(err) = write_config(&flags) {
            tracing::error!(error = %err, "could not write settings");
            std::process::exit(1);
        }
        return Ok(());
    }

    app::run(flags)
}
