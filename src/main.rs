// SPDX-License-Identifier: MPL-2.0
use iced_onboard::app::{self, paths, Flags};

const HELP: &str = "\
iced_onboard

USAGE:
  iced_onboard [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --data-dir <dir>     Directory for state files [env: ICED_ONBOARD_DATA_DIR]
  --config-dir <dir>   Directory for settings.toml [env: ICED_ONBOARD_CONFIG_DIR]
  -h, --help           Print this help

Set RUST_LOG to change the log filter (default: iced_onboard=info).
";

fn main() -> iced::Result {
    setup_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_onboard=info".into()),
        )
        .init();
}
