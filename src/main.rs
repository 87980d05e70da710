// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage: iced_gallery [OPTIONS] [IMAGE...]

Options:
  --lang <id>          Interface language (e.g. en-US, fr)
  --assets <dir>       Directory image paths are resolved against
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_gallery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("iced_gallery: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "gallery failed to start");
            eprintln!("iced_gallery: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Parses the command line; `Ok(None)` means help was requested.
fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let asset_root: Option<PathBuf> = args.opt_value_from_os_str("--assets", parse_path)?;
    let config_dir: Option<PathBuf> = args.opt_value_from_os_str("--config-dir", parse_path)?;
    let images = args
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    Ok(Some(Flags {
        lang,
        asset_root,
        config_dir,
        images,
    }))
}

fn parse_path(value: &std::ffi::OsStr) -> Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(value))
}
