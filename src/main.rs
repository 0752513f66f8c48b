// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toast demo

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --position <CORNER>   top-right, top-left, bottom-right or bottom-left
  --duration <MS>       Display time in milliseconds
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Flags {
        position: args.opt_value_from_str("--position")?,
        duration_ms: args.opt_value_from_str("--duration")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    }))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
