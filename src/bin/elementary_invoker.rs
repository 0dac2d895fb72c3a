//! elementary_invoker - raw pass-through to `edr`
//!
//! Every argument is forwarded unchanged. Logging settings come from the
//! environment only, since all flags belong to `edr`.

use elementary_ext::commands::{helpers::load_config, invoke::run_pass_through};
use elementary_ext::config::env;
use elementary_ext::error::Result;
use elementary_ext::logging::{self, DEFAULT_LOG_LEVEL, LogFormat};

fn init_logging() -> Result<()> {
    let level = std::env::var(env::LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let format = std::env::var(env::LOG_FORMAT)
        .map_or(Ok(LogFormat::Console), |value| LogFormat::parse(&value))?;
    logging::init(&level, format)
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = load_config().and_then(|config| run_pass_through(&config, &args));

    if let Err(e) = result {
        std::process::exit(e.exit_code());
    }
}
