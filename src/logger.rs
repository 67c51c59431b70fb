use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global `tracing` subscriber.
///
/// `WAKELINE_LOG` takes precedence over `RUST_LOG`. Without either, the
/// level is `info` (`debug` with `--verbose`), lowered to `warn` while the
/// terminal UI owns the screen.
pub fn init_logging(verbose: bool, no_color: bool, interactive: bool) {
    let filter = std::env::var("WAKELINE_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(default_level(verbose, interactive)),
            |value| {
                EnvFilter::try_new(value)
                    .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, interactive)))
            },
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

const fn default_level(verbose: bool, interactive: bool) -> &'static str {
    match (verbose, interactive) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false, true, false);
        init_logging(true, true, false);
    }

    #[test]
    fn interactive_runs_default_to_warn() -> Result<(), String> {
        if default_level(false, true) != "warn" {
            return Err("Expected warn while the UI is active".to_owned());
        }
        if default_level(true, true) != "debug" {
            return Err("Verbose must win over the UI default".to_owned());
        }
        Ok(())
    }
}
