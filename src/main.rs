use certsync::cli::Cli;
use certsync::constants;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                constants::EXIT_USAGE
            } else {
                constants::EXIT_OK
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // Everything goes to stderr: in hook mode it ends up in the renewal log.
    let filter = EnvFilter::try_from_env("CERTSYNC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .init();

    ExitCode::from(cli.run())
}
