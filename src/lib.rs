use std::io::{self, Write};

use anyhow::Context;

pub mod cli;
pub mod commands;
pub mod error;
pub mod person;

use crate::error::GreeterError;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate.
pub fn run() -> Result<()> {
    init_tracing();

    let args = cli::parse();
    let stdout = io::stdout();
    run_with(&args, &mut stdout.lock())
}

/// Greets the person named in `args`, writing a single line to `out`.
pub fn run_with<W: Write>(args: &cli::Args, out: &mut W) -> Result<()> {
    let message = commands::execute(args).context("failed to execute command")?;
    tracing::debug!(%message, "writing greeting");
    writeln!(out, "{message}")
        .and_then(|()| out.flush())
        .map_err(GreeterError::Output)?;
    Ok(())
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_greeting_line() {
        let args = cli::try_parse_from(["greeter", "Alice"]).expect("parses");
        let mut out = Vec::new();
        run_with(&args, &mut out).expect("run succeeds");
        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "Hello Person { name: \"Alice\" }\n"
        );
    }

    #[test]
    fn output_failure_is_reported() {
        let args = cli::Args::default();
        let err = run_with(&args, &mut FailingWriter).unwrap_err();
        let greeter_err = err
            .downcast_ref::<GreeterError>()
            .expect("greeter error");
        assert!(matches!(greeter_err, GreeterError::Output(_)));
    }
}
