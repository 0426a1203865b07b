use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use name_formatter::{gaelic, NameFormatter};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Split names into their parts and restore their capitalization.
///
/// Each command reads names from its arguments, which are joined with
/// spaces into one name. With no arguments, or `-`, it reads one name per
/// line from stdin instead.
#[derive(Parser, Debug)]
#[command(name = "name_formatter", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parts of each name as JSON
    Parse {
        #[command(flatten)]
        options: FormatOptions,

        /// Keep the original capitalization of each part
        #[arg(long)]
        raw: bool,

        names: Vec<String>,
    },
    /// Print each name capitalized
    Format {
        #[command(flatten)]
        options: FormatOptions,

        names: Vec<String>,
    },
    /// Print each Gaelic surname capitalized, skipping other names.
    ///
    /// Given a single name as arguments, exits with status 1 when it is
    /// not Gaelic.
    Gaelic { names: Vec<String> },
}

#[derive(Args, Debug)]
struct FormatOptions {
    /// Treat everything but the prefix and suffix as the last name
    #[arg(long)]
    last_name_only: bool,
}

impl FormatOptions {
    fn formatter(&self) -> NameFormatter {
        NameFormatter::new().last_name_only(self.last_name_only)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn reads_stdin(words: &[String]) -> bool {
    words.is_empty() || (words.len() == 1 && words[0] == "-")
}

/// Writes one line of output, returning false once the reader has closed
/// the pipe.
fn write_line<W: Write>(out: &mut W, output: &str) -> Result<bool> {
    match writeln!(out, "{}", output) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed");
            Ok(false)
        }
        Err(e) => Err(e).context("failed to write output"),
    }
}

/// Writes `render` of each input name, one per line. `None` writes nothing.
fn emit<F>(words: &[String], mut render: F) -> Result<()>
where
    F: FnMut(&str) -> Result<Option<String>>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if reads_stdin(words) {
        debug!("reading names from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            if let Some(output) = render(&line)? {
                if !write_line(&mut out, &output)? {
                    break;
                }
            }
        }
    } else if let Some(output) = render(&words.join(" "))? {
        writeln!(out, "{}", output).context("failed to write output")?;
    }

    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Parse {
            options,
            raw,
            names,
        } => {
            let formatter = options.formatter();
            emit(&names, |name| {
                let record = if raw {
                    formatter.parse(name)
                } else {
                    formatter.parse_formatted(name)
                };
                let json = record.to_json().context("failed to serialize name")?;
                Ok(Some(json))
            })?;
        }
        Command::Format { options, names } => {
            let formatter = options.formatter();
            emit(&names, |name| Ok(Some(formatter.format(name))))?;
        }
        Command::Gaelic { names } => {
            if !reads_stdin(&names) && !gaelic::is_gaelic(&names.join(" ")) {
                return Ok(ExitCode::FAILURE);
            }
            emit(&names, |name| {
                Ok(gaelic::is_gaelic(name).then(|| gaelic::format(name)))
            })?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn stdin_marker() {
        assert!(reads_stdin(&[]));
        assert!(reads_stdin(&["-".to_string()]));
        assert!(!reads_stdin(&["MCCLURE".to_string()]));
    }

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_line_results() {
        let mut buf = Vec::new();
        assert!(write_line(&mut buf, "McClure").unwrap());
        assert_eq!(b"McClure\n", &buf[..]);

        let mut closed = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(!write_line(&mut closed, "McClure").unwrap());

        let mut denied = FailingWriter(io::ErrorKind::PermissionDenied);
        assert!(write_line(&mut denied, "McClure").is_err());
    }

    #[test]
    fn parse_options() {
        let cli = Cli::parse_from(["name_formatter", "parse", "--last-name-only", "--raw", "DR.", "WONG"]);
        match cli.command {
            Command::Parse {
                options,
                raw,
                names,
            } => {
                assert!(options.last_name_only);
                assert!(raw);
                assert_eq!(vec!["DR.", "WONG"], names);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
