//! Command-line entrypoint for one-shot summarization.

use std::path::PathBuf;
use std::process::ExitCode;

use crate::engine::{RemoteConfig, StrategyPreference, SummarizationEngine, SummaryMode};
use crate::{report, sources};

/// Environment variable holding the remote credential.
pub const API_KEY_ENV: &str = "GIST_API_KEY";

const USAGE: &str = "Usage: gist [OPTIONS] [FILE]

Summarize a plain-text file, standard input, or a web page.

Arguments:
  FILE             plain-text file to summarize; '-' or omitted reads stdin

Options:
  --url <URL>      fetch and summarize a web page instead of a file
  --mode <MODE>    concise | standard | detailed  (default: standard)
  --remote         prefer the remote strategy; credential from GIST_API_KEY
  --out <PATH>     write a flat-text report to PATH instead of stdout
  -h, --help       print this help";

/// Parsed command-line options.
#[derive(Debug, Default)]
struct CliOptions {
    mode: SummaryMode,
    remote: bool,
    url: Option<String>,
    input: Option<PathBuf>,
    out: Option<PathBuf>,
}

/// Run the CLI.
///
/// # Returns
/// `ExitCode::SUCCESS` on success, `2` on a usage error, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(run_inner(options)) {
        eprintln!("Error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Parse command-line arguments. `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<CliOptions>, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--remote" => options.remote = true,
            "--mode" => {
                let value = iter.next().ok_or("--mode requires a value")?;
                options.mode = value.parse::<SummaryMode>()?;
            }
            "--url" => {
                let value = iter.next().ok_or("--url requires a value")?;
                options.url = Some(value.clone());
            }
            "--out" => {
                let value = iter.next().ok_or("--out requires a value")?;
                options.out = Some(PathBuf::from(value));
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown option: {other}"));
            }
            positional => {
                if options.input.is_some() {
                    return Err("only one input file may be given".to_string());
                }
                options.input = Some(PathBuf::from(positional));
            }
        }
    }

    if options.url.is_some() && options.input.is_some() {
        return Err("give either --url or a file, not both".to_string());
    }

    Ok(Some(options))
}

async fn run_inner(options: CliOptions) -> anyhow::Result<()> {
    let text = acquire_text(&options).await?;

    let engine = SummarizationEngine::new(RemoteConfig::from_env())?;
    let preference = if options.remote {
        StrategyPreference::Remote
    } else {
        StrategyPreference::Local
    };
    let credential = std::env::var(API_KEY_ENV).ok();

    let result = engine
        .summarize(&text, options.mode, preference, credential.as_deref())
        .await?;

    match &options.out {
        Some(path) => {
            report::write(path, &result)?;
            tracing::info!("report written to {}", path.display());
        }
        None => print!("{}", report::render(&result)),
    }

    Ok(())
}

/// Produce the source text from the chosen input.
async fn acquire_text(options: &CliOptions) -> anyhow::Result<String> {
    if let Some(url) = &options.url {
        let client = sources::build_client()?;
        return Ok(sources::fetch_page_text(&client, url).await?);
    }

    match &options.input {
        Some(path) if path.as_os_str() != "-" => Ok(sources::read_text_file(path)?),
        _ => Ok(sources::read_stdin()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(&[]).ok().flatten().unwrap_or_default();
        assert_eq!(options.mode, SummaryMode::Standard);
        assert!(!options.remote);
        assert!(options.input.is_none());
    }

    #[test]
    fn test_full_invocation() {
        let parsed = parse_args(&args(&["--mode", "concise", "--remote", "--out", "report.txt", "notes.txt"]));
        let options = parsed.ok().flatten().unwrap_or_default();
        assert_eq!(options.mode, SummaryMode::Concise);
        assert!(options.remote);
        assert_eq!(options.out, Some(PathBuf::from("report.txt")));
        assert_eq!(options.input, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_help_short_circuits() {
        assert!(matches!(parse_args(&args(&["--help"])), Ok(None)));
    }

    #[test]
    fn test_rejects_unknown_option() {
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_rejects_url_and_file_together() {
        let parsed = parse_args(&args(&["--url", "https://example.com", "notes.txt"]));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_mode_requires_value() {
        assert!(parse_args(&args(&["--mode"])).is_err());
    }
}
