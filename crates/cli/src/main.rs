use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use signwait_core::landmarks::domain::landmark_source::LandmarkSource;
use signwait_core::landmarks::infrastructure::json_lines_source::JsonLinesLandmarkSource;
use signwait_core::pipeline::infrastructure::threaded_session_executor::ThreadedSessionExecutor;
use signwait_core::pipeline::session_logger::StdoutSessionLogger;
use signwait_core::pipeline::sign_pipeline::SignPipeline;
use signwait_core::pipeline::transcribe_signs_use_case::{SessionReport, TranscribeSignsUseCase};
use signwait_core::shared::settings::RecognizerSettings;
use signwait_core::text::domain::dictionary::Dictionary;

/// Replay a recorded hand-landmark stream and print the signed text.
#[derive(Parser)]
#[command(name = "signwait")]
struct Cli {
    /// JSON-lines landmark file, or "-" for stdin.
    input: PathBuf,

    /// Frames in the majority-vote window.
    #[arg(long)]
    window: Option<usize>,

    /// Votes needed to commit a sign or reset after a pause.
    #[arg(long)]
    threshold: Option<usize>,

    /// Maximum number of word suggestions.
    #[arg(long)]
    suggestions: Option<usize>,

    /// Newline-separated word list replacing the built-in dictionary.
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Settings file (defaults to the platform config directory).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print each commit as a JSON line.
    #[arg(long)]
    events: bool,

    /// Log progress every N frames.
    #[arg(long, default_value = "300")]
    log_every: usize,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    validate(&cli)?;

    let source = open_source(&cli.input)?;
    let dictionary = match &cli.dictionary {
        Some(path) => {
            let d = Dictionary::from_file(path)
                .map_err(|e| format!("Failed to read dictionary {}: {e}", path.display()))?;
            log::info!("Loaded {} words from {}", d.len(), path.display());
            d
        }
        None => Dictionary::default(),
    };

    log::info!(
        "Window {} frames, threshold {}",
        settings.window_size,
        settings.confidence_threshold
    );

    let mut use_case = TranscribeSignsUseCase::new(
        source,
        SignPipeline::from_settings(&settings),
        dictionary,
        Box::new(ThreadedSessionExecutor::new()),
        Some(Box::new(StdoutSessionLogger::new(cli.log_every))),
        Some(settings.max_suggestions),
        None,
        None,
    );
    let report = use_case.execute()?;
    print_report(&report, cli.events)?;
    Ok(())
}

/// File or default settings, overridden by any flags given.
fn resolve_settings(cli: &Cli) -> Result<RecognizerSettings, Box<dyn std::error::Error>> {
    let mut settings = match &cli.settings {
        Some(path) => RecognizerSettings::load_from(path)?,
        None => RecognizerSettings::load(),
    };
    if let Some(window) = cli.window {
        settings.window_size = window;
    }
    if let Some(threshold) = cli.threshold {
        settings.confidence_threshold = threshold;
    }
    if let Some(max) = cli.suggestions {
        settings.max_suggestions = max;
    }
    settings.validate()?;
    Ok(settings)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !is_stdin(&cli.input) && !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if let Some(path) = &cli.dictionary {
        if !path.exists() {
            return Err(format!("Dictionary file not found: {}", path.display()).into());
        }
    }
    if cli.log_every == 0 {
        return Err("--log-every must be at least 1".into());
    }
    Ok(())
}

fn open_source(input: &Path) -> Result<Box<dyn LandmarkSource>, Box<dyn std::error::Error>> {
    if is_stdin(input) {
        Ok(Box::new(JsonLinesLandmarkSource::stdin()))
    } else {
        Ok(Box::new(JsonLinesLandmarkSource::open(input)?))
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn print_report(report: &SessionReport, events: bool) -> Result<(), Box<dyn std::error::Error>> {
    if events {
        for event in &report.commits {
            println!("{}", serde_json::to_string(event)?);
        }
    }
    println!("{}", report.text);
    if !report.suggestions.is_empty() {
        println!("Suggestions: {}", report.suggestions.join(", "));
    }
    log::info!(
        "{} frames, {} signs committed",
        report.frames,
        report.commits.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("signwait").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"window_size": 15, "confidence_threshold": 10}"#).unwrap();
        let cli = parse(&["-", "--settings", path.to_str().unwrap(), "--threshold", "12"]);
        let s = resolve_settings(&cli).unwrap();
        assert_eq!(s.window_size, 15);
        assert_eq!(s.confidence_threshold, 12);
    }

    #[test]
    fn test_threshold_above_window_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{}").unwrap();
        let cli = parse(&["-", "--settings", path.to_str().unwrap(), "--window", "5"]);
        assert!(resolve_settings(&cli).is_err());
    }

    #[test]
    fn test_stdin_input_needs_no_file() {
        let cli = parse(&["-"]);
        assert!(validate(&cli).is_ok());
    }

    #[test]
    fn test_missing_input_rejected() {
        let cli = parse(&["/definitely/not/here.jsonl"]);
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_zero_log_every_rejected() {
        let cli = parse(&["-", "--log-every", "0"]);
        assert!(validate(&cli).is_err());
    }
}
