//! CLI binary for edgequake-pdfsum.
//!
//! A thin shim over the library crate: one-shot mode maps CLI flags to a
//! `SummaryConfig`, feeds the input through a `Session` and prints the
//! result; `--interactive` keeps the session open and drives it from stdin.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_pdfsum::pipeline::input::resolve_input;
use edgequake_pdfsum::session::{NO_TEXT_WARNING, UPLOAD_PROMPT};
use edgequake_pdfsum::{
    extract, summarize_stream, Notice, Phase, ProgressCallback, Session, SessionEvent,
    SummaryConfig, SummaryOutput, SummaryProgressCallback,
};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress: a spinner while the PDF is parsed, then a bar over the
/// chunks. A fresh bar is created for every extraction so the callback can be
/// reused across uploads in interactive mode.
struct CliProgressCallback {
    bar: Mutex<ProgressBar>,
    chunk_started: Mutex<Option<Instant>>,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            bar: Mutex::new(ProgressBar::hidden()),
            chunk_started: Mutex::new(None),
        })
    }

    fn bar(&self) -> MutexGuard<'_, ProgressBar> {
        self.bar.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn chunk_elapsed(&self) -> f64 {
        self.chunk_started
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Remove whatever is on screen; used when a run ends early.
    fn clear(&self) {
        self.bar().finish_and_clear();
    }
}

impl SummaryProgressCallback for CliProgressCallback {
    fn on_extraction_start(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(TICKS),
        );
        spinner.set_prefix("Extracting");
        spinner.set_message("Reading PDF…");
        spinner.enable_steady_tick(Duration::from_millis(80));
        *self.bar() = spinner;
    }

    fn on_extraction_complete(&self, pages: usize, chars: usize) {
        let bar = self.bar();
        bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Extracted {chars} chars from {pages} pages"))
        ));
        bar.finish_and_clear();
    }

    fn on_summary_start(&self, total_chunks: usize) {
        let bar = ProgressBar::new(total_chunks as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} {prefix:.bold}  \
                 [{bar:42.green/238}] {pos:>3}/{len} chunks  \
                 ⏱ {elapsed_precise}  ETA {eta_precise}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ")
            .tick_strings(TICKS),
        );
        bar.set_prefix("Summarizing");
        bar.enable_steady_tick(Duration::from_millis(80));
        *self.bar() = bar;
    }

    fn on_chunk_start(&self, chunk: usize, _total_chunks: usize) {
        *self.chunk_started.lock().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());
        self.bar().set_message(format!("chunk {chunk}"));
    }

    fn on_chunk_complete(&self, chunk: usize, total_chunks: usize, summary_len: usize) {
        let elapsed = self.chunk_elapsed();
        let bar = self.bar();
        bar.println(format!(
            "  {} Chunk {:>3}/{:<3}  {:<8}  {}",
            green("✓"),
            chunk,
            total_chunks,
            dim(&format!("{summary_len:>5} chars")),
            dim(&format!("{elapsed:.1}s")),
        ));
        bar.inc(1);
    }

    fn on_chunk_error(&self, chunk: usize, total_chunks: usize, error: &str) {
        let elapsed = self.chunk_elapsed();
        // Keep the log line on one terminal row.
        let msg = if error.chars().count() > 80 {
            format!("{}\u{2026}", error.chars().take(79).collect::<String>())
        } else {
            error.to_string()
        };
        let bar = self.bar();
        bar.println(format!(
            "  {} Chunk {:>3}/{:<3}  {}  {}",
            red("✗"),
            chunk,
            total_chunks,
            red(&msg),
            dim(&format!("{elapsed:.1}s")),
        ));
        bar.inc(1);
    }

    fn on_summary_complete(&self, total_chunks: usize, success_count: usize) {
        self.bar().finish_and_clear();
        if success_count == total_chunks {
            eprintln!(
                "{} {} chunks summarized",
                green("✔"),
                bold(&success_count.to_string())
            );
        } else {
            eprintln!(
                "{} summary stopped after {}/{} chunks",
                red("✘"),
                bold(&success_count.to_string()),
                total_chunks
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Summarize a local file
  pdfsum report.pdf

  # Longer summaries, show the extracted text first
  pdfsum --max-length 300 --min-length 80 --show-text report.pdf

  # Summarize a PDF from a URL with a specific model
  pdfsum --provider openai --model gpt-4.1-mini https://arxiv.org/pdf/1706.03762

  # Print chunk summaries as they arrive
  pdfsum --stream book.pdf

  # JSON output with per-chunk stats
  pdfsum --json report.pdf > summary.json

  # Interactive session
  pdfsum --interactive

INTERACTIVE COMMANDS:
  open <path|url>   Load a PDF and summarize it
  max <n>           Set the maximum summary length (50-500 tokens)
  min <n>           Set the minimum summary length (20-100 tokens)
  text              Print the extracted text
  summary           Print the current summary
  retry             Summarize the loaded text again
  status            Show the session state
  reset             Unload the document
  help              Show this list
  quit              Leave the session

ENVIRONMENT VARIABLES:
  OPENAI_API_KEY          OpenAI API key
  ANTHROPIC_API_KEY       Anthropic API key
  GEMINI_API_KEY          Google Gemini API key
  EDGEQUAKE_LLM_PROVIDER  Provider used when --provider is not set
  EDGEQUAKE_MODEL         Model used together with EDGEQUAKE_LLM_PROVIDER
  PDFSUM_*                Every flag, e.g. PDFSUM_MAX_LENGTH=200
"#;

/// Summarize PDF files and URLs with an LLM.
#[derive(Parser, Debug)]
#[command(
    name = "pdfsum",
    version,
    about = "Summarize PDF files and URLs with an LLM",
    long_about = "Extract the text of a PDF (local file or URL), split it into chunks, \
summarize each chunk with a language model and print the joined summary. Supports OpenAI, \
Anthropic, Google Gemini, Azure OpenAI, and any OpenAI-compatible endpoint (Ollama, vLLM, \
LiteLLM, etc.).",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path or HTTP/HTTPS URL.
    #[arg(required_unless_present = "interactive")]
    input: Option<String>,

    /// Maximum summary length per chunk, in tokens (50–500).
    #[arg(long, env = "PDFSUM_MAX_LENGTH", default_value_t = 150,
          value_parser = clap::value_parser!(u32).range(50..=500))]
    max_length: u32,

    /// Minimum summary length per chunk, in tokens (20–100).
    #[arg(long, env = "PDFSUM_MIN_LENGTH", default_value_t = 50,
          value_parser = clap::value_parser!(u32).range(20..=100))]
    min_length: u32,

    /// Maximum chunk size in characters.
    #[arg(long, env = "PDFSUM_CHUNK_SIZE", default_value_t = 1024)]
    chunk_size: usize,

    /// LLM model ID (e.g. gpt-4.1-nano, gpt-4.1-mini, claude-sonnet-4-20250514).
    #[arg(long, env = "PDFSUM_MODEL")]
    model: Option<String>,

    /// LLM provider: openai, anthropic, gemini, ollama, azure.
    #[arg(
        long,
        env = "PDFSUM_PROVIDER",
        long_help = "LLM provider. Auto-detected from API key env vars if not set.\n\
          Supported: openai, anthropic, gemini, azure, ollama, or any OpenAI-compatible URL."
    )]
    provider: Option<String>,

    /// Retries per chunk on LLM failure.
    #[arg(long, env = "PDFSUM_MAX_RETRIES", default_value_t = 3)]
    max_retries: u32,

    /// Path to a text file containing a custom system prompt.
    #[arg(long, env = "PDFSUM_SYSTEM_PROMPT")]
    system_prompt: Option<PathBuf>,

    /// HTTP download timeout in seconds.
    #[arg(long, env = "PDFSUM_DOWNLOAD_TIMEOUT", default_value_t = 120)]
    download_timeout: u64,

    /// Per-chunk LLM call timeout in seconds.
    #[arg(long, env = "PDFSUM_API_TIMEOUT", default_value_t = 60)]
    api_timeout: u64,

    /// Print the extracted text before the summary.
    #[arg(long, env = "PDFSUM_SHOW_TEXT")]
    show_text: bool,

    /// Output structured JSON (SummaryOutput) instead of plain text.
    #[arg(long, env = "PDFSUM_JSON", conflicts_with_all = ["stream", "interactive"])]
    json: bool,

    /// Print each chunk summary as soon as it is ready.
    #[arg(long, env = "PDFSUM_STREAM", conflicts_with = "interactive")]
    stream: bool,

    /// Disable progress bar.
    #[arg(long, env = "PDFSUM_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFSUM_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDFSUM_QUIET")]
    quiet: bool,

    /// Start an interactive session reading commands from stdin.
    #[arg(short, long, env = "PDFSUM_INTERACTIVE")]
    interactive: bool,
}

/// JSON report: the library output plus what the CLI knows about the input.
#[derive(Serialize)]
struct JsonReport<'a> {
    document: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(flatten)]
    output: &'a SummaryOutput,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The progress bar provides all the feedback that matters while it is
    // on screen, so INFO-level library logs are suppressed under it.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json && !cli.stream;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress = show_progress.then(CliProgressCallback::new);
    let config = build_config(
        &cli,
        progress.clone().map(|cb| cb as ProgressCallback),
    )
    .await?;

    if cli.interactive {
        return run_interactive(&cli, config, progress).await;
    }

    // `required_unless_present` guarantees an input outside interactive mode.
    let input = cli.input.as_deref().context("No input given")?;

    if cli.stream {
        run_stream(&cli, input, &config).await
    } else {
        run_once(&cli, input, config, progress).await
    }
}

/// Map CLI args to `SummaryConfig`.
async fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<SummaryConfig> {
    let system_prompt = if let Some(ref path) = cli.system_prompt {
        Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read system prompt from {:?}", path))?,
        )
    } else {
        None
    };

    let mut builder = SummaryConfig::builder()
        .max_length(cli.max_length)
        .min_length(cli.min_length)
        .chunk_size(cli.chunk_size)
        .max_retries(cli.max_retries)
        .download_timeout_secs(cli.download_timeout)
        .api_timeout_secs(cli.api_timeout);

    if let Some(ref model) = cli.model {
        builder = builder.model(model);
    }
    if let Some(ref provider) = cli.provider {
        builder = builder.provider_name(provider);
    }
    if let Some(prompt) = system_prompt {
        builder = builder.system_prompt(prompt);
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

// ── One-shot mode ────────────────────────────────────────────────────────────

async fn run_once(
    cli: &Cli,
    input: &str,
    config: SummaryConfig,
    progress: Option<Arc<CliProgressCallback>>,
) -> Result<()> {
    let document = resolve_input(input, config.download_timeout_secs)
        .await
        .with_context(|| format!("Failed to open '{input}'"))?;

    let mut session = Session::new(config);
    let phase = session.handle(SessionEvent::Upload(document)).await;
    if let Some(ref cb) = progress {
        cb.clear();
    }

    if cli.show_text && !cli.json {
        if let Some(text) = session.extracted_text() {
            print_section("Extracted text", text);
        }
    }

    match (phase, session.output()) {
        (Phase::Done, Some(output)) => {
            if cli.json {
                let report = JsonReport {
                    document: session.document_name().unwrap_or(input),
                    text: cli.show_text.then(|| session.extracted_text()).flatten(),
                    output,
                };
                let json =
                    serde_json::to_string_pretty(&report).context("Failed to serialise output")?;
                println!("{json}");
            } else {
                if cli.show_text {
                    print_section("Summary", &output.summary);
                } else {
                    write_stdout(&output.summary)?;
                }
                if !cli.quiet {
                    eprintln!(
                        "   {} chunks  /  {} tokens in  /  {} tokens out  —  {}ms total",
                        output.stats.chunk_count,
                        dim(&output.stats.total_input_tokens.to_string()),
                        dim(&output.stats.total_output_tokens.to_string()),
                        output.stats.duration_ms,
                    );
                }
            }
            Ok(())
        }
        _ => {
            let message = session
                .notice()
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("Session stopped in state '{phase}'"));
            anyhow::bail!(message)
        }
    }
}

// ── Streaming mode ───────────────────────────────────────────────────────────

async fn run_stream(cli: &Cli, input: &str, config: &SummaryConfig) -> Result<()> {
    let document = resolve_input(input, config.download_timeout_secs)
        .await
        .with_context(|| format!("Failed to open '{input}'"))?;

    let content = extract(&document)
        .await
        .into_result()
        .context("Failed to extract text")?;
    if !content.has_text() {
        anyhow::bail!(NO_TEXT_WARNING);
    }

    if cli.show_text {
        print_section("Extracted text", &content.text);
        println!("{}", bold("Summary"));
    }

    let mut chunks = summarize_stream(&content.text, config)
        .await
        .context("Summarization failed")?;

    let mut failed = 0usize;
    while let Some(item) = chunks.next().await {
        match item {
            Ok(chunk) => write_stdout(&chunk.summary)?,
            Err(e) => {
                failed += 1;
                eprintln!("{} {}", red("✗"), red(&e.to_string()));
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} chunks could not be summarized");
    }
    Ok(())
}

// ── Interactive mode ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Open(String),
    Max(u32),
    Min(u32),
    Text,
    Summary,
    Retry,
    Status,
    Reset,
    Help,
    Quit,
}

/// Parse one REPL line. Blank lines yield `Ok(None)`.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let number = |what: &str| -> Result<u32, String> {
        arg.parse::<u32>()
            .map_err(|_| format!("'{verb}' needs a number of tokens for the {what} length"))
    };

    let command = match verb.to_lowercase().as_str() {
        "open" | "upload" if arg.is_empty() => {
            return Err("'open' needs a file path or URL".to_string())
        }
        "open" | "upload" => Command::Open(arg.to_string()),
        "max" => Command::Max(number("maximum")?),
        "min" => Command::Min(number("minimum")?),
        "text" => Command::Text,
        "summary" => Command::Summary,
        "retry" => Command::Retry,
        "status" => Command::Status,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command '{other}'. Type 'help' for a list.")),
    };
    Ok(Some(command))
}

async fn run_interactive(
    cli: &Cli,
    config: SummaryConfig,
    progress: Option<Arc<CliProgressCallback>>,
) -> Result<()> {
    let download_timeout = config.download_timeout_secs;
    let mut session = Session::new(config);

    eprintln!("{} {}", cyan("◆"), bold("pdfsum interactive session"));
    if let Some(notice) = session.notice() {
        print_notice(notice);
    }

    // An input given on the command line is opened straight away.
    if let Some(ref input) = cli.input {
        open(&mut session, input, download_timeout, progress.as_deref()).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("{} ", bold("pdfsum>"));
        io::stderr().flush().ok();

        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{} {}", yellow("⚠"), message);
                continue;
            }
        };

        match command {
            Command::Open(input) => {
                open(&mut session, &input, download_timeout, progress.as_deref()).await
            }
            Command::Max(n) => {
                let phase = session.handle(SessionEvent::SetMaxLength(n)).await;
                after_length_change(&session, phase, progress.as_deref());
            }
            Command::Min(n) => {
                let phase = session.handle(SessionEvent::SetMinLength(n)).await;
                after_length_change(&session, phase, progress.as_deref());
            }
            Command::Text => match session.extracted_text() {
                Some(text) => print_section("Extracted text", text),
                None => print_notice(&Notice::Info(UPLOAD_PROMPT.to_string())),
            },
            Command::Summary => match session.summary() {
                Some(summary) => print_section("Summary", summary),
                None => match session.notice() {
                    Some(notice) => print_notice(notice),
                    None => eprintln!("{}", dim("No summary yet.")),
                },
            },
            Command::Retry => {
                session.handle(SessionEvent::Retry).await;
                report(&session, progress.as_deref());
            }
            Command::Status => print_status(&session),
            Command::Reset => {
                session.handle(SessionEvent::Reset).await;
                report(&session, progress.as_deref());
            }
            Command::Help => eprintln!("{}", help_text()),
            Command::Quit => break,
        }
    }

    Ok(())
}

async fn open(
    session: &mut Session,
    input: &str,
    download_timeout: u64,
    progress: Option<&CliProgressCallback>,
) {
    match resolve_input(input, download_timeout).await {
        Ok(document) => {
            session.handle(SessionEvent::Upload(document)).await;
            report(session, progress);
        }
        Err(e) => eprintln!("{} {}", red("✗"), e),
    }
}

fn after_length_change(session: &Session, phase: Phase, progress: Option<&CliProgressCallback>) {
    eprintln!("{} summary length {}", cyan("◆"), session.bounds());
    if phase != Phase::Idle {
        report(session, progress);
    }
}

/// Show whatever the last event produced: a notice, or the fresh summary.
fn report(session: &Session, progress: Option<&CliProgressCallback>) {
    if let Some(cb) = progress {
        cb.clear();
    }
    if let Some(notice) = session.notice() {
        print_notice(notice);
    }
    if session.phase() == Phase::Done {
        if let Some(summary) = session.summary() {
            print_section("Summary", summary);
        }
    }
}

fn print_status(session: &Session) {
    eprintln!("  state     {}", bold(&session.phase().to_string()));
    eprintln!(
        "  document  {}",
        session.document_name().unwrap_or("(none)")
    );
    eprintln!("  length    {}", session.bounds());
    if let Some(text) = session.extracted_text() {
        eprintln!("  text      {} chars", text.chars().count());
    }
    if let Some(output) = session.output() {
        eprintln!(
            "  summary   {} chunks → {} chars  ({})",
            output.stats.chunk_count, output.stats.summary_chars, output.stats.model
        );
    }
}

fn help_text() -> &'static str {
    AFTER_HELP
        .split("INTERACTIVE COMMANDS:\n")
        .nth(1)
        .and_then(|rest| rest.split("\n\n").next())
        .unwrap_or("")
}

// ── Output helpers ───────────────────────────────────────────────────────────

fn print_notice(notice: &Notice) {
    match notice {
        Notice::Info(m) => eprintln!("{} {}", cyan("ℹ"), m),
        Notice::Warning(m) => eprintln!("{} {}", yellow("⚠"), yellow(m)),
        Notice::Error(m) => eprintln!("{} {}", red("✗"), red(m)),
    }
}

fn print_section(title: &str, body: &str) {
    println!("{}", bold(title));
    println!("{}", body.trim_end());
    println!();
}

fn write_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;
    if !text.ends_with('\n') {
        handle.write_all(b"\n").ok();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("open report.pdf").unwrap(),
            Some(Command::Open("report.pdf".into()))
        );
        assert_eq!(
            parse_command("  OPEN   https://example.com/a.pdf ").unwrap(),
            Some(Command::Open("https://example.com/a.pdf".into()))
        );
        assert_eq!(parse_command("max 300").unwrap(), Some(Command::Max(300)));
        assert_eq!(parse_command("min 20").unwrap(), Some(Command::Min(20)));
        assert_eq!(parse_command("quit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("").unwrap(), None);
    }

    #[test]
    fn rejects_bad_commands() {
        assert!(parse_command("open").is_err());
        assert!(parse_command("max lots").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn help_text_lists_commands() {
        let help = help_text();
        assert!(help.contains("open <path|url>"));
        assert!(help.contains("quit"));
        assert!(!help.contains("ENVIRONMENT"));
    }

    #[test]
    fn interactive_does_not_need_input() {
        let cli = Cli::try_parse_from(["pdfsum", "--interactive"]).unwrap();
        assert!(cli.input.is_none());
        assert!(Cli::try_parse_from(["pdfsum", "--json"]).is_err());
    }

    #[test]
    fn length_flags_are_range_checked() {
        assert!(Cli::try_parse_from(["pdfsum", "--max-length", "40", "a.pdf"]).is_err());
        assert!(Cli::try_parse_from(["pdfsum", "--min-length", "101", "a.pdf"]).is_err());
        let cli = Cli::try_parse_from(["pdfsum", "--max-length", "500", "a.pdf"]).unwrap();
        assert_eq!(cli.max_length, 500);
    }
}
