//! CLI binary for tripsmith.
//!
//! A thin shim over the library crate that maps CLI flags to `PlanConfig`
//! and renders the parsed plan in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tripsmith::{
    generate, generate_to_file, group_by_day, PlanConfig, PlanOutput, PlanProgressCallback,
    PlanStage, ProgressCallback, TripRequest,
};

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
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

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress: a steady spinner whose message tracks the current
/// completion stage. Finished unconditionally by `main`, on errors too.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
        bar.set_style(style);
        bar.set_prefix("Planning");
        bar.set_message("warming up…");
        bar.enable_steady_tick(Duration::from_millis(80));
        Arc::new(Self { bar })
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl PlanProgressCallback for CliProgress {
    fn on_generation_start(&self, total_stages: usize) {
        self.bar.set_message(format!("{total_stages} completion(s) ahead"));
    }

    fn on_stage_start(&self, stage: PlanStage) {
        let msg = match stage {
            PlanStage::Itinerary => "drafting the itinerary…",
            PlanStage::BudgetBreakdown => "breaking down the budget…",
        };
        self.bar.set_message(msg);
    }

    fn on_stage_retry(&self, stage: PlanStage, attempt: u32, max_retries: u32) {
        self.bar
            .set_message(format!("{stage}: retry {attempt}/{max_retries}…"));
    }

    fn on_stage_complete(&self, stage: PlanStage, response_len: usize) {
        self.bar.println(format!(
            "  {} {}  {}",
            green("✓"),
            stage,
            dim(&format!("{response_len} chars")),
        ));
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Five days in Thailand, rendered in the terminal
  tripsmith 日本 タイ --days 5

  # With a budget breakdown appended
  tripsmith 日本 タイ --days 5 --budget 200000

  # Write the raw markdown plan to a file
  tripsmith Tokyo Bangkok -d 3 -o plan.md

  # Structured JSON (parsed plan + warnings + stats)
  tripsmith 日本 タイ -d 5 --json > plan.json

  # Use a specific model
  tripsmith --model gpt-4o --provider openai 日本 タイ -d 5

ENVIRONMENT VARIABLES:
  OPENAI_API_KEY           OpenAI API key
  ANTHROPIC_API_KEY        Anthropic API key
  GEMINI_API_KEY           Google Gemini API key
  TRIPSMITH_LLM_PROVIDER   Override provider (openai, anthropic, gemini, ollama)
  TRIPSMITH_MODEL          Override model ID

SETUP:
  1. Set API key:     export OPENAI_API_KEY=sk-...
  2. Generate:        tripsmith 日本 タイ --days 5
"#;

/// Generate structured travel itineraries with an LLM.
#[derive(Parser, Debug)]
#[command(
    name = "tripsmith",
    version,
    about = "Generate structured travel itineraries with an LLM",
    long_about = "Generate a travel plan (overview, per-day schedule, supplementary notes, \
optional budget breakdown) with an LLM completion provider, parse the response into typed \
records, and render it. Supports OpenAI, Anthropic, Google Gemini, and any OpenAI-compatible \
endpoint.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Departure location, e.g. 日本.
    origin: String,

    /// Destination, e.g. タイ.
    destination: String,

    /// Trip length in days.
    #[arg(short, long, env = "TRIPSMITH_DAYS", default_value_t = 5,
          value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,

    /// Total budget in yen; adds a budget-breakdown completion.
    #[arg(short, long, env = "TRIPSMITH_BUDGET")]
    budget: Option<u64>,

    /// LLM model ID (e.g. gpt-4o-mini, claude-sonnet-4-20250514).
    #[arg(long, env = "TRIPSMITH_MODEL")]
    model: Option<String>,

    /// LLM provider: openai, anthropic, gemini, ollama.
    #[arg(
        long,
        env = "TRIPSMITH_PROVIDER",
        long_help = "LLM provider. Auto-detected from API key env vars if not set.\n\
          Supported: openai, anthropic, gemini, ollama, or any OpenAI-compatible endpoint."
    )]
    provider: Option<String>,

    /// Write the raw markdown plan to this file instead of rendering.
    #[arg(short, long, env = "TRIPSMITH_OUTPUT")]
    output: Option<PathBuf>,

    /// Output structured JSON (parsed plan + warnings + stats).
    #[arg(long, env = "TRIPSMITH_JSON")]
    json: bool,

    /// Print the raw markdown response instead of the rendered plan.
    #[arg(long)]
    raw: bool,

    /// LLM temperature (0.0–2.0).
    #[arg(long, env = "TRIPSMITH_TEMPERATURE", default_value_t = 0.7)]
    temperature: f32,

    /// Max LLM output tokens per completion.
    #[arg(long, env = "TRIPSMITH_MAX_TOKENS", default_value_t = 4096)]
    max_tokens: usize,

    /// Retries per completion on LLM failure.
    #[arg(long, env = "TRIPSMITH_MAX_RETRIES", default_value_t = 3)]
    max_retries: u32,

    /// Per-completion timeout in seconds.
    #[arg(long, env = "TRIPSMITH_API_TIMEOUT", default_value_t = 120)]
    api_timeout: u64,

    /// Disable the progress spinner.
    #[arg(long, env = "TRIPSMITH_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "TRIPSMITH_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the plan itself.
    #[arg(short, long, env = "TRIPSMITH_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the spinner is active; the
    // spinner provides the feedback that matters.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
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

    // ── Build request and config ─────────────────────────────────────────
    let mut request = TripRequest::new(&cli.origin, &cli.destination, cli.days);
    if let Some(budget) = cli.budget {
        request = request.with_budget(budget);
    }

    let progress = if show_progress {
        Some(CliProgress::new())
    } else {
        None
    };
    let config = build_config(&cli, progress.clone().map(|p| p as ProgressCallback))?;

    // ── Run generation ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let result = generate_to_file(&request, output_path, &config).await;
        if let Some(ref p) = progress {
            p.finish();
        }
        let stats = result.context("Plan generation failed")?;

        if !cli.quiet {
            eprintln!(
                "{}  {} days  {} calls  {}ms  →  {}",
                green("✔"),
                cli.days,
                stats.llm_calls,
                stats.total_duration_ms,
                bold(&output_path.display().to_string()),
            );
            eprintln!(
                "   {} tokens in  /  {} tokens out",
                dim(&stats.total_input_tokens.to_string()),
                dim(&stats.total_output_tokens.to_string()),
            );
        }
        return Ok(());
    }

    let result = generate(&request, &config).await;
    if let Some(ref p) = progress {
        p.finish();
    }
    let output = result.context("Plan generation failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else if cli.raw {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(output.raw.as_bytes())
            .context("Failed to write to stdout")?;
        if !output.raw.ends_with('\n') {
            handle.write_all(b"\n").ok();
        }
    } else {
        render_plan(&output, cli.days);
    }

    if !cli.quiet {
        if !output.warnings.is_empty() {
            eprintln!(
                "{} {} parse warning(s) — run with --verbose for details",
                yellow("⚠"),
                output.warnings.len()
            );
        }
        eprintln!(
            "   {} tokens in  /  {} tokens out  —  {}ms total",
            dim(&output.stats.total_input_tokens.to_string()),
            dim(&output.stats.total_output_tokens.to_string()),
            output.stats.total_duration_ms,
        );
    }

    Ok(())
}

/// Map CLI args to `PlanConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<PlanConfig> {
    let mut builder = PlanConfig::builder()
        .temperature(cli.temperature)
        .max_tokens(cli.max_tokens)
        .max_retries(cli.max_retries)
        .api_timeout_secs(cli.api_timeout);

    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    let mut config = builder.build().context("Invalid configuration")?;
    config.model = cli.model.clone();
    config.provider_name = cli.provider.clone();
    Ok(config)
}

// ── Terminal rendering ───────────────────────────────────────────────────────

/// Field values keep the raw remainder of their keyword line; strip the
/// leading label punctuation for display.
fn display_value(value: &str) -> &str {
    value
        .trim()
        .trim_start_matches([':', '：'])
        .trim_start()
}

fn field_line(label: &str, value: &str) {
    if value.trim().is_empty() {
        println!("  {}  {}", dim(label), dim("—"));
    } else {
        println!("  {}  {}", dim(label), display_value(value));
    }
}

/// Render the parsed plan: overview, per-day schedule, supplementary notes.
fn render_plan(output: &PlanOutput, days: u32) {
    let plan = &output.plan;

    println!("{}", bold("旅行の概要"));
    field_line("移動手段", &plan.overview.transportation);
    field_line("宿泊先　", &plan.overview.accommodation);
    field_line("予算目安", &plan.overview.budget);
    field_line("持ち物　", &plan.overview.items);

    println!("\n{}", bold("詳細日程"));
    for day in group_by_day(plan, days) {
        println!("{}", cyan(&bold(&day.label())));
        if day.slots.is_empty() {
            println!("  {}", dim("（予定なし）"));
            continue;
        }
        for slot in &day.slots {
            let transport = match slot.transport.as_str() {
                "" | "-" => String::new(),
                t => dim(&format!("（{t}）")),
            };
            println!(
                "  {}  {} — {} {}",
                dim(&slot.time),
                bold(&slot.action),
                slot.detail,
                transport
            );
        }
    }

    println!("\n{}", bold("補足情報"));
    field_line("グルメ　", &plan.additional.food);
    field_line("気候・服装", &plan.additional.climate);
    field_line("注意点　", &plan.additional.notes);
}
