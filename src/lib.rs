//! # tripsmith
//!
//! Generate structured travel itineraries with LLM text completion.
//!
//! ## Why this crate?
//!
//! Asking a model for a travel plan yields prose: useful to read, useless to
//! render. tripsmith prompts for a fixed markdown shape — an overview
//! section, a per-day schedule table, supplementary notes, optionally a
//! budget breakdown — and then does the part the model cannot be trusted
//! with: parsing its loosely-structured response back into typed records
//! that a renderer, API, or test can consume. The parser is best-effort and
//! total: malformed output degrades into empty fields and warnings, never
//! into a crash.
//!
//! ## Pipeline Overview
//!
//! ```text
//! TripRequest
//!  │
//!  ├─ 1. Prompt    fill the fixed itinerary template
//!  ├─ 2. LLM       completion call with retry/backoff
//!  ├─ 3. Budget    optional follow-up call, appended under its heading
//!  ├─ 4. Sanitize  strip fences / CRLF / invisible chars per response
//!  ├─ 5. Parse     sections → keyword fields + schedule table
//!  └─ 6. Group     derived per-day views for rendering
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tripsmith::{generate, group_by_day, PlanConfig, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Provider auto-detected from OPENAI_API_KEY / ANTHROPIC_API_KEY / …
//!     let request = TripRequest::new("日本", "タイ", 5).with_budget(200_000);
//!     let output = generate(&request, &PlanConfig::default()).await?;
//!
//!     println!("{}", output.plan.overview.transportation.trim());
//!     for day in group_by_day(&output.plan, request.duration) {
//!         println!("{}: {} slots", day.label(), day.slots.len());
//!     }
//!     eprintln!("tokens: {} in / {} out",
//!         output.stats.total_input_tokens,
//!         output.stats.total_output_tokens);
//!     Ok(())
//! }
//! ```
//!
//! Parsing is also usable standalone — for instance on the client side of a
//! service that returns the raw text — via [`parse_plan`]:
//!
//! ```rust
//! use tripsmith::parse_plan;
//!
//! let plan = parse_plan("# 概要\n1. 移動手段: 飛行機");
//! assert_eq!(plan.overview.transportation, ": 飛行機");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `tripsmith` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! tripsmith = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod progress;
pub mod prompts;
pub mod request;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PlanConfig, PlanConfigBuilder};
pub use error::{ParseWarning, TripsmithError};
pub use generate::{generate, generate_sync, generate_to_file};
pub use output::{PlanOutput, PlanStats};
pub use parse::{
    group_by_day, parse_plan, parse_plan_with_warnings, parse_schedule_row, AdditionalInfo,
    DaySchedule, OverviewInfo, ParsedPlan, RowOutcome, ScheduleEntry, TimeSlot,
};
pub use pipeline::sanitize::sanitize_response;
pub use pipeline::PlanStage;
pub use progress::{NoopProgressCallback, PlanProgressCallback, ProgressCallback};
pub use request::TripRequest;
