//! End-to-end generation entry points.
//!
//! [`generate`] runs the whole flow: validate the request, resolve a
//! provider, run the itinerary completion, optionally run the budget
//! follow-up and merge it in (each response sanitised as it arrives), and
//! parse the combined text into the typed plan. The parse step cannot fail —
//! a messy response degrades into warnings on the output, never into an
//! `Err`.

use crate::config::PlanConfig;
use crate::error::TripsmithError;
use crate::output::{PlanOutput, PlanStats};
use crate::parse;
use crate::pipeline::{llm, sanitize, PlanStage};
use crate::prompts;
use crate::request::TripRequest;
use edgequake_llm::{LLMProvider, ProviderFactory};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Default model when neither config nor environment names one.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Generate a travel plan for a trip request.
///
/// This is the primary entry point for the library.
///
/// # Returns
/// `Ok(PlanOutput)` on success, even when the response parsed imperfectly
/// (check `output.warnings`).
///
/// # Errors
/// Returns `Err(TripsmithError)` only for fatal conditions:
/// - Invalid request (blank origin/destination, zero days)
/// - No LLM provider configured
/// - A completion failed after all retries
pub async fn generate(
    request: &TripRequest,
    config: &PlanConfig,
) -> Result<PlanOutput, TripsmithError> {
    let total_start = Instant::now();
    request.validate()?;
    info!(
        "Starting plan generation: {} → {}, {} days",
        request.origin, request.destination, request.duration
    );

    // ── Step 1: Resolve provider ─────────────────────────────────────────
    let provider = resolve_provider(config)?;

    let total_stages = if request.budget.is_some() { 2 } else { 1 };
    if let Some(ref cb) = config.progress_callback {
        cb.on_generation_start(total_stages);
    }

    // ── Step 2: Base itinerary completion ────────────────────────────────
    let llm_start = Instant::now();
    if let Some(ref cb) = config.progress_callback {
        cb.on_stage_start(PlanStage::Itinerary);
    }
    let prompt = prompts::build_planning_prompt(request);
    let mut base = llm::complete(&provider, PlanStage::Itinerary, &prompt, config).await?;
    // Sanitise per response, before the merge — an outer fence wraps one
    // completion, not the concatenation.
    base.content = sanitize::sanitize_response(&base.content);
    if let Some(ref cb) = config.progress_callback {
        cb.on_stage_complete(PlanStage::Itinerary, base.content.len());
    }

    // ── Step 3: Optional budget follow-up ────────────────────────────────
    // The follow-up embeds the base response, so the two calls are strictly
    // sequential.
    let (raw, budget_call) = match request.budget {
        Some(budget) => {
            if let Some(ref cb) = config.progress_callback {
                cb.on_stage_start(PlanStage::BudgetBreakdown);
            }
            let budget_prompt = prompts::build_budget_prompt(&base.content, budget);
            let mut breakdown =
                llm::complete(&provider, PlanStage::BudgetBreakdown, &budget_prompt, config)
                    .await?;
            breakdown.content = sanitize::sanitize_response(&breakdown.content);
            if let Some(ref cb) = config.progress_callback {
                cb.on_stage_complete(PlanStage::BudgetBreakdown, breakdown.content.len());
            }
            (
                prompts::merge_budget_plan(&base.content, &breakdown.content),
                Some(breakdown),
            )
        }
        None => (base.content.clone(), None),
    };
    let llm_duration_ms = llm_start.elapsed().as_millis() as u64;

    // ── Step 4: Parse ────────────────────────────────────────────────────
    let (plan, warnings) = parse::parse_plan_with_warnings(&raw);
    for warning in &warnings {
        warn!("Degraded parse: {warning}");
    }
    debug!(
        "Parsed {} schedule rows, {} warnings",
        plan.schedule.len(),
        warnings.len()
    );

    // ── Step 5: Stats ────────────────────────────────────────────────────
    let stats = PlanStats {
        llm_calls: total_stages,
        total_input_tokens: base.input_tokens
            + budget_call.as_ref().map_or(0, |c| c.input_tokens),
        total_output_tokens: base.output_tokens
            + budget_call.as_ref().map_or(0, |c| c.output_tokens),
        retries: base.retries + budget_call.as_ref().map_or(0, |c| c.retries),
        llm_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Plan generated: {} calls, {} schedule rows, {}ms total",
        stats.llm_calls,
        plan.schedule.len(),
        stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_generation_complete(total_stages);
    }

    Ok(PlanOutput {
        raw,
        plan,
        warnings,
        stats,
    })
}

/// Generate a plan and write the raw text directly to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub async fn generate_to_file(
    request: &TripRequest,
    output_path: impl AsRef<Path>,
    config: &PlanConfig,
) -> Result<PlanStats, TripsmithError> {
    let output = generate(request, config).await?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| TripsmithError::OutputWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    let tmp_path = path.with_extension("md.tmp");
    tokio::fs::write(&tmp_path, &output.raw)
        .await
        .map_err(|e| TripsmithError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| TripsmithError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(output.stats)
}

/// Synchronous wrapper around [`generate`].
///
/// Creates a temporary tokio runtime internally.
pub fn generate_sync(
    request: &TripRequest,
    config: &PlanConfig,
) -> Result<PlanOutput, TripsmithError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| TripsmithError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(generate(request, config))
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Instantiate a named provider with the given model.
fn create_provider(
    provider_name: &str,
    model: &str,
) -> Result<Arc<dyn LLMProvider>, TripsmithError> {
    ProviderFactory::create_llm_provider(provider_name, model).map_err(|e| {
        TripsmithError::ProviderNotConfigured {
            provider: provider_name.to_string(),
            hint: format!("{e}"),
        }
    })
}

/// Resolve the LLM provider, from most-specific to least-specific.
///
/// The four-level fallback chain lets library users and CLI users each set
/// exactly as much or as little as they need:
///
/// 1. **Pre-built provider** (`config.provider`) — the caller constructed
///    and configured the provider entirely; used as-is. Useful in tests or
///    when the caller needs custom middleware.
///
/// 2. **Named provider + model** (`config.provider_name`) — the factory
///    reads the corresponding API key (`OPENAI_API_KEY`, etc.) from the
///    environment.
///
/// 3. **Environment pair** (`TRIPSMITH_LLM_PROVIDER` + `TRIPSMITH_MODEL`) —
///    both set means the provider and model were chosen at the execution
///    environment level (shell profile, CI). Checked before full
///    auto-detection so the choice is honoured even when multiple API keys
///    are present.
///
/// 4. **Full auto-detection** — prefer OpenAI when `OPENAI_API_KEY` is set,
///    else scan all known key variables and take the first available
///    provider.
fn resolve_provider(config: &PlanConfig) -> Result<Arc<dyn LLMProvider>, TripsmithError> {
    // 1) User-provided provider takes priority
    if let Some(ref provider) = config.provider {
        return Ok(Arc::clone(provider));
    }

    // 2) Provider name + model
    if let Some(ref name) = config.provider_name {
        let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);
        return create_provider(name, model);
    }

    // 3) Environment pair
    if let (Ok(prov), Ok(model)) = (
        std::env::var("TRIPSMITH_LLM_PROVIDER"),
        std::env::var("TRIPSMITH_MODEL"),
    ) {
        if !prov.is_empty() && !model.is_empty() {
            return create_provider(&prov, &model);
        }
    }

    // 4) Prefer OpenAI when its key is present, so users with several
    // provider keys get a deterministic default.
    if let Ok(openai_key) = std::env::var("OPENAI_API_KEY") {
        if !openai_key.is_empty() {
            let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);
            return create_provider("openai", model);
        }
    }

    let (llm_provider, _embedding) =
        ProviderFactory::from_env().map_err(|e| TripsmithError::ProviderNotConfigured {
            provider: "auto".to_string(),
            hint: format!(
                "No LLM provider could be auto-detected from environment.\n\
                Set OPENAI_API_KEY, ANTHROPIC_API_KEY, or configure a provider.\n\
                Error: {e}"
            ),
        })?;

    Ok(llm_provider)
}
