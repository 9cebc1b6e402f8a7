//! Progress-callback trait for generation events.
//!
//! Inject an [`Arc<dyn PlanProgressCallback>`] via
//! [`crate::config::PlanConfigBuilder::progress_callback`] to receive
//! events as the pipeline works through its completion calls — a generation
//! spends almost all of its wall-clock time waiting on the model, so this
//! is what a terminal spinner or a web socket hooks into.
//!
//! The callback is scoped to a single `generate*` call and holds no global
//! state; hosts that display something on its events are responsible for
//! tearing that display down when the call returns, on the error path too.

use std::sync::Arc;

use crate::pipeline::PlanStage;

/// Called by the generation pipeline around each completion call.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Implementations must be `Send + Sync`; the
/// pipeline invokes them from async context.
pub trait PlanProgressCallback: Send + Sync {
    /// Called once before the first completion, with the number of stages
    /// this request will run (1, or 2 when a budget breakdown is requested).
    fn on_generation_start(&self, total_stages: usize) {
        let _ = total_stages;
    }

    /// Called just before a stage's completion request is sent.
    fn on_stage_start(&self, stage: PlanStage) {
        let _ = stage;
    }

    /// Called when a stage's completion is retried after a failure.
    fn on_stage_retry(&self, stage: PlanStage, attempt: u32, max_retries: u32) {
        let _ = (stage, attempt, max_retries);
    }

    /// Called when a stage's completion succeeds.
    ///
    /// `response_len` is the byte length of the response text.
    fn on_stage_complete(&self, stage: PlanStage, response_len: usize) {
        let _ = (stage, response_len);
    }

    /// Called once after the last stage, with the count of stages that
    /// completed. Fires on the success path only; hosts must clean up
    /// their display unconditionally when `generate` returns.
    fn on_generation_complete(&self, completed_stages: usize) {
        let _ = completed_stages;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl PlanProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in
/// [`crate::config::PlanConfig`].
pub type ProgressCallback = Arc<dyn PlanProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        completes: AtomicUsize,
        retries: AtomicUsize,
    }

    impl PlanProgressCallback for TrackingCallback {
        fn on_stage_start(&self, _stage: PlanStage) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }
        fn on_stage_retry(&self, _stage: PlanStage, _attempt: u32, _max: u32) {
            self.retries.fetch_add(1, Ordering::SeqCst);
        }
        fn on_stage_complete(&self, _stage: PlanStage, _response_len: usize) {
            self.completes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_generation_start(2);
        cb.on_stage_start(PlanStage::Itinerary);
        cb.on_stage_retry(PlanStage::Itinerary, 1, 3);
        cb.on_stage_complete(PlanStage::Itinerary, 1024);
        cb.on_generation_complete(2);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            starts: AtomicUsize::new(0),
            completes: AtomicUsize::new(0),
            retries: AtomicUsize::new(0),
        };
        tracker.on_stage_start(PlanStage::Itinerary);
        tracker.on_stage_retry(PlanStage::Itinerary, 1, 3);
        tracker.on_stage_complete(PlanStage::Itinerary, 512);
        tracker.on_stage_start(PlanStage::BudgetBreakdown);
        tracker.on_stage_complete(PlanStage::BudgetBreakdown, 256);

        assert_eq!(tracker.starts.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.completes.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.retries.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn PlanProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_generation_start(1);
        cb.on_stage_complete(PlanStage::Itinerary, 64);
    }
}
