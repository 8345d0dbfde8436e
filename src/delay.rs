//! Artificial processing latency, kept out of the engine itself.

use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;
use rand::RngExt;

use crate::consts::{LATENCY_MAX_MS, LATENCY_MIN_MS};
use crate::engine::{SummaryResult, TaskExtraction};
use crate::service::{ExtractTasksRequest, NoteIntelligence, RequestError, SummarizeRequest};

/// Decorator that pauses for a random duration before delegating.
/// Affects response timing only; results pass through untouched.
pub struct SimulatedLatency<E> {
    inner: E,
    range_ms: Range<u64>,
}

impl<E> SimulatedLatency<E> {
    /// Wrap `inner` with the default 1000–3000 ms pause.
    pub fn new(inner: E) -> Self {
        Self::with_range(inner, LATENCY_MIN_MS..LATENCY_MAX_MS)
    }

    /// Wrap `inner` with a custom millisecond range. Must be non-empty.
    pub fn with_range(inner: E, range_ms: Range<u64>) -> Self {
        Self { inner, range_ms }
    }

    async fn pause(&self) {
        // The rng handle is not Send, so finish the draw before the await.
        let ms = {
            let mut rng = rand::rng();
            rng.random_range(self.range_ms.clone())
        };
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

#[async_trait]
impl<E: NoteIntelligence> NoteIntelligence for SimulatedLatency<E> {
    async fn summarize(&self, request: SummarizeRequest) -> Result<SummaryResult, RequestError> {
        self.pause().await;
        self.inner.summarize(request).await
    }

    async fn extract_tasks(
        &self,
        request: ExtractTasksRequest,
    ) -> Result<TaskExtraction, RequestError> {
        self.pause().await;
        self.inner.extract_tasks(request).await
    }
}
