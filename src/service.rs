//! The request/response boundary around the engine.
//!
//! The transport layer (an external collaborator) only knows the
//! [`NoteIntelligence`] trait. Decorators (simulated latency) wrap
//! around it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{self, SummaryResult, TaskExtraction};

/// Body of a summarize request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

/// Body of a task-extraction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractTasksRequest {
    pub note: String,
}

/// Client-input failures, rejected before the engine runs.
/// The transport maps these to a 400-class response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Text is required for summarization")]
    MissingText,
    #[error("Note is required for task extraction")]
    MissingNote,
}

/// The outermost boundary. The transport only knows this trait.
#[async_trait]
pub trait NoteIntelligence: Send + Sync {
    async fn summarize(&self, request: SummarizeRequest) -> Result<SummaryResult, RequestError>;

    async fn extract_tasks(
        &self,
        request: ExtractTasksRequest,
    ) -> Result<TaskExtraction, RequestError>;
}

/// Direct, zero-latency implementation over the rule engine.
/// Stateless; a single value serves any number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

#[async_trait]
impl NoteIntelligence for RuleEngine {
    async fn summarize(&self, request: SummarizeRequest) -> Result<SummaryResult, RequestError> {
        if request.text.trim().is_empty() {
            return Err(RequestError::MissingText);
        }
        Ok(engine::summarize(&request.text))
    }

    async fn extract_tasks(
        &self,
        request: ExtractTasksRequest,
    ) -> Result<TaskExtraction, RequestError> {
        if request.note.trim().is_empty() {
            return Err(RequestError::MissingNote);
        }
        Ok(engine::extract_tasks(&request.note))
    }
}
