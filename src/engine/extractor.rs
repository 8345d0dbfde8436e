//! Action-item extraction from free-text notes.
//!
//! Two scan phases feed one working list: trigger phrases ("need to",
//! "must", ...) captured up to the next sentence terminator, then bullet
//! and numbered list lines. Every capture is normalized and filtered, the
//! list is deduplicated by case-insensitive containment, and the result is
//! capped.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::normalize::normalize_capture;
use crate::consts::MAX_TASKS;

/// What [`extract_tasks`] produces: normalized tasks in capture order,
/// never more than [`MAX_TASKS`], no containment duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskExtraction {
    pub tasks: Vec<String>,
}

/// Trigger phrases in priority order. The lazy capture runs to the next
/// `.` or `!` or end of input and does not cross line breaks.
const TRIGGER_PATTERNS: &[&str] = &[
    r"(?i)need to (.+?)(?:[.!]|$)",
    r"(?i)must (.+?)(?:[.!]|$)",
    r"(?i)should (.+?)(?:[.!]|$)",
    r"(?i)have to (.+?)(?:[.!]|$)",
    r"(?i)todo:?\s*(.+?)(?:[.!]|$)",
    r"(?i)action:?\s*(.+?)(?:[.!]|$)",
    r"(?i)next step:?\s*(.+?)(?:[.!]|$)",
    r"(?i)will (.+?)(?:[.!]|$)",
    r"(?i)plan to (.+?)(?:[.!]|$)",
    r"(?i)going to (.+?)(?:[.!]|$)",
];

/// Bullet (`-`, `*`, `•`) and numbered (`1.`) list lines.
const LIST_PATTERNS: &[&str] = &[r"(?m)^[-*•]\s*(.+)$", r"(?m)^\d+\.\s*(.+)$"];

static TRIGGERS: OnceLock<Vec<Regex>> = OnceLock::new();
static LISTS: OnceLock<Vec<Regex>> = OnceLock::new();

fn triggers() -> &'static [Regex] {
    TRIGGERS.get_or_init(|| compile(TRIGGER_PATTERNS))
}

fn lists() -> &'static [Regex] {
    LISTS.get_or_init(|| compile(LIST_PATTERNS))
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("task pattern"))
        .collect()
}

/// Scan `note` for actionable phrases and list items.
///
/// All occurrences of every trigger are captured, not just the first, and
/// trigger captures always precede list captures in the working list.
pub fn extract_tasks(note: &str) -> TaskExtraction {
    let mut candidates: Vec<String> = Vec::new();

    for pattern in triggers().iter().chain(lists()) {
        for caps in pattern.captures_iter(note) {
            if let Some(task) = normalize_capture(&caps[1]) {
                candidates.push(task);
            }
        }
    }

    // First-seen phrasing wins; later overlapping phrasings are dropped
    // regardless of length.
    let mut tasks: Vec<String> = Vec::new();
    for candidate in candidates {
        if !overlaps(&tasks, &candidate) {
            tasks.push(candidate);
        }
    }
    tasks.truncate(MAX_TASKS);

    debug!(tasks = tasks.len(), "tasks extracted");

    TaskExtraction { tasks }
}

/// True when `candidate` case-insensitively contains, or is contained by,
/// any already-accepted task.
fn overlaps(accepted: &[String], candidate: &str) -> bool {
    let candidate = candidate.to_lowercase();
    accepted.iter().any(|task| {
        let task = task.to_lowercase();
        task.contains(&candidate) || candidate.contains(&task)
    })
}
