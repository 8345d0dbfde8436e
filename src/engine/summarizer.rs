//! Bounded summaries and keyword-driven topic tags.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{ELLIPSIS, SUMMARY_WORD_LIMIT};

/// A topic category attached to a note when one of its keywords appears.
/// Closed set; serializes to the wire label (e.g. `"creative direction"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicTag {
    #[serde(rename = "budget")]
    Budget,
    #[serde(rename = "creative direction")]
    CreativeDirection,
    #[serde(rename = "timeline")]
    Timeline,
    #[serde(rename = "location")]
    Location,
    #[serde(rename = "talent")]
    Talent,
    #[serde(rename = "equipment")]
    Equipment,
    #[serde(rename = "client communication")]
    ClientCommunication,
}

impl TopicTag {
    /// The label used on the wire and in logs.
    pub fn label(&self) -> &'static str {
        match self {
            TopicTag::Budget => "budget",
            TopicTag::CreativeDirection => "creative direction",
            TopicTag::Timeline => "timeline",
            TopicTag::Location => "location",
            TopicTag::Talent => "talent",
            TopicTag::Equipment => "equipment",
            TopicTag::ClientCommunication => "client communication",
        }
    }
}

impl std::fmt::Display for TopicTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What [`summarize`] produces: the bounded summary plus every detected tag,
/// in detection order, each category at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub tags: Vec<TopicTag>,
}

/// One row per category, checked in this order. A category fires on any
/// case-insensitive substring hit and contributes at most one tag.
const KEYWORD_RULES: &[(TopicTag, &[&str])] = &[
    (
        TopicTag::Budget,
        &["budget", "cost", "money", "price", "inr", "amount"],
    ),
    (
        TopicTag::CreativeDirection,
        &["creative", "design", "visual", "aesthetic", "style", "direction"],
    ),
    (
        TopicTag::Timeline,
        &["timeline", "deadline", "schedule", "complete", "finish", "delivery"],
    ),
    (
        TopicTag::Location,
        &["location", "venue", "shoot", "goa", "mumbai", "place"],
    ),
    (
        TopicTag::Talent,
        &["talent", "team", "crew", "photographer", "model", "availability"],
    ),
    (
        TopicTag::Equipment,
        &["equipment", "camera", "gear", "rental", "setup"],
    ),
    (
        TopicTag::ClientCommunication,
        &["client", "approval", "feedback", "review", "meeting"],
    ),
];

/// Truncate `text` to the word budget and tag it by keyword presence.
///
/// Word splitting is single-space naive; truncation makes no attempt at
/// sentence boundaries. Tag detection always scans the full input, never
/// the truncated summary.
pub fn summarize(text: &str) -> SummaryResult {
    let words: Vec<&str> = text.split(' ').collect();
    let summary = if words.len() > SUMMARY_WORD_LIMIT {
        let mut truncated = words[..SUMMARY_WORD_LIMIT].join(" ");
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        text.to_string()
    };

    let lowered = text.to_lowercase();
    let tags: Vec<TopicTag> = KEYWORD_RULES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(tag, _)| *tag)
        .collect();

    debug!(tags = tags.len(), "summary generated");

    SummaryResult { summary, tags }
}
