//! Sift turns raw meeting notes into a bounded summary, topic tags, and an
//! action-item checklist.
//!
//! Everything is rule-driven and deterministic: a fixed keyword table for
//! tagging, a fixed set of trigger phrases and list markers for task
//! extraction. No model calls, no I/O, no state between invocations. The
//! transport layer consumes the [`service::NoteIntelligence`] trait;
//! [`delay::SimulatedLatency`] optionally wraps it to emulate processing
//! time without touching results.

pub mod consts;
pub mod delay;
pub mod engine;
pub mod service;
