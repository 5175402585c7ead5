//! Speech session lifecycle management
//!
//! This module provides the two session resources wrapping the speech
//! service:
//! - `TranscriptionSession`: continuous multi-speaker transcription with
//!   interim/final result callbacks
//! - `TranslationSession`: one-shot record-until-silence translation with a
//!   per-target-locale completion callback
//!
//! Both expose start/stop over a single exclusively-owned connection handle.

mod connection;
mod credentials;
mod transcription;
mod translation;

pub use credentials::SessionCredentials;
pub use transcription::{TranscriptCallback, TranscriptionConfig, TranscriptionSession};
pub use translation::{TranslationCallback, TranslationConfig, TranslationSession};
