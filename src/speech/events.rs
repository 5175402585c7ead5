use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a recognition cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionReason {
    /// Speech was recognized in the source language.
    RecognizedSpeech,
    /// Speech was recognized and translated into every target locale.
    TranslatedSpeech,
    /// The utterance could not be matched to speech.
    NoMatch,
    /// The cycle was canceled by the service or the caller.
    Canceled,
}

/// Event delivered by the speech service on an open connection.
///
/// This is also the wire shape the WebSocket provider deserializes from the
/// service's JSON messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpeechEvent {
    /// Interim hypothesis: no punctuation, speaker may not be attributed yet.
    Transcribing {
        text: String,
        speaker: Option<String>,
    },
    /// Finalized segment with punctuation and speaker label.
    Transcribed {
        text: String,
        speaker: Option<String>,
    },
    /// A one-shot translation cycle completed.
    Translated {
        reason: RecognitionReason,
        /// Translated text keyed by target locale code.
        translations: HashMap<String, String>,
    },
    /// The service canceled the connection, including failures to begin
    /// streaming after the start request was issued.
    Canceled { message: String },
}

/// A transcription hypothesis or finalized segment, as handed to callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Recognized text. Interim results carry no punctuation.
    pub text: String,
    /// Speaker label, attached once the service has finalized the segment.
    pub speaker: Option<String>,
    /// Whether this is a partial hypothesis rather than a finalized segment.
    pub partial: bool,
    /// When this result was received.
    pub timestamp: DateTime<Utc>,
}

/// Translated text for one target locale, as handed to callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Target locale this text was translated into.
    pub locale: String,
    /// Translated text.
    pub text: String,
    /// When the translation cycle completed.
    pub timestamp: DateTime<Utc>,
}
