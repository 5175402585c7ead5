//! Boundary to the cloud speech service.
//!
//! Sessions talk to the service through the [`SpeechProvider`] trait. A
//! connection delivers recognition events over a channel and accepts
//! stop/cancel control requests; [`WsSpeechProvider`] is the concrete
//! WebSocket-backed implementation.

pub mod events;
pub mod provider;
pub mod ws;

pub use events::{RecognitionReason, SpeechEvent, TranscriptionResult, TranslationResult};
pub use provider::{
    AudioInput, ControlRequest, RecognitionConfig, SpeechConnection, SpeechProvider,
    TranslationRequest,
};
pub use ws::WsSpeechProvider;
