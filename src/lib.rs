pub mod config;
pub mod error;
pub mod http;
pub mod language;
pub mod session;
pub mod speech;

pub use config::Config;
pub use error::{LanguageError, SessionError};
pub use http::{create_router, AppState};
pub use language::{lookup, LanguageEntry};
pub use session::{
    SessionCredentials, TranscriptionConfig, TranscriptionSession, TranslationConfig,
    TranslationSession,
};
pub use speech::{
    AudioInput, RecognitionReason, SpeechConnection, SpeechEvent, SpeechProvider,
    TranscriptionResult, TranslationResult, WsSpeechProvider,
};
