use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::RwLock;

use crate::config::SpeechConfig;
use crate::session::{TranscriptionSession, TranslationSession};
use crate::speech::{SpeechProvider, TranscriptionResult, TranslationResult};

/// A registered transcription session plus the buffer its callbacks fill.
pub struct TranscriptionEntry {
    pub session: Arc<TranscriptionSession>,
    pub transcript: Arc<Mutex<Vec<TranscriptionResult>>>,
}

/// A registered translation session plus the buffer its callback fills.
pub struct TranslationEntry {
    pub session: Arc<TranslationSession>,
    pub results: Arc<Mutex<Vec<TranslationResult>>>,
}

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Boundary to the speech service.
    pub provider: Arc<dyn SpeechProvider>,

    /// Locale defaults applied when a start request omits languages.
    pub defaults: SpeechConfig,

    /// Active transcription sessions (session_id → entry)
    pub transcriptions: Arc<RwLock<HashMap<String, TranscriptionEntry>>>,

    /// Translation sessions, kept after completion so results stay queryable
    pub translations: Arc<RwLock<HashMap<String, TranslationEntry>>>,
}

impl AppState {
    pub fn new(provider: Arc<dyn SpeechProvider>, defaults: SpeechConfig) -> Self {
        Self {
            provider,
            defaults,
            transcriptions: Arc::new(RwLock::new(HashMap::new())),
            translations: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
