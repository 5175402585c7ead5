use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use super::connection::ActiveConnection;
use super::credentials::SessionCredentials;
use crate::error::SessionError;
use crate::speech::{
    AudioInput, ControlRequest, RecognitionReason, SpeechConnection, SpeechEvent, SpeechProvider,
    TranslationRequest, TranslationResult,
};

/// Callback invoked once per target locale when a translation cycle completes.
pub type TranslationCallback = Arc<dyn Fn(TranslationResult) + Send + Sync>;

/// Configuration for a translation session.
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    /// Locale of the spoken utterance. Default: "en-US".
    pub source_locale: String,

    /// Locales to translate into. Default: ["es-ES"].
    pub target_locales: Vec<String>,

    /// Audio input requested from the host. Default: the default microphone.
    pub audio: AudioInput,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_locale: "en-US".to_string(),
            target_locales: vec!["es-ES".to_string()],
            audio: AudioInput::DefaultMicrophone,
        }
    }
}

/// A one-shot speech translation session.
///
/// `start()` opens a single recognize-once cycle: the service captures one
/// utterance, ends capture on its own silence detection, and translates into
/// every configured target locale. The completion callback fires once per
/// target locale; the connection then releases itself whatever the outcome,
/// so `stop()` is only needed to cancel an in-flight cycle.
pub struct TranslationSession {
    config: TranslationConfig,

    credentials: SessionCredentials,

    provider: Arc<dyn SpeechProvider>,

    /// Invoked with each target locale's translated text.
    on_translation: TranslationCallback,

    /// The single live connection, if any. Shared with the forwarding task so
    /// the completed cycle can clear it.
    connection: Arc<Mutex<Option<ActiveConnection>>>,
}

impl TranslationSession {
    pub fn new(
        config: TranslationConfig,
        credentials: SessionCredentials,
        provider: Arc<dyn SpeechProvider>,
        on_translation: TranslationCallback,
    ) -> Self {
        Self {
            config,
            credentials,
            provider,
            on_translation,
            connection: Arc::new(Mutex::new(None)),
        }
    }

    /// Start a one-shot translation cycle.
    ///
    /// Returns once the connection request has been issued. Fails without
    /// issuing a request when credentials are missing or a cycle is already
    /// in flight.
    pub async fn start(&self) -> Result<(), SessionError> {
        let (region, token) = self.credentials.require()?;

        let mut connection = self.connection.lock().await;
        if connection.is_some() {
            warn!("Translation already started");
            return Err(SessionError::AlreadyActive);
        }

        info!(
            "Starting translation (from={}, to={})",
            self.config.source_locale,
            self.config.target_locales.join(",")
        );

        let request = TranslationRequest {
            region: region.to_string(),
            token: token.to_string(),
            locale: self.config.source_locale.clone(),
            targets: self.config.target_locales.clone(),
            audio: self.config.audio.clone(),
        };

        let SpeechConnection { mut events, control } =
            self.provider.start_translation(&request).await?;

        let on_translation = Arc::clone(&self.on_translation);
        let targets = self.config.target_locales.clone();
        let slot = Arc::clone(&self.connection);

        let forward_task = tokio::spawn(async move {
            // One event ends the cycle either way.
            match events.recv().await {
                Some(SpeechEvent::Translated {
                    reason,
                    translations,
                }) => {
                    if reason == RecognitionReason::TranslatedSpeech {
                        let timestamp = Utc::now();
                        for target in &targets {
                            let text = translations.get(target).cloned().unwrap_or_default();
                            info!("{}: {}", target, text);
                            on_translation(TranslationResult {
                                locale: target.clone(),
                                text,
                                timestamp,
                            });
                        }
                    } else {
                        warn!(
                            "Recognition ended without translated speech (reason={:?})",
                            reason
                        );
                    }
                }
                Some(SpeechEvent::Canceled { message }) => {
                    error!("Error translating: {}", message);
                }
                Some(other) => {
                    warn!("Unexpected event on translation connection: {:?}", other);
                }
                None => {
                    warn!("Translation connection closed before a result arrived");
                }
            }

            // The cycle is one-shot: release the connection regardless of
            // the outcome.
            slot.lock().await.take();
        });

        *connection = Some(ActiveConnection {
            control,
            forward_task,
        });

        Ok(())
    }

    /// Cancel an in-flight cycle and release the connection.
    ///
    /// No-op when no connection is stored, including after the cycle has
    /// completed and released itself.
    pub async fn stop(&self) {
        let connection = self.connection.lock().await.take();
        let Some(connection) = connection else {
            return;
        };

        info!("Stopping translation");
        connection.release(ControlRequest::Cancel).await;
    }

    /// Whether a cycle is currently pending or in flight.
    pub async fn is_active(&self) -> bool {
        self.connection.lock().await.is_some()
    }
}
