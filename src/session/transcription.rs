use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use super::connection::ActiveConnection;
use super::credentials::SessionCredentials;
use crate::error::SessionError;
use crate::speech::{
    AudioInput, ControlRequest, RecognitionConfig, SpeechConnection, SpeechEvent, SpeechProvider,
    TranscriptionResult,
};

/// Callback invoked with interim and final transcription results.
pub type TranscriptCallback = Arc<dyn Fn(TranscriptionResult) + Send + Sync>;

/// Configuration for a transcription session.
#[derive(Debug, Clone)]
pub struct TranscriptionConfig {
    /// Locale the recognizer listens for. Default: "en-US".
    pub source_locale: String,

    /// Audio input requested from the host. Default: the default microphone.
    pub audio: AudioInput,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            source_locale: "en-US".to_string(),
            audio: AudioInput::DefaultMicrophone,
        }
    }
}

/// A continuous, speaker-diarized transcription session.
///
/// Owns at most one live connection to the speech service. `start()` issues
/// the connection request and returns; recognition results stream into the
/// caller's callbacks until `stop()` releases the connection. Failures to
/// begin streaming after `start()` has returned are logged, not surfaced.
pub struct TranscriptionSession {
    config: TranscriptionConfig,

    credentials: SessionCredentials,

    provider: Arc<dyn SpeechProvider>,

    /// Invoked with each partial hypothesis (no punctuation, speaker may be
    /// unresolved).
    on_interim: TranscriptCallback,

    /// Invoked with each finalized segment (punctuation + speaker label).
    on_final: TranscriptCallback,

    /// The single live connection, if any.
    connection: Arc<Mutex<Option<ActiveConnection>>>,
}

impl TranscriptionSession {
    pub fn new(
        config: TranscriptionConfig,
        credentials: SessionCredentials,
        provider: Arc<dyn SpeechProvider>,
        on_interim: TranscriptCallback,
        on_final: TranscriptCallback,
    ) -> Self {
        Self {
            config,
            credentials,
            provider,
            on_interim,
            on_final,
            connection: Arc::new(Mutex::new(None)),
        }
    }

    /// Start continuous transcription.
    ///
    /// Returns once the connection request has been issued; streaming begins
    /// when the service acknowledges. Fails without issuing a request when
    /// credentials are missing or a connection is already pending or active.
    pub async fn start(&self) -> Result<(), SessionError> {
        let (region, token) = self.credentials.require()?;

        // Hold the slot lock across the open so overlapping starts serialize
        // and the loser observes the stored handle.
        let mut connection = self.connection.lock().await;
        if connection.is_some() {
            warn!("Transcription already started");
            return Err(SessionError::AlreadyActive);
        }

        info!(
            "Starting transcription (locale={})",
            self.config.source_locale
        );

        let recognition = RecognitionConfig {
            region: region.to_string(),
            token: token.to_string(),
            locale: self.config.source_locale.clone(),
            audio: self.config.audio.clone(),
        };

        let SpeechConnection { mut events, control } =
            self.provider.start_transcription(&recognition).await?;

        // Forward service events to the caller's callbacks until the stream
        // ends or stop() aborts the task.
        let on_interim = Arc::clone(&self.on_interim);
        let on_final = Arc::clone(&self.on_final);

        let forward_task = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    SpeechEvent::Transcribing { text, speaker } => {
                        on_interim(TranscriptionResult {
                            text,
                            speaker,
                            partial: true,
                            timestamp: Utc::now(),
                        });
                    }
                    SpeechEvent::Transcribed { text, speaker } => {
                        on_final(TranscriptionResult {
                            text,
                            speaker,
                            partial: false,
                            timestamp: Utc::now(),
                        });
                    }
                    SpeechEvent::Canceled { message } => {
                        error!("Error starting transcription: {}", message);
                    }
                    SpeechEvent::Translated { .. } => {
                        warn!("Ignoring translation event on a transcription connection");
                    }
                }
            }

            info!("Transcription event stream ended");
        });

        *connection = Some(ActiveConnection {
            control,
            forward_task,
        });

        Ok(())
    }

    /// Stop transcription and release the connection.
    ///
    /// No-op when no connection is stored. The stop request is best-effort;
    /// service-side teardown completes after this returns, but no further
    /// events reach the callbacks.
    pub async fn stop(&self) {
        let connection = self.connection.lock().await.take();
        let Some(connection) = connection else {
            return;
        };

        info!("Stopping transcription");
        connection.release(ControlRequest::Stop).await;
    }

    /// Whether a connection is currently pending or active.
    pub async fn is_active(&self) -> bool {
        self.connection.lock().await.is_some()
    }
}
