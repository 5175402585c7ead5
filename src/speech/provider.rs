use tokio::sync::mpsc;

use super::events::SpeechEvent;
use crate::error::SessionError;

/// Audio input requested from the host environment.
///
/// Capture itself is a service/host primitive; sessions only describe which
/// input to use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AudioInput {
    /// The host's default microphone.
    #[default]
    DefaultMicrophone,
    /// A named capture device.
    Device(String),
}

impl AudioInput {
    /// Name sent to the service in the start request.
    pub fn source_name(&self) -> &str {
        match self {
            AudioInput::DefaultMicrophone => "microphone",
            AudioInput::Device(name) => name,
        }
    }
}

/// Configuration for a continuous transcription connection.
#[derive(Debug, Clone)]
pub struct RecognitionConfig {
    /// Service region, e.g. "westeurope".
    pub region: String,
    /// Short-lived authorization token.
    pub token: String,
    /// Locale the recognizer should listen for.
    pub locale: String,
    /// Audio input to capture from.
    pub audio: AudioInput,
}

/// Configuration for a one-shot translation cycle.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub region: String,
    pub token: String,
    /// Locale of the spoken utterance.
    pub locale: String,
    /// Locales to translate the utterance into.
    pub targets: Vec<String>,
    pub audio: AudioInput,
}

/// Control requests a session may issue on an open connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    /// Stop a continuous transcription run.
    Stop,
    /// Cancel an in-flight one-shot recognition.
    Cancel,
}

/// An open connection to the speech service.
///
/// Events arrive on `events` until the service closes the stream. Control
/// requests are forwarded asynchronously; the provider winds the connection
/// down on its own schedule after a stop or cancel.
#[derive(Debug)]
pub struct SpeechConnection {
    pub events: mpsc::Receiver<SpeechEvent>,
    pub control: mpsc::Sender<ControlRequest>,
}

/// Seam to the cloud speech service.
///
/// `start_*` returns once the connection request has been issued; a failure to
/// actually begin streaming arrives later as a [`SpeechEvent::Canceled`] on the
/// event channel. Errors returned here are configuration problems that prevent
/// a connection attempt altogether.
#[async_trait::async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Open a continuous, speaker-diarized transcription connection.
    async fn start_transcription(
        &self,
        config: &RecognitionConfig,
    ) -> Result<SpeechConnection, SessionError>;

    /// Open a single-utterance translation cycle. Capture ends on the
    /// service's own silence detection.
    async fn start_translation(
        &self,
        request: &TranslationRequest,
    ) -> Result<SpeechConnection, SessionError>;
}
