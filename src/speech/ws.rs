use futures::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tracing::{error, info, warn};

use super::events::SpeechEvent;
use super::provider::{
    ControlRequest, RecognitionConfig, SpeechConnection, SpeechProvider, TranslationRequest,
};
use crate::error::SessionError;

/// Events buffered per connection before backpressure applies.
const EVENT_BUFFER: usize = 64;

/// Requests sent to the service over the socket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ServiceRequest<'a> {
    /// Issued once on a fresh connection.
    Start {
        mode: &'static str,
        audio: &'a str,
    },
    Stop,
    Cancel,
}

/// WebSocket-backed speech service provider.
///
/// Opens one socket per connection against the region-derived endpoint,
/// authenticated with the caller's bearer token. Service events are JSON
/// messages deserialized straight into [`SpeechEvent`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WsSpeechProvider;

impl WsSpeechProvider {
    pub fn new() -> Self {
        Self
    }

    /// Continuous diarized transcription endpoint for a region.
    fn transcription_url(region: &str, locale: &str) -> String {
        format!(
            "wss://{region}.stt.speech.microsoft.com/speech/recognition/conversation/cognitiveservices/v1?language={locale}"
        )
    }

    /// One-shot speech translation endpoint for a region.
    fn translation_url(region: &str, locale: &str, targets: &[String]) -> String {
        format!(
            "wss://{region}.s2s.speech.microsoft.com/speech/translation/cognitiveservices/v1?from={locale}&to={}",
            targets.join(",")
        )
    }

    /// Build the handshake request with bearer-token auth.
    fn build_request(url: &str, token: &str) -> Result<Request, SessionError> {
        let mut request = url
            .into_client_request()
            .map_err(|e| SessionError::Configuration(e.to_string()))?;

        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| SessionError::Configuration(e.to_string()))?;
        request.headers_mut().insert(AUTHORIZATION, bearer);

        Ok(request)
    }

    /// Issue the connection request and hand back the channel pair.
    ///
    /// The connect and handshake run on a spawned task; a failure there is
    /// logged and surfaced as a `Canceled` event, never returned.
    fn open(request: Request, start: ServiceRequest<'_>) -> Result<SpeechConnection, SessionError> {
        let start_payload =
            serde_json::to_string(&start).map_err(|e| SessionError::Configuration(e.to_string()))?;

        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        let (control_tx, control_rx) = mpsc::channel(4);

        tokio::spawn(run_connection(request, start_payload, event_tx, control_rx));

        Ok(SpeechConnection {
            events: event_rx,
            control: control_tx,
        })
    }
}

#[async_trait::async_trait]
impl SpeechProvider for WsSpeechProvider {
    async fn start_transcription(
        &self,
        config: &RecognitionConfig,
    ) -> Result<SpeechConnection, SessionError> {
        let url = Self::transcription_url(&config.region, &config.locale);
        let request = Self::build_request(&url, &config.token)?;

        info!("Opening transcription connection (locale={})", config.locale);

        Self::open(
            request,
            ServiceRequest::Start {
                mode: "conversation",
                audio: config.audio.source_name(),
            },
        )
    }

    async fn start_translation(
        &self,
        request: &TranslationRequest,
    ) -> Result<SpeechConnection, SessionError> {
        if request.targets.is_empty() {
            return Err(SessionError::Configuration(
                "at least one target locale is required".to_string(),
            ));
        }

        let url = Self::translation_url(&request.region, &request.locale, &request.targets);
        let handshake = Self::build_request(&url, &request.token)?;

        info!(
            "Opening translation connection (from={}, to={})",
            request.locale,
            request.targets.join(",")
        );

        Self::open(
            handshake,
            ServiceRequest::Start {
                mode: "translation",
                audio: request.audio.source_name(),
            },
        )
    }
}

/// Connect, issue the start request, then pump service events and control
/// requests until either side closes.
async fn run_connection(
    request: Request,
    start_payload: String,
    event_tx: mpsc::Sender<SpeechEvent>,
    mut control_rx: mpsc::Receiver<ControlRequest>,
) {
    let (stream, _) = match connect_async(request).await {
        Ok(ok) => ok,
        Err(e) => {
            error!("Error starting speech connection: {}", e);
            let _ = event_tx
                .send(SpeechEvent::Canceled {
                    message: e.to_string(),
                })
                .await;
            return;
        }
    };

    let (mut sink, mut source) = stream.split();

    if let Err(e) = sink.send(Message::Text(start_payload)).await {
        error!("Error issuing start request: {}", e);
        let _ = event_tx
            .send(SpeechEvent::Canceled {
                message: e.to_string(),
            })
            .await;
        return;
    }

    info!("Speech service connection open");

    loop {
        tokio::select! {
            request = control_rx.recv() => {
                let outbound = match request {
                    Some(ControlRequest::Stop) => ServiceRequest::Stop,
                    Some(ControlRequest::Cancel) => ServiceRequest::Cancel,
                    // Session released its handle; close our side.
                    None => {
                        let _ = sink.send(Message::Close(None)).await;
                        break;
                    }
                };

                let payload = match serde_json::to_string(&outbound) {
                    Ok(payload) => payload,
                    Err(e) => {
                        error!("Failed to encode control request: {}", e);
                        continue;
                    }
                };

                if let Err(e) = sink.send(Message::Text(payload)).await {
                    warn!("Failed to send control request: {}", e);
                    break;
                }
            }

            message = source.next() => {
                match message {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<SpeechEvent>(&text) {
                            Ok(event) => {
                                if event_tx.send(event).await.is_err() {
                                    // Receiver dropped; nobody is listening.
                                    break;
                                }
                            }
                            Err(e) => {
                                warn!("Unrecognized speech service message: {}", e);
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {} // ping/pong handled by the transport
                    Some(Err(e)) => {
                        error!("Speech service stream error: {}", e);
                        break;
                    }
                }
            }
        }
    }

    info!("Speech service connection closed");
}
