// Integration tests for the transcription session lifecycle
//
// These tests drive a TranscriptionSession against a channel-backed stub
// provider and verify the callback and connection-handle contracts.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use voxbridge::error::SessionError;
use voxbridge::session::{TranscriptCallback, TranscriptionConfig, TranscriptionSession};
use voxbridge::speech::{
    ControlRequest, RecognitionConfig, SpeechConnection, SpeechEvent, SpeechProvider,
    TranscriptionResult, TranslationRequest,
};
use voxbridge::SessionCredentials;

/// Stub provider handing out pre-built channel-backed connections.
struct StubProvider {
    connections: Mutex<VecDeque<SpeechConnection>>,
    starts: AtomicUsize,
}

impl StubProvider {
    fn new() -> Self {
        Self {
            connections: Mutex::new(VecDeque::new()),
            starts: AtomicUsize::new(0),
        }
    }

    fn push(&self, connection: SpeechConnection) {
        self.connections.lock().unwrap().push_back(connection);
    }

    fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SpeechProvider for StubProvider {
    async fn start_transcription(
        &self,
        _config: &RecognitionConfig,
    ) -> Result<SpeechConnection, SessionError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .connections
            .lock()
            .unwrap()
            .pop_front()
            .expect("no stub connection queued"))
    }

    async fn start_translation(
        &self,
        _request: &TranslationRequest,
    ) -> Result<SpeechConnection, SessionError> {
        unimplemented!("transcription tests never start a translation")
    }
}

/// Build a connection plus the test's ends of its channels.
fn stub_connection() -> (
    SpeechConnection,
    mpsc::Sender<SpeechEvent>,
    mpsc::Receiver<ControlRequest>,
) {
    let (event_tx, events) = mpsc::channel(16);
    let (control, control_rx) = mpsc::channel(4);
    (SpeechConnection { events, control }, event_tx, control_rx)
}

/// Callback that forwards results into a channel the test can await.
fn capture() -> (
    TranscriptCallback,
    mpsc::UnboundedReceiver<TranscriptionResult>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let callback: TranscriptCallback = Arc::new(move |result| {
        let _ = tx.send(result);
    });
    (callback, rx)
}

fn session_with(
    provider: Arc<StubProvider>,
    credentials: SessionCredentials,
) -> (
    TranscriptionSession,
    mpsc::UnboundedReceiver<TranscriptionResult>,
    mpsc::UnboundedReceiver<TranscriptionResult>,
) {
    let (on_interim, interim_rx) = capture();
    let (on_final, final_rx) = capture();

    let session = TranscriptionSession::new(
        TranscriptionConfig::default(),
        credentials,
        provider,
        on_interim,
        on_final,
    );

    (session, interim_rx, final_rx)
}

#[tokio::test]
async fn test_start_without_token_fails_and_issues_no_request() -> Result<()> {
    let provider = Arc::new(StubProvider::new());

    // Token entirely absent
    let credentials = SessionCredentials {
        region: Some("westeurope".to_string()),
        token: None,
    };
    let (session, _interim_rx, _final_rx) = session_with(Arc::clone(&provider), credentials);

    let err = session.start().await.unwrap_err();
    assert!(matches!(err, SessionError::MissingCredentials));
    assert_eq!(provider.starts(), 0, "No connection request should be issued");
    assert!(!session.is_active().await);

    // Token present but empty
    let credentials = SessionCredentials {
        region: Some("westeurope".to_string()),
        token: Some(String::new()),
    };
    let (session, _interim_rx, _final_rx) = session_with(Arc::clone(&provider), credentials);

    let err = session.start().await.unwrap_err();
    assert!(matches!(err, SessionError::MissingCredentials));
    assert_eq!(provider.starts(), 0);

    Ok(())
}

#[tokio::test]
async fn test_interim_event_reaches_callback_before_final() -> Result<()> {
    let provider = Arc::new(StubProvider::new());
    let (connection, event_tx, _control_rx) = stub_connection();
    provider.push(connection);

    let (session, mut interim_rx, mut final_rx) = session_with(
        Arc::clone(&provider),
        SessionCredentials::new("westeurope", "token-123"),
    );

    session.start().await?;
    assert!(session.is_active().await);

    // Interim hypothesis, then the finalized segment for the same utterance
    event_tx
        .send(SpeechEvent::Transcribing {
            text: "hello wor".to_string(),
            speaker: None,
        })
        .await?;
    event_tx
        .send(SpeechEvent::Transcribed {
            text: "Hello world.".to_string(),
            speaker: Some("Guest-1".to_string()),
        })
        .await?;

    let final_result = final_rx.recv().await.expect("final callback never fired");
    assert_eq!(final_result.text, "Hello world.");
    assert_eq!(final_result.speaker.as_deref(), Some("Guest-1"));
    assert!(!final_result.partial);

    // Events are forwarded in order, so the interim result must already be
    // waiting once the final one has arrived.
    let interim_result = interim_rx
        .try_recv()
        .expect("interim callback did not fire before final");
    assert_eq!(interim_result.text, "hello wor");
    assert_eq!(interim_result.speaker, None);
    assert!(interim_result.partial);

    assert!(
        interim_rx.try_recv().is_err(),
        "Interim callback should fire exactly once per event"
    );

    Ok(())
}

#[tokio::test]
async fn test_stop_clears_connection_and_halts_events() -> Result<()> {
    let provider = Arc::new(StubProvider::new());
    let (connection, event_tx, mut control_rx) = stub_connection();
    provider.push(connection);

    let (session, mut interim_rx, _final_rx) = session_with(
        Arc::clone(&provider),
        SessionCredentials::new("westeurope", "token-123"),
    );

    session.start().await?;

    event_tx
        .send(SpeechEvent::Transcribing {
            text: "still here".to_string(),
            speaker: None,
        })
        .await?;
    interim_rx.recv().await.expect("interim callback never fired");

    session.stop().await;

    assert!(!session.is_active().await, "Handle should be cleared");
    assert_eq!(
        control_rx.recv().await,
        Some(ControlRequest::Stop),
        "Provider should see a stop request"
    );

    // Events sent after stop must never reach the callbacks
    event_tx
        .send(SpeechEvent::Transcribing {
            text: "too late".to_string(),
            speaker: None,
        })
        .await?;

    let late = tokio::time::timeout(Duration::from_millis(100), interim_rx.recv()).await;
    assert!(late.is_err(), "No events should be delivered after stop");

    Ok(())
}

#[tokio::test]
async fn test_second_start_fails_while_active() -> Result<()> {
    let provider = Arc::new(StubProvider::new());
    let (connection, _event_tx, _control_rx) = stub_connection();
    provider.push(connection);

    let (session, _interim_rx, _final_rx) = session_with(
        Arc::clone(&provider),
        SessionCredentials::new("westeurope", "token-123"),
    );

    session.start().await?;

    let err = session.start().await.unwrap_err();
    assert!(matches!(err, SessionError::AlreadyActive));
    assert_eq!(
        provider.starts(),
        1,
        "The second start must not open another connection"
    );

    Ok(())
}

#[tokio::test]
async fn test_stop_without_connection_is_noop() -> Result<()> {
    let provider = Arc::new(StubProvider::new());
    let (session, _interim_rx, _final_rx) = session_with(
        Arc::clone(&provider),
        SessionCredentials::new("westeurope", "token-123"),
    );

    // Never started; stop must neither fail nor touch the provider
    session.stop().await;
    session.stop().await;

    assert!(!session.is_active().await);
    assert_eq!(provider.starts(), 0);

    Ok(())
}

#[test]
fn test_config_defaults() {
    let config = TranscriptionConfig::default();
    assert_eq!(config.source_locale, "en-US");
}
