use super::state::{AppState, TranscriptionEntry, TranslationEntry};
use crate::error::SessionError;
use crate::language;
use crate::session::{
    SessionCredentials, TranscriptCallback, TranscriptionConfig, TranscriptionSession,
    TranslationCallback, TranslationConfig, TranslationSession,
};
use crate::speech::{TranscriptionResult, TranslationResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StartTranscriptionRequest {
    /// Optional session ID (if not provided, generate UUID)
    pub session_id: Option<String>,

    /// Speech service region
    pub region: Option<String>,

    /// Speech service authorization token
    pub token: Option<String>,

    /// Language key from the supported-language table (default from config)
    pub source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StartTranslationRequest {
    pub session_id: Option<String>,
    pub region: Option<String>,
    pub token: Option<String>,
    pub source_language: Option<String>,
    /// Language keys to translate into (default from config)
    pub target_languages: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    pub session_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StopTranscriptionResponse {
    pub session_id: String,
    pub status: String,
    pub transcript: Vec<TranscriptionResult>,
}

#[derive(Debug, Serialize)]
pub struct StopTranslationResponse {
    pub session_id: String,
    pub status: String,
    pub results: Vec<TranslationResult>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

fn session_error_response(e: SessionError) -> Response {
    let status = match e {
        SessionError::MissingCredentials => StatusCode::BAD_REQUEST,
        SessionError::AlreadyActive => StatusCode::CONFLICT,
        SessionError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, e.to_string())
}

/// Resolve a language key against the reference table, falling back to the
/// configured default key.
fn resolve_locale(key: Option<&str>, default_key: &str) -> Result<String, Response> {
    let key = key.unwrap_or(default_key);
    match language::locale_code(key) {
        Ok(locale) => Ok(locale.to_string()),
        Err(e) => Err(error_response(StatusCode::BAD_REQUEST, e.to_string())),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /sessions/transcription/start
/// Start a new continuous transcription session
pub async fn start_transcription(
    State(state): State<AppState>,
    Json(req): Json<StartTranscriptionRequest>,
) -> impl IntoResponse {
    let session_id = req
        .session_id
        .unwrap_or_else(|| format!("session-{}", uuid::Uuid::new_v4()));

    info!("Starting transcription session: {}", session_id);

    // Check if already running
    {
        let sessions = state.transcriptions.read().await;
        if sessions.contains_key(&session_id) {
            return error_response(
                StatusCode::CONFLICT,
                format!("Session {} is already transcribing", session_id),
            );
        }
    }

    let source_locale = match resolve_locale(
        req.source_language.as_deref(),
        &state.defaults.source_language,
    ) {
        Ok(locale) => locale,
        Err(response) => return response,
    };

    let credentials = SessionCredentials {
        region: req.region,
        token: req.token,
    };

    // The HTTP layer owns the transcript buffer; the session callbacks
    // append to it.
    let transcript = Arc::new(Mutex::new(Vec::new()));

    let interim_buf = Arc::clone(&transcript);
    let on_interim: TranscriptCallback = Arc::new(move |result| {
        interim_buf.lock().push(result);
    });

    let final_buf = Arc::clone(&transcript);
    let on_final: TranscriptCallback = Arc::new(move |result| {
        final_buf.lock().push(result);
    });

    let session = Arc::new(TranscriptionSession::new(
        TranscriptionConfig {
            source_locale,
            ..TranscriptionConfig::default()
        },
        credentials,
        Arc::clone(&state.provider),
        on_interim,
        on_final,
    ));

    if let Err(e) = session.start().await {
        error!("Failed to start transcription: {}", e);
        return session_error_response(e);
    }

    // Store session
    {
        let mut sessions = state.transcriptions.write().await;
        sessions.insert(
            session_id.clone(),
            TranscriptionEntry {
                session,
                transcript,
            },
        );
    }

    info!("Transcription started for session: {}", session_id);

    (
        StatusCode::OK,
        Json(StartSessionResponse {
            session_id: session_id.clone(),
            status: "transcribing".to_string(),
            message: format!("Transcription started for session {}", session_id),
        }),
    )
        .into_response()
}

/// POST /sessions/transcription/stop/:session_id
/// Stop a transcription session and return its accumulated transcript
pub async fn stop_transcription(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    info!("Stopping transcription session: {}", session_id);

    let entry = {
        let mut sessions = state.transcriptions.write().await;
        sessions.remove(&session_id)
    };

    match entry {
        Some(entry) => {
            entry.session.stop().await;
            let transcript = entry.transcript.lock().clone();

            (
                StatusCode::OK,
                Json(StopTranscriptionResponse {
                    session_id,
                    status: "stopped".to_string(),
                    transcript,
                }),
            )
                .into_response()
        }
        None => {
            error!("Session {} not found", session_id);
            error_response(
                StatusCode::NOT_FOUND,
                format!("Session {} not found", session_id),
            )
        }
    }
}

/// GET /sessions/transcription/:session_id/transcript
/// Get the transcript accumulated so far
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let sessions = state.transcriptions.read().await;

    match sessions.get(&session_id) {
        Some(entry) => {
            let transcript: Vec<TranscriptionResult> = entry.transcript.lock().clone();
            (StatusCode::OK, Json(transcript)).into_response()
        }
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("Session {} not found", session_id),
        ),
    }
}

/// POST /sessions/translation/start
/// Start a one-shot translation session
pub async fn start_translation(
    State(state): State<AppState>,
    Json(req): Json<StartTranslationRequest>,
) -> impl IntoResponse {
    let session_id = req
        .session_id
        .unwrap_or_else(|| format!("session-{}", uuid::Uuid::new_v4()));

    info!("Starting translation session: {}", session_id);

    {
        let sessions = state.translations.read().await;
        if sessions.contains_key(&session_id) {
            return error_response(
                StatusCode::CONFLICT,
                format!("Session {} already exists", session_id),
            );
        }
    }

    let source_locale = match resolve_locale(
        req.source_language.as_deref(),
        &state.defaults.source_language,
    ) {
        Ok(locale) => locale,
        Err(response) => return response,
    };

    let target_keys = req
        .target_languages
        .unwrap_or_else(|| state.defaults.target_languages.clone());

    let mut target_locales = Vec::with_capacity(target_keys.len());
    for key in &target_keys {
        match language::locale_code(key) {
            Ok(locale) => target_locales.push(locale.to_string()),
            Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
        }
    }

    let credentials = SessionCredentials {
        region: req.region,
        token: req.token,
    };

    let results = Arc::new(Mutex::new(Vec::new()));

    let result_buf = Arc::clone(&results);
    let on_translation: TranslationCallback = Arc::new(move |result| {
        result_buf.lock().push(result);
    });

    let session = Arc::new(TranslationSession::new(
        TranslationConfig {
            source_locale,
            target_locales,
            ..TranslationConfig::default()
        },
        credentials,
        Arc::clone(&state.provider),
        on_translation,
    ));

    if let Err(e) = session.start().await {
        error!("Failed to start translation: {}", e);
        return session_error_response(e);
    }

    {
        let mut sessions = state.translations.write().await;
        sessions.insert(session_id.clone(), TranslationEntry { session, results });
    }

    info!("Translation started for session: {}", session_id);

    (
        StatusCode::OK,
        Json(StartSessionResponse {
            session_id: session_id.clone(),
            status: "translating".to_string(),
            message: format!("Translation started for session {}", session_id),
        }),
    )
        .into_response()
}

/// POST /sessions/translation/stop/:session_id
/// Cancel an in-flight translation (no-op if the cycle already completed)
/// and return whatever results arrived
pub async fn stop_translation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    info!("Stopping translation session: {}", session_id);

    let entry = {
        let mut sessions = state.translations.write().await;
        sessions.remove(&session_id)
    };

    match entry {
        Some(entry) => {
            entry.session.stop().await;
            let results = entry.results.lock().clone();

            (
                StatusCode::OK,
                Json(StopTranslationResponse {
                    session_id,
                    status: "stopped".to_string(),
                    results,
                }),
            )
                .into_response()
        }
        None => {
            error!("Session {} not found", session_id);
            error_response(
                StatusCode::NOT_FOUND,
                format!("Session {} not found", session_id),
            )
        }
    }
}

/// GET /sessions/translation/:session_id/results
/// Get the per-locale translation results received so far
pub async fn get_translation_results(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let sessions = state.translations.read().await;

    match sessions.get(&session_id) {
        Some(entry) => {
            let results: Vec<TranslationResult> = entry.results.lock().clone();
            (StatusCode::OK, Json(results)).into_response()
        }
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("Session {} not found", session_id),
        ),
    }
}

/// GET /languages
/// List the supported-language reference table
pub async fn list_languages() -> impl IntoResponse {
    (StatusCode::OK, Json(language::SUPPORTED_LANGUAGES))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
