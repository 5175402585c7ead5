//! HTTP API server for external session control
//!
//! This module provides a REST API for driving speech sessions:
//! - POST /sessions/transcription/start - Start a transcription session
//! - POST /sessions/transcription/stop/:id - Stop a transcription session
//! - GET /sessions/transcription/:id/transcript - Accumulated transcript
//! - POST /sessions/translation/start - Start a one-shot translation
//! - POST /sessions/translation/stop/:id - Cancel an in-flight translation
//! - GET /sessions/translation/:id/results - Per-locale translation results
//! - GET /languages - Supported language table
//! - GET /health - Health check
//!
//! The HTTP layer owns the accumulated result buffers by registering session
//! callbacks; the sessions themselves never store transcripts.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
