//! Gemini generative-text integration for RoadRest
//!
//! One-shot text generation via the Gemini `generateContent` endpoint.
//! The API key travels as a query-string parameter; the first generated
//! candidate's text is returned verbatim.

mod client;
mod config;
mod error;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GeminiError;
