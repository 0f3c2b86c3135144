//! FNTC Support Bot Backend Library
//!
//! Core components for the FiBear customer-support chatbot backend: the HTTP
//! API, per-user chat history persistence, and the Gemini model client.

pub mod api;
pub mod db;
pub mod gemini;
pub mod history;
pub mod prompts;
