//! OpenAI adapter
//!
//! Implementation of the vision model port on the chat-completions API.

pub mod client;

pub use client::{NoopVisionModel, OpenAiVisionClient};
