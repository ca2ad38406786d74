//! LLM integration for prompt-forge.
//!
//! Provides the [`LlmProvider`] trait the metadata synthesizer calls through,
//! plus the Anthropic Messages API client that implements it in production.
//! Tests substitute a stub provider instead of hitting the network.

pub mod anthropic;

pub use anthropic::{
    AnthropicClient, CompletionRequest, CompletionResponse, ContentBlock, LlmProvider, Message,
    Usage,
};
