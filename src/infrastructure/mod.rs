//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: in-memory campaign and scenario repositories
//! - HTTP: REST API routes
//! - OpenAI: LLM integration for the narrative rewrite
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod openai;
pub mod persistence;
pub mod state;
