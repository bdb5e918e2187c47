//! Mon Bondhu - community health assistant service
//!
//! Answers voice commands and chat messages in Bengali, English or a mix of
//! both, backed by an optional external language model, and stores mood
//! check-ins, anonymous help requests and maternal tracking records.

pub mod ai;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;
