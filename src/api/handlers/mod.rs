//! Request handlers

pub mod chat_handler;
pub mod facility_handler;
pub mod help_handler;
pub mod maternal_handler;
pub mod mood_handler;
pub mod voice_handler;
