//! Route tables

pub mod chat_routes;
pub mod facility_routes;
pub mod help_routes;
pub mod maternal_routes;
pub mod mood_routes;
pub mod voice_routes;
