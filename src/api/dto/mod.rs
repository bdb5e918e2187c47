//! Request and response bodies

pub mod chat_dto;
pub mod facility_dto;
pub mod help_dto;
pub mod maternal_dto;
pub mod mood_dto;
pub mod voice_dto;
