use serde::{Deserialize, Serialize};

/// Confirmation shown to the requester
pub const SUBMITTED_MESSAGE: &str = "আপনার অনুরোধ সফলভাবে জমা হয়েছে";

/// `POST /help-requests` form body
#[derive(Debug, Deserialize)]
pub struct HelpRequestForm {
    #[serde(default)]
    pub help_type: String,
    #[serde(default)]
    pub description: String,
    pub contact_preference: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HelpRequestResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub reference: String,
}
