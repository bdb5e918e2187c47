use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::storage::repository::Record;

/// Category of an anonymous help request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HelpType {
    MentalHealth,
    PhysicalHealth,
    Emergency,
    Other,
}

impl FromStr for HelpType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mental_health" => Ok(HelpType::MentalHealth),
            "physical_health" => Ok(HelpType::PhysicalHealth),
            "emergency" => Ok(HelpType::Emergency),
            "other" => Ok(HelpType::Other),
            other => Err(format!("Unknown help type: {}", other)),
        }
    }
}

/// Help request submitted without an account
///
/// `reference` is the only handle given back to the requester.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnonymousHelpRequest {
    pub id: u64,
    pub reference: String,
    pub help_type: HelpType,
    pub description: String,
    #[serde(default)]
    pub contact_preference: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_resolved: bool,
}

impl AnonymousHelpRequest {
    pub fn new(help_type: HelpType, description: &str, contact_preference: &str) -> Self {
        Self {
            id: 0,
            reference: Uuid::new_v4().simple().to_string()[..8].to_uppercase(),
            help_type,
            description: description.to_string(),
            contact_preference: contact_preference.to_string(),
            created_at: Utc::now(),
            is_resolved: false,
        }
    }
}

impl Record for AnonymousHelpRequest {
    const TABLE: &'static str = "help_request";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_open_with_reference() {
        let request = AnonymousHelpRequest::new(HelpType::MentalHealth, "need to talk", "");
        assert!(!request.is_resolved);
        assert_eq!(request.reference.len(), 8);
    }

    #[test]
    fn test_help_type_parse() {
        assert_eq!("physical_health".parse::<HelpType>().unwrap(), HelpType::PhysicalHealth);
        assert!("legal".parse::<HelpType>().is_err());
    }
}
