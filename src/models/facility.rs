use serde::{Deserialize, Serialize};

use crate::storage::repository::Record;

/// Kind of health facility
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FacilityType {
    /// Community clinic
    Clinic,
    Hospital,
    Pharmacy,
    /// Community health worker
    Chw,
}

impl FacilityType {
    pub fn label_bn(&self) -> &'static str {
        match self {
            FacilityType::Clinic => "কমিউনিটি ক্লিনিক",
            FacilityType::Hospital => "হাসপাতাল",
            FacilityType::Pharmacy => "ফার্মেসি",
            FacilityType::Chw => "কমিউনিটি স্বাস্থ্যকর্মী",
        }
    }
}

/// Directory entry for a health facility
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthFacility {
    pub id: u64,
    pub name: String,
    pub facility_type: FacilityType,
    pub address: String,
    pub upazila: String,
    pub union: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub hours: String,
}

impl HealthFacility {
    pub fn new(name: &str, facility_type: FacilityType, address: &str, upazila: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            facility_type,
            address: address.to_string(),
            upazila: upazila.to_string(),
            union: String::new(),
            contact: String::new(),
            hours: String::new(),
        }
    }

    pub fn with_contact(mut self, contact: &str) -> Self {
        self.contact = contact.to_string();
        self
    }

    pub fn with_union(mut self, union: &str) -> Self {
        self.union = union.to_string();
        self
    }

    pub fn with_hours(mut self, hours: &str) -> Self {
        self.hours = hours.to_string();
        self
    }

    /// Case-insensitive substring match on upazila
    pub fn in_upazila(&self, query: &str) -> bool {
        self.upazila
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }
}

impl Record for HealthFacility {
    const TABLE: &'static str = "health_facility";

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
    fn test_upazila_match_ignores_case() {
        let facility = HealthFacility::new(
            "Sadar Hospital",
            FacilityType::Hospital,
            "Station Road",
            "Savar",
        );
        assert!(facility.in_upazila("sav"));
        assert!(facility.in_upazila(" SAVAR "));
        assert!(!facility.in_upazila("Dhamrai"));
    }

    #[test]
    fn test_facility_type_wire_format() {
        let json = serde_json::to_string(&FacilityType::Chw).unwrap();
        assert_eq!(json, "\"chw\"");
    }
}
