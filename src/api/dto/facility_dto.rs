use serde::{Deserialize, Serialize};

use crate::models::{FacilityType, HealthFacility};

#[derive(Debug, Deserialize)]
pub struct FacilityParams {
    pub upazila: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FacilityResponse {
    pub id: u64,
    pub name: String,
    pub facility_type: FacilityType,
    /// Bengali display label for `facility_type`
    pub facility_type_label: &'static str,
    pub address: String,
    pub upazila: String,
    pub union: String,
    pub contact: String,
    pub hours: String,
}

impl From<HealthFacility> for FacilityResponse {
    fn from(f: HealthFacility) -> Self {
        Self {
            id: f.id,
            facility_type_label: f.facility_type.label_bn(),
            name: f.name,
            facility_type: f.facility_type,
            address: f.address,
            upazila: f.upazila,
            union: f.union,
            contact: f.contact,
            hours: f.hours,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FacilityListResponse {
    pub facilities: Vec<FacilityResponse>,
    pub total: usize,
}
