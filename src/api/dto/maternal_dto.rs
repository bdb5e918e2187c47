use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PregnancyRecord, VaccinationRecord};

#[derive(Debug, Deserialize)]
pub struct PregnancyRequest {
    pub last_period_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct PregnancyResponse {
    pub id: u64,
    pub last_period_date: NaiveDate,
    pub expected_delivery_date: NaiveDate,
    pub weeks_pregnant: i64,
    pub trimester: u8,
}

impl PregnancyResponse {
    pub fn new(record: &PregnancyRecord, today: NaiveDate) -> Self {
        Self {
            id: record.id,
            last_period_date: record.last_period_date,
            expected_delivery_date: record.expected_delivery_date,
            weeks_pregnant: record.weeks_on(today),
            trimester: record.trimester_on(today),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChildRequest {
    pub child_name: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ChildResponse {
    pub id: u64,
    pub child_name: String,
    pub birth_date: NaiveDate,
    pub vaccinations: Vec<VaccinationRecord>,
}

#[derive(Debug, Serialize)]
pub struct VaccinationListResponse {
    pub child_id: u64,
    pub vaccinations: Vec<VaccinationRecord>,
    pub completed: usize,
}
