//! Pregnancy and child vaccination tracking

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::models::{ChildRecord, PregnancyRecord, VaccinationRecord, vaccination_schedule};
use crate::storage::factory::RepositoryRef;

/// Oldest accepted last-period date, in days before today
pub const MAX_LMP_AGE_DAYS: i64 = 300;

#[async_trait]
pub trait MaternalService: Send + Sync {
    /// Register a pregnancy from the first day of the last period
    async fn register_pregnancy(&self, last_period_date: NaiveDate, today: NaiveDate)
    -> Result<PregnancyRecord>;

    /// Register a child and create its vaccination schedule
    async fn register_child(
        &self,
        child_name: &str,
        birth_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(ChildRecord, Vec<VaccinationRecord>)>;

    /// Doses for a child, by scheduled date
    async fn schedule(&self, child_id: u64) -> Result<Vec<VaccinationRecord>>;

    /// Mark a dose administered on `on`
    async fn complete_vaccination(&self, record_id: u64, on: NaiveDate) -> Result<VaccinationRecord>;
}

pub struct MaternalServiceImpl {
    pregnancies: RepositoryRef<PregnancyRecord>,
    children: RepositoryRef<ChildRecord>,
    vaccinations: RepositoryRef<VaccinationRecord>,
}

impl MaternalServiceImpl {
    pub fn new(
        pregnancies: RepositoryRef<PregnancyRecord>,
        children: RepositoryRef<ChildRecord>,
        vaccinations: RepositoryRef<VaccinationRecord>,
    ) -> Self {
        Self {
            pregnancies,
            children,
            vaccinations,
        }
    }
}

#[async_trait]
impl MaternalService for MaternalServiceImpl {
    async fn register_pregnancy(
        &self,
        last_period_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<PregnancyRecord> {
        if last_period_date > today {
            return Err(AppError::Validation(
                "Last period date cannot be in the future".into(),
            ));
        }
        if (today - last_period_date).num_days() > MAX_LMP_AGE_DAYS {
            return Err(AppError::Validation(format!(
                "Last period date must be within the last {} days",
                MAX_LMP_AGE_DAYS
            )));
        }

        let record = self
            .pregnancies
            .create(PregnancyRecord::new(last_period_date))
            .await?;
        tracing::info!(id = record.id, edd = %record.expected_delivery_date, "Pregnancy registered");
        Ok(record)
    }

    async fn register_child(
        &self,
        child_name: &str,
        birth_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(ChildRecord, Vec<VaccinationRecord>)> {
        let child_name = child_name.trim();
        if child_name.is_empty() {
            return Err(AppError::Validation("Child name cannot be empty".into()));
        }
        if birth_date > today {
            return Err(AppError::Validation("Birth date cannot be in the future".into()));
        }

        let child = self
            .children
            .create(ChildRecord::new(child_name, birth_date))
            .await?;

        let mut doses = Vec::new();
        for dose in vaccination_schedule(child.id, birth_date) {
            doses.push(self.vaccinations.create(dose).await?);
        }
        tracing::info!(child_id = child.id, doses = doses.len(), "Child registered");

        Ok((child, doses))
    }

    async fn schedule(&self, child_id: u64) -> Result<Vec<VaccinationRecord>> {
        if self.children.get_by_id(child_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Child {} not found", child_id)));
        }

        let mut doses: Vec<VaccinationRecord> = self
            .vaccinations
            .find_all()
            .await?
            .into_iter()
            .filter(|r| r.child_id == child_id)
            .collect();
        doses.sort_by_key(|r| (r.scheduled_date, r.id));
        Ok(doses)
    }

    async fn complete_vaccination(&self, record_id: u64, on: NaiveDate) -> Result<VaccinationRecord> {
        let mut record = self
            .vaccinations
            .get_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vaccination record {} not found", record_id)))?;

        if !record.is_completed {
            record.complete(on);
            self.vaccinations.update(&record).await?;
        }
        Ok(record)
    }
}

pub fn create_maternal_service(
    pregnancies: RepositoryRef<PregnancyRecord>,
    children: RepositoryRef<ChildRecord>,
    vaccinations: RepositoryRef<VaccinationRecord>,
) -> Box<dyn MaternalService> {
    Box::new(MaternalServiceImpl::new(pregnancies, children, vaccinations))
}
