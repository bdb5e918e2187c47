//! Health facility directory and health tips
//!
//! Read-mostly reference data; `add_*` exists for seeding.

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{FacilityType, HealthFacility, HealthTip, LanguageTag};
use crate::storage::factory::RepositoryRef;

#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// All facilities, optionally filtered by upazila substring
    async fn list_facilities(&self, upazila: Option<&str>) -> Result<Vec<HealthFacility>>;

    /// First facility of type hospital, if any
    async fn first_hospital(&self) -> Result<Option<HealthFacility>>;

    async fn add_facility(&self, facility: HealthFacility) -> Result<HealthFacility>;

    /// A tip in `language`, or in any language when none matches
    async fn tip_for(&self, language: LanguageTag) -> Result<Option<HealthTip>>;

    async fn add_tip(&self, tip: HealthTip) -> Result<HealthTip>;
}

pub struct DirectoryServiceImpl {
    facilities: RepositoryRef<HealthFacility>,
    tips: RepositoryRef<HealthTip>,
}

impl DirectoryServiceImpl {
    pub fn new(facilities: RepositoryRef<HealthFacility>, tips: RepositoryRef<HealthTip>) -> Self {
        Self { facilities, tips }
    }
}

#[async_trait]
impl DirectoryService for DirectoryServiceImpl {
    async fn list_facilities(&self, upazila: Option<&str>) -> Result<Vec<HealthFacility>> {
        let facilities = self.facilities.find_all().await?;
        Ok(match upazila.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => facilities
                .into_iter()
                .filter(|f| f.in_upazila(query))
                .collect(),
            None => facilities,
        })
    }

    async fn first_hospital(&self) -> Result<Option<HealthFacility>> {
        let facilities = self.facilities.find_all().await?;
        Ok(facilities
            .into_iter()
            .find(|f| f.facility_type == FacilityType::Hospital))
    }

    async fn add_facility(&self, facility: HealthFacility) -> Result<HealthFacility> {
        if facility.name.trim().is_empty() {
            return Err(AppError::Validation("Facility name cannot be empty".into()));
        }
        self.facilities.create(facility).await
    }

    async fn tip_for(&self, language: LanguageTag) -> Result<Option<HealthTip>> {
        let tips = self.tips.find_all().await?;
        let matching = tips.iter().position(|t| t.language == language);
        Ok(match matching {
            Some(index) => tips.into_iter().nth(index),
            None => tips.into_iter().next(),
        })
    }

    async fn add_tip(&self, tip: HealthTip) -> Result<HealthTip> {
        if tip.text.trim().is_empty() {
            return Err(AppError::Validation("Tip text cannot be empty".into()));
        }
        self.tips.create(tip).await
    }
}

pub fn create_directory_service(
    facilities: RepositoryRef<HealthFacility>,
    tips: RepositoryRef<HealthTip>,
) -> Box<dyn DirectoryService> {
    Box::new(DirectoryServiceImpl::new(facilities, tips))
}
