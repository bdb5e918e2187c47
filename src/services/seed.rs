//! Directory seed data
//!
//! Facilities and health tips read from a TOML file at startup:
//!
//! ```toml
//! [[facilities]]
//! name = "Savar Upazila Health Complex"
//! facility_type = "hospital"
//! address = "Savar, Dhaka"
//! upazila = "Savar"
//!
//! [[health_tips]]
//! text = "খাবার আগে সাবান দিয়ে হাত ধুয়ে নিন।"
//! language = "bn"
//! ```

use std::path::Path;

use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::{FacilityType, HealthFacility, HealthTip, LanguageTag};
use crate::services::directory::DirectoryService;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DirectorySeed {
    pub facilities: Vec<FacilitySeed>,
    pub health_tips: Vec<TipSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacilitySeed {
    pub name: String,
    pub facility_type: FacilityType,
    pub address: String,
    pub upazila: String,
    #[serde(default)]
    pub union: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub hours: String,
}

impl From<FacilitySeed> for HealthFacility {
    fn from(seed: FacilitySeed) -> Self {
        HealthFacility::new(&seed.name, seed.facility_type, &seed.address, &seed.upazila)
            .with_union(&seed.union)
            .with_contact(&seed.contact)
            .with_hours(&seed.hours)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TipSeed {
    pub text: String,
    pub language: LanguageTag,
}

/// Records added by [`seed_directory`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub facilities: usize,
    pub health_tips: usize,
}

impl DirectorySeed {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // Toml::file treats a missing file as empty
        if !path.is_file() {
            return Err(AppError::Config(format!(
                "seed file not found: {}",
                path.display()
            )));
        }
        Ok(Figment::from(Toml::file(path)).extract()?)
    }
}

/// Load seed data into the directory
///
/// Facilities and tips are each skipped when the store already holds some,
/// so restarting against a persistent backend adds nothing.
pub async fn seed_directory(
    directory: &dyn DirectoryService,
    seed: DirectorySeed,
) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    if directory.list_facilities(None).await?.is_empty() {
        for facility in seed.facilities {
            directory.add_facility(facility.into()).await?;
            summary.facilities += 1;
        }
    } else {
        debug!("Facilities already present, skipping seed");
    }

    // tip_for falls back to any language, so None means no tips at all
    if directory.tip_for(LanguageTag::default()).await?.is_none() {
        for tip in seed.health_tips {
            directory
                .add_tip(HealthTip::new(&tip.text, tip.language))
                .await?;
            summary.health_tips += 1;
        }
    } else {
        debug!("Health tips already present, skipping seed");
    }

    info!(
        facilities = summary.facilities,
        health_tips = summary.health_tips,
        "Directory seeded"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::directory::create_directory_service;
    use crate::storage::memory::MemoryRepository;
    use figment::Jail;
    use std::sync::Arc;

    const SEED: &str = r#"
        [[facilities]]
        name = "Rahima Pharmacy"
        facility_type = "pharmacy"
        address = "Bazar Road"
        upazila = "Savar"

        [[facilities]]
        name = "Savar Upazila Health Complex"
        facility_type = "hospital"
        address = "Savar, Dhaka"
        upazila = "Savar"
        contact = "01700-000000"

        [[health_tips]]
        text = "খাবার আগে সাবান দিয়ে হাত ধুয়ে নিন।"
        language = "bn"
    "#;

    fn directory() -> Box<dyn DirectoryService> {
        create_directory_service(
            Arc::new(MemoryRepository::<HealthFacility>::new()),
            Arc::new(MemoryRepository::<HealthTip>::new()),
        )
    }

    #[test]
    fn test_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file("seed.toml", SEED)?;

            let seed = DirectorySeed::from_file("seed.toml").map_err(|e| e.to_string())?;
            assert_eq!(seed.facilities.len(), 2);
            assert_eq!(seed.facilities[1].facility_type, FacilityType::Hospital);
            assert_eq!(seed.facilities[1].contact, "01700-000000");
            assert!(seed.facilities[0].hours.is_empty());
            assert_eq!(seed.health_tips[0].language, LanguageTag::Bn);
            Ok(())
        });
    }

    #[test]
    fn test_bundled_seed_file() {
        let seed = DirectorySeed::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/seed.toml"))
            .unwrap();
        assert!(seed
            .facilities
            .iter()
            .any(|f| f.facility_type == FacilityType::Hospital));
        for language in [LanguageTag::Bn, LanguageTag::En, LanguageTag::Mixed] {
            assert!(seed.health_tips.iter().any(|t| t.language == language));
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        Jail::expect_with(|_jail| {
            assert!(matches!(
                DirectorySeed::from_file("nope.toml"),
                Err(AppError::Config(_))
            ));
            Ok(())
        });
    }

    #[tokio::test]
    async fn test_seed_fills_empty_directory_once() {
        let directory = directory();
        let seed = || DirectorySeed {
            facilities: vec![FacilitySeed {
                name: "Savar Upazila Health Complex".into(),
                facility_type: FacilityType::Hospital,
                address: "Savar, Dhaka".into(),
                upazila: "Savar".into(),
                union: String::new(),
                contact: "01700-000000".into(),
                hours: "24/7".into(),
            }],
            health_tips: vec![TipSeed {
                text: "Drink safe water".into(),
                language: LanguageTag::En,
            }],
        };

        let summary = seed_directory(directory.as_ref(), seed()).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                facilities: 1,
                health_tips: 1
            }
        );

        let hospital = directory.first_hospital().await.unwrap().unwrap();
        assert_eq!(hospital.hours, "24/7");
        let tip = directory.tip_for(LanguageTag::Bn).await.unwrap().unwrap();
        assert_eq!(tip.text, "Drink safe water");

        let summary = seed_directory(directory.as_ref(), seed()).await.unwrap();
        assert_eq!(summary, SeedSummary::default());
        assert_eq!(directory.list_facilities(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_facility_name_fails() {
        let directory = directory();
        let seed = DirectorySeed {
            facilities: vec![FacilitySeed {
                name: "  ".into(),
                facility_type: FacilityType::Clinic,
                address: "Ward 3".into(),
                upazila: "Savar".into(),
                union: String::new(),
                contact: String::new(),
                hours: String::new(),
            }],
            health_tips: Vec::new(),
        };

        assert!(matches!(
            seed_directory(directory.as_ref(), seed).await,
            Err(AppError::Validation(_))
        ));
    }
}
