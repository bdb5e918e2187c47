use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::repository::Record;

/// Naegele's rule: expected delivery is 280 days after the last period
pub const GESTATION_DAYS: u64 = 280;

/// Pregnancy registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PregnancyRecord {
    pub id: u64,
    pub last_period_date: NaiveDate,
    pub expected_delivery_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl PregnancyRecord {
    pub fn new(last_period_date: NaiveDate) -> Self {
        Self {
            id: 0,
            last_period_date,
            expected_delivery_date: last_period_date + Days::new(GESTATION_DAYS),
            created_at: Utc::now(),
        }
    }

    /// Completed weeks of pregnancy on `today`
    pub fn weeks_on(&self, today: NaiveDate) -> i64 {
        (today - self.last_period_date).num_days().max(0) / 7
    }

    pub fn trimester_on(&self, today: NaiveDate) -> u8 {
        match self.weeks_on(today) {
            w if w < 14 => 1,
            w if w < 28 => 2,
            _ => 3,
        }
    }
}

impl Record for PregnancyRecord {
    const TABLE: &'static str = "pregnancy";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Child registered for vaccination tracking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildRecord {
    pub id: u64,
    pub child_name: String,
    pub birth_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl ChildRecord {
    pub fn new(child_name: &str, birth_date: NaiveDate) -> Self {
        Self {
            id: 0,
            child_name: child_name.to_string(),
            birth_date,
            created_at: Utc::now(),
        }
    }
}

impl Record for ChildRecord {
    const TABLE: &'static str = "child";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// One scheduled vaccine dose for a child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccinationRecord {
    pub id: u64,
    pub child_id: u64,
    pub vaccine: String,
    pub dose: u8,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub administered_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_completed: bool,
}

impl VaccinationRecord {
    pub fn complete(&mut self, on: NaiveDate) {
        self.is_completed = true;
        self.administered_date = Some(on);
    }
}

impl Record for VaccinationRecord {
    const TABLE: &'static str = "vaccination";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy)]
enum DueAt {
    Birth,
    Weeks(u64),
    Months(u32),
}

/// National EPI schedule: (vaccine, dose, due)
const EPI_SCHEDULE: &[(&str, u8, DueAt)] = &[
    ("BCG", 1, DueAt::Birth),
    ("Pentavalent", 1, DueAt::Weeks(6)),
    ("OPV", 1, DueAt::Weeks(6)),
    ("PCV", 1, DueAt::Weeks(6)),
    ("fIPV", 1, DueAt::Weeks(6)),
    ("Pentavalent", 2, DueAt::Weeks(10)),
    ("OPV", 2, DueAt::Weeks(10)),
    ("PCV", 2, DueAt::Weeks(10)),
    ("Pentavalent", 3, DueAt::Weeks(14)),
    ("OPV", 3, DueAt::Weeks(14)),
    ("fIPV", 2, DueAt::Weeks(14)),
    ("PCV", 3, DueAt::Weeks(18)),
    ("MR", 1, DueAt::Months(9)),
    ("MR", 2, DueAt::Months(15)),
];

/// Builds the dose list for a child, ordered by scheduled date
pub fn vaccination_schedule(child_id: u64, birth_date: NaiveDate) -> Vec<VaccinationRecord> {
    let mut schedule: Vec<VaccinationRecord> = EPI_SCHEDULE
        .iter()
        .map(|(vaccine, dose, due)| {
            let scheduled_date = match due {
                DueAt::Birth => Some(birth_date),
                DueAt::Weeks(w) => birth_date.checked_add_days(Days::new(w * 7)),
                DueAt::Months(m) => birth_date.checked_add_months(Months::new(*m)),
            }
            .unwrap_or(NaiveDate::MAX);

            VaccinationRecord {
                id: 0,
                child_id,
                vaccine: vaccine.to_string(),
                dose: *dose,
                scheduled_date,
                administered_date: None,
                is_completed: false,
            }
        })
        .collect();
    schedule.sort_by_key(|r| r.scheduled_date);
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expected_delivery_is_280_days_later() {
        let record = PregnancyRecord::new(date(2024, 1, 1));
        assert_eq!(record.expected_delivery_date, date(2024, 10, 7));
    }

    #[test]
    fn test_weeks_and_trimester() {
        let record = PregnancyRecord::new(date(2024, 1, 1));
        assert_eq!(record.weeks_on(date(2024, 1, 1)), 0);
        assert_eq!(record.weeks_on(date(2024, 2, 12)), 6);
        assert_eq!(record.trimester_on(date(2024, 2, 12)), 1);
        assert_eq!(record.trimester_on(date(2024, 5, 1)), 2);
        assert_eq!(record.trimester_on(date(2024, 9, 1)), 3);
    }

    #[test]
    fn test_schedule_is_complete_and_ordered() {
        let birth = date(2024, 3, 1);
        let schedule = vaccination_schedule(7, birth);

        assert_eq!(schedule.len(), 14);
        assert!(schedule.iter().all(|r| r.child_id == 7 && !r.is_completed));
        assert!(schedule.windows(2).all(|w| w[0].scheduled_date <= w[1].scheduled_date));

        assert_eq!(schedule[0].vaccine, "BCG");
        assert_eq!(schedule[0].scheduled_date, birth);

        let mr2 = schedule.last().unwrap();
        assert_eq!((mr2.vaccine.as_str(), mr2.dose), ("MR", 2));
        assert_eq!(mr2.scheduled_date, date(2025, 6, 1));
    }

    #[test]
    fn test_complete_sets_date() {
        let mut record = vaccination_schedule(1, date(2024, 3, 1)).remove(0);
        record.complete(date(2024, 3, 2));
        assert!(record.is_completed);
        assert_eq!(record.administered_date, Some(date(2024, 3, 2)));
    }
}
