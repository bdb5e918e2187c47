//! Mood tracker check-ins

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{MoodCheckIn, MoodKind};
use crate::storage::factory::RepositoryRef;

/// Number of check-ins shown on the tracker
pub const RECENT_CHECKINS: usize = 10;

#[async_trait]
pub trait MoodService: Send + Sync {
    /// Store a check-in; `mood` must name one of the five moods
    async fn record(&self, mood: &str, notes: Option<&str>) -> Result<MoodCheckIn>;

    /// Latest check-ins, newest first
    async fn recent(&self, limit: usize) -> Result<Vec<MoodCheckIn>>;
}

pub struct MoodServiceImpl {
    repository: RepositoryRef<MoodCheckIn>,
}

impl MoodServiceImpl {
    pub fn new(repository: RepositoryRef<MoodCheckIn>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MoodService for MoodServiceImpl {
    async fn record(&self, mood: &str, notes: Option<&str>) -> Result<MoodCheckIn> {
        let mood: MoodKind = mood.parse().map_err(AppError::Validation)?;
        let checkin = self
            .repository
            .create(MoodCheckIn::new(mood, notes.unwrap_or_default().trim()))
            .await?;
        tracing::debug!(id = checkin.id, ?mood, "Mood check-in stored");
        Ok(checkin)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<MoodCheckIn>> {
        let mut checkins = self.repository.latest(limit).await?;
        checkins.reverse();
        Ok(checkins)
    }
}

pub fn create_mood_service(repository: RepositoryRef<MoodCheckIn>) -> Box<dyn MoodService> {
    Box::new(MoodServiceImpl::new(repository))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryRepository;
    use std::sync::Arc;

    fn service() -> Box<dyn MoodService> {
        create_mood_service(Arc::new(MemoryRepository::<MoodCheckIn>::new()))
    }

    #[tokio::test]
    async fn test_record_and_recent_newest_first() {
        let service = service();
        for mood in ["happy", "sad", "anxious"] {
            service.record(mood, None).await.unwrap();
        }
        let saved = service.record("neutral", Some("  slept badly ")).await.unwrap();
        assert_eq!(saved.notes, "slept badly");

        let recent = service.recent(3).await.unwrap();
        let moods: Vec<MoodKind> = recent.iter().map(|c| c.mood).collect();
        assert_eq!(moods, vec![MoodKind::Neutral, MoodKind::Anxious, MoodKind::Sad]);
    }

    #[tokio::test]
    async fn test_unknown_mood_is_validation_error() {
        let service = service();
        let err = service.record("ecstatic", None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(service.recent(RECENT_CHECKINS).await.unwrap().is_empty());
    }
}
