//! Anonymous help requests

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{AnonymousHelpRequest, HelpType};
use crate::storage::factory::RepositoryRef;

pub const MAX_DESCRIPTION_CHARS: usize = 2000;

#[async_trait]
pub trait HelpRequestService: Send + Sync {
    async fn submit(
        &self,
        help_type: &str,
        description: &str,
        contact_preference: Option<&str>,
    ) -> Result<AnonymousHelpRequest>;
}

pub struct HelpRequestServiceImpl {
    repository: RepositoryRef<AnonymousHelpRequest>,
}

impl HelpRequestServiceImpl {
    pub fn new(repository: RepositoryRef<AnonymousHelpRequest>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HelpRequestService for HelpRequestServiceImpl {
    async fn submit(
        &self,
        help_type: &str,
        description: &str,
        contact_preference: Option<&str>,
    ) -> Result<AnonymousHelpRequest> {
        let help_type: HelpType = help_type.parse().map_err(AppError::Validation)?;

        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::Validation("Description cannot be empty".into()));
        }
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(AppError::Validation(format!(
                "Description must be at most {} characters",
                MAX_DESCRIPTION_CHARS
            )));
        }

        let request = AnonymousHelpRequest::new(
            help_type,
            description,
            contact_preference.unwrap_or_default().trim(),
        );
        let request = self.repository.create(request).await?;
        // Never log the description
        tracing::info!(reference = %request.reference, ?help_type, "Help request submitted");
        Ok(request)
    }
}

pub fn create_help_request_service(
    repository: RepositoryRef<AnonymousHelpRequest>,
) -> Box<dyn HelpRequestService> {
    Box::new(HelpRequestServiceImpl::new(repository))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryRepository;
    use crate::storage::repository::Repository;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_submit_stores_unresolved_request() {
        let repository = Arc::new(MemoryRepository::<AnonymousHelpRequest>::new());
        let service = create_help_request_service(repository.clone());

        let request = service
            .submit("mental_health", "I can't sleep for weeks", Some("sms"))
            .await
            .unwrap();
        assert_eq!(request.help_type, HelpType::MentalHealth);
        assert_eq!(request.reference.len(), 8);
        assert!(!request.is_resolved);

        let stored = repository.get_by_id(request.id).await.unwrap().unwrap();
        assert_eq!(stored.contact_preference, "sms");
    }

    #[tokio::test]
    async fn test_description_limits() {
        let service =
            create_help_request_service(Arc::new(MemoryRepository::<AnonymousHelpRequest>::new()));

        assert!(matches!(
            service.submit("other", "   ", None).await,
            Err(AppError::Validation(_))
        ));

        let long = "ক".repeat(MAX_DESCRIPTION_CHARS + 1);
        assert!(matches!(
            service.submit("other", &long, None).await,
            Err(AppError::Validation(_))
        ));

        let exact = "ক".repeat(MAX_DESCRIPTION_CHARS);
        assert!(service.submit("other", &exact, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_help_type() {
        let service =
            create_help_request_service(Arc::new(MemoryRepository::<AnonymousHelpRequest>::new()));
        assert!(matches!(
            service.submit("legal", "need advice", None).await,
            Err(AppError::Validation(_))
        ));
    }
}
