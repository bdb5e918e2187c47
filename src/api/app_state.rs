use crate::ai::TextGenerator;
use crate::config::config::ChatConfig;
use crate::observability::AppMetrics;
use crate::services::{
    ChatHistoryStore, DirectoryService, HelpRequestService, MaternalService, MoodService,
    ResponseGenerator, create_chat_history_store, create_directory_service,
    create_help_request_service, create_maternal_service, create_mood_service,
};
use crate::storage::factory::Repositories;
use std::sync::Arc;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Voice command, mood text and chat replies
    pub responder: Arc<ResponseGenerator>,
    pub chat_history: Arc<dyn ChatHistoryStore>,
    /// Facilities and health tips
    pub directory: Arc<dyn DirectoryService>,
    pub mood_service: Arc<dyn MoodService>,
    pub help_request_service: Arc<dyn HelpRequestService>,
    pub maternal_service: Arc<dyn MaternalService>,
    pub metrics: Arc<AppMetrics>,
    /// Default number of exchanges returned by the history endpoint
    pub history_limit: usize,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("responder", &"Arc<ResponseGenerator>")
            .field("chat_history", &"Arc<dyn ChatHistoryStore>")
            .field("directory", &"Arc<dyn DirectoryService>")
            .field("mood_service", &"Arc<dyn MoodService>")
            .field("help_request_service", &"Arc<dyn HelpRequestService>")
            .field("maternal_service", &"Arc<dyn MaternalService>")
            .field("history_limit", &self.history_limit)
            .finish()
    }
}

impl AppState {
    /// Wire every service over the given repositories
    pub fn new(
        repositories: Repositories,
        generator: Arc<dyn TextGenerator>,
        chat: &ChatConfig,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        let chat_history: Arc<dyn ChatHistoryStore> =
            Arc::from(create_chat_history_store(repositories.chat_exchanges));
        let directory: Arc<dyn DirectoryService> = Arc::from(create_directory_service(
            repositories.facilities,
            repositories.health_tips,
        ));

        let responder = ResponseGenerator::new(
            generator,
            directory.clone(),
            chat_history.clone(),
            metrics.clone(),
        )
        .with_max_message_chars(chat.max_message_chars);

        Self {
            responder: Arc::new(responder),
            chat_history,
            directory,
            mood_service: Arc::from(create_mood_service(repositories.mood_checkins)),
            help_request_service: Arc::from(create_help_request_service(
                repositories.help_requests,
            )),
            maternal_service: Arc::from(create_maternal_service(
                repositories.pregnancies,
                repositories.children,
                repositories.vaccinations,
            )),
            metrics,
            history_limit: chat.history_limit,
        }
    }
}
