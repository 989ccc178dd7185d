// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        chat::ChatProxyService,
        commands::users::UserCommandService,
        ports::{chat::ChatCompletionGateway, security::PasswordHasher, time::Clock},
        queries::users::UserQueryService,
    },
    domain::user::UserRepository,
};

/// Aggregate of the application-layer services, wired once at startup with
/// explicit collaborators and shared through the HTTP state.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub openai_chat: Arc<ChatProxyService>,
    pub xai_chat: Arc<ChatProxyService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        openai_gateway: Arc<dyn ChatCompletionGateway>,
        xai_gateway: Arc<dyn ChatCompletionGateway>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let openai_chat = Arc::new(ChatProxyService::new(openai_gateway));
        let xai_chat = Arc::new(ChatProxyService::new(xai_gateway));

        Self {
            user_commands,
            user_queries,
            openai_chat,
            xai_chat,
        }
    }
}
