mod support;

use std::sync::Arc;

use axum::{Extension, Json};
use chrono::Utc;
use support::mocks::{
    DummyPasswordHasher, FixedClock, InMemoryUserRepo, ScriptedChatGateway,
};
use userhub::application::chat::ChatProxyService;
use userhub::application::dto::ChatReplyDto;
use userhub::application::error::ApplicationError;
use userhub::application::services::ApplicationServices;
use userhub::presentation::http::controllers::chat::{XaiChatRequest, xai_completion};
use userhub::presentation::http::state::HttpState;

fn reply() -> ChatReplyDto {
    ChatReplyDto {
        id: "chatcmpl-1".into(),
        model: "grok-3-beta".into(),
        content: "hello there".into(),
        total_tokens: Some(17),
    }
}

#[tokio::test]
async fn blank_message_never_reaches_the_gateway() {
    let gateway = Arc::new(ScriptedChatGateway::new(reply()));
    let service = ChatProxyService::new(Arc::clone(&gateway) as _);

    let err = service.complete("   ".into(), None).await.unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
    assert!(gateway.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn forwards_message_and_system_prompt() {
    let gateway = Arc::new(ScriptedChatGateway::new(reply()));
    let service = ChatProxyService::new(Arc::clone(&gateway) as _);

    let result = service
        .complete("날씨 알려줘".into(), Some("be brief".into()))
        .await
        .unwrap();

    assert_eq!(result.content, "hello there");
    assert_eq!(result.total_tokens, Some(17));

    let seen = gateway.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].message, "날씨 알려줘");
    assert_eq!(seen[0].system_prompt.as_deref(), Some("be brief"));
}

#[tokio::test]
async fn xai_route_never_sends_a_system_prompt() {
    let openai_gateway = Arc::new(ScriptedChatGateway::new(reply()));
    let xai_gateway = Arc::new(ScriptedChatGateway::new(reply()));
    let services = Arc::new(ApplicationServices::new(
        Arc::new(InMemoryUserRepo::empty()),
        Arc::new(DummyPasswordHasher),
        Arc::new(FixedClock(Utc::now())),
        Arc::clone(&openai_gateway) as _,
        Arc::clone(&xai_gateway) as _,
    ));
    let state = HttpState { services };

    let Json(result) = xai_completion(
        Extension(state),
        Json(XaiChatRequest {
            message: "날씨 알려줘".into(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(result.content, "hello there");

    let seen = xai_gateway.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].message, "날씨 알려줘");
    assert!(seen[0].system_prompt.is_none());
    assert!(openai_gateway.seen.lock().unwrap().is_empty());
}
