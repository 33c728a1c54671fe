use actix_web::{
    http::{header, StatusCode},
    test,
    web::Data,
};
use approbot_core::{
    use_cases::slack::{HandleSlackEventInterface, MockHandleSlackEventInterface},
    CoreModule, DomainError,
};
use approbot_lock_interface::LockError;
use approbot_models::{ApprovalOutcome, ApprovalSummary};
use approbot_slack_interface::types::SlackEvent;
use pretty_assertions::assert_eq;

use super::process_event;
use crate::{
    metrics::{build_metrics_handler, APPROVALS_SUBMITTED},
    server::{build_actix_app, tests::null_context},
};

async fn post_webhook(
    body: &'static str,
    content_type: &str,
) -> (StatusCode, Option<String>, String) {
    let app = test::init_service(build_actix_app(
        Data::new(null_context(CoreModule::builder().build())),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/webhook")
            .insert_header((header::CONTENT_TYPE, content_type.to_string()))
            .set_payload(body)
            .to_request(),
    )
    .await;

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);
    let body = test::read_body(response).await;

    (
        status,
        content_type,
        String::from_utf8_lossy(&body).into_owned(),
    )
}

#[actix_web::test]
async fn url_verification_returns_challenge() {
    let (status, content_type, body) = post_webhook(
        r#"{"token":"t","challenge":"3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P","type":"url_verification"}"#,
        "application/json",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(body, "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P");
}

#[actix_web::test]
async fn form_encoded_url_verification() {
    let (status, _, body) = post_webhook(
        "type=url_verification&challenge=abc",
        "application/x-www-form-urlencoded",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "abc");
}

#[actix_web::test]
async fn malformed_body_is_rejected() {
    let (status, _, body) = post_webhook("", "application/json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Malformed request body"));

    let (status, _, _) = post_webhook(r#"{"event":{}}"#, "application/json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn events_are_acknowledged() {
    let (status, _, body) = post_webhook(
        r#"{
            "type": "event_callback",
            "event_id": "Ev1",
            "event": {
                "type": "message",
                "channel": "C1",
                "user": "U1",
                "text": "<@U2> https://github.com/acme/widgets/pull/42",
                "ts": "1.2"
            }
        }"#,
        "application/json",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "");
}

#[actix_web::test]
async fn unsupported_payloads_are_acknowledged() {
    let (status, _, _) = post_webhook(
        r#"{"type":"app_rate_limited","minute_rate_limited":1518467820}"#,
        "application/json",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn process_event_records_outcomes() {
    let mut handle_slack_event = MockHandleSlackEventInterface::new();
    handle_slack_event
        .expect_run()
        .once()
        .withf(|_, event_id, event| event_id == "Ev1" && event == &SlackEvent::Unsupported)
        .return_once(|_, _, _| {
            let mut summary = ApprovalSummary::new();
            summary.push(
                "U1",
                &("acme", "widgets", 42).into(),
                ApprovalOutcome::Approved,
            );
            Ok(summary)
        });

    let core_module = CoreModule::builder()
        .with_component_override::<dyn HandleSlackEventInterface>(Box::new(handle_slack_event))
        .build();

    let before = APPROVALS_SUBMITTED.get();
    process_event(
        Data::new(null_context(core_module)),
        "Ev1".into(),
        SlackEvent::Unsupported,
    )
    .await;

    assert!(APPROVALS_SUBMITTED.get() > before);
}

#[tokio::test]
async fn process_event_swallows_errors() {
    let mut handle_slack_event = MockHandleSlackEventInterface::new();
    handle_slack_event
        .expect_run()
        .once()
        .return_once(|_, _, _| {
            Err(DomainError::LockError {
                source: LockError::InvalidAddress {
                    address: "nowhere".into(),
                },
            })
        });

    let core_module = CoreModule::builder()
        .with_component_override::<dyn HandleSlackEventInterface>(Box::new(handle_slack_event))
        .build();

    process_event(
        Data::new(null_context(core_module)),
        "Ev2".into(),
        SlackEvent::Unsupported,
    )
    .await;
}
