//! End-to-end payment page flows against a mock verification backend

use serde_json::json;
use subpay_core::{
    ControllerEvent, HttpGateway, ModalContent, PaymentConfig, PaymentError, PaymentId,
    PaymentSession, PlanType, RecordingHost, StalePolicy, VerificationGateway, locale,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_link(server: &MockServer, payment_id: &str) -> String {
    format!("{}/subscriptions/pay/{payment_id}?token=tok-123", server.uri())
}

fn start_session(
    server: &MockServer,
    payment_id: &str,
) -> PaymentSession<HttpGateway, RecordingHost> {
    let gateway = HttpGateway::new(&server.uri()).unwrap();
    PaymentSession::start(
        &page_link(server, payment_id),
        PaymentConfig::default(),
        gateway,
        RecordingHost::new(),
    )
    .unwrap()
}

async fn mount_verify(server: &MockServer, payment_id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/subscriptions/verify-payment/{payment_id}")))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn error_message(session: &PaymentSession<HttpGateway, RecordingHost>) -> String {
    match session.state().content() {
        Some(ModalContent::Error { message }) => message.clone(),
        other => panic!("expected error panel, got {other:?}"),
    }
}

#[tokio::test]
async fn test_successful_payment() {
    let server = MockServer::start().await;
    mount_verify(
        &server,
        "pay_1",
        ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "payment_url": "https://gateway.test/start/pay_1",
            "status": "active",
            "payment_id": "pay_1"
        })),
    )
    .await;

    let mut session = start_session(&server, "pay_1");
    session.select_plan("6month").await;

    let Some(ModalContent::Success { plan, receipt }) = session.state().content() else {
        panic!("expected success panel");
    };
    assert_eq!(*plan, PlanType::SixMonth);
    assert_eq!(receipt.subscription().unwrap().id, 12);
    assert_eq!(
        session.state().panel().unwrap().message,
        "اشتراک ۶ ماهه با موفقیت فعال شد."
    );
    assert!(session.host().navigations().is_empty());

    session.dispatch(ControllerEvent::DismissResult);
    assert!(!session.state().is_open());
    assert_eq!(session.host().navigations(), vec!["/subscriptions/status/me"]);
}

#[tokio::test]
async fn test_error_detail_is_shown() {
    let server = MockServer::start().await;
    mount_verify(
        &server,
        "pay_2",
        ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})),
    )
    .await;

    let mut session = start_session(&server, "pay_2");
    session.select_plan("yearly").await;

    assert_eq!(error_message(&session), "Invalid token");
    assert_eq!(session.state().panel().unwrap().heading, Some(locale::ERROR_HEADING));
}

#[tokio::test]
async fn test_error_without_detail_uses_fallback() {
    let server = MockServer::start().await;
    mount_verify(
        &server,
        "pay_3",
        ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})),
    )
    .await;

    let mut session = start_session(&server, "pay_3");
    session.select_plan("unlimited").await;

    assert_eq!(error_message(&session), locale::VERIFY_FALLBACK);
}

#[tokio::test]
async fn test_non_json_error_body_uses_fallback() {
    let server = MockServer::start().await;
    mount_verify(
        &server,
        "pay_4",
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    )
    .await;

    let mut session = start_session(&server, "pay_4");
    session.select_plan("yearly").await;

    assert_eq!(error_message(&session), locale::VERIFY_FALLBACK);
}

#[tokio::test]
async fn test_non_json_success_body_is_an_error() {
    let server = MockServer::start().await;
    mount_verify(&server, "pay_5", ResponseTemplate::new(200).set_body_string("OK")).await;

    let gateway = HttpGateway::new(&server.uri()).unwrap();
    let err = gateway
        .verify_payment(
            &PaymentId::from_string("pay_5"),
            &subpay_core::AuthToken::from_string("tok-123"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PaymentError::MalformedBody(_)));
    assert_eq!(err.user_message(), locale::VERIFY_FALLBACK);
}

#[tokio::test]
async fn test_unreachable_backend() {
    // grab a free port, then close it again
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let gateway = HttpGateway::new(&base).unwrap();
    let link = format!("{base}/subscriptions/pay/pay_6?token=tok-123");
    let mut session =
        PaymentSession::start(&link, PaymentConfig::default(), gateway, RecordingHost::new())
            .unwrap();
    session.select_plan("6month").await;

    assert_eq!(error_message(&session), locale::VERIFY_FALLBACK);
}

#[tokio::test]
async fn test_close_does_not_cancel_call() {
    let server = MockServer::start().await;
    mount_verify(
        &server,
        "pay_7",
        ResponseTemplate::new(200).set_body_json(json!({"ok": true})),
    )
    .await;

    let mut session = start_session(&server, "pay_7");
    let tickets = session.dispatch(ControllerEvent::SelectPlan("yearly".into()));
    session.dispatch(ControllerEvent::CloseIcon);
    assert!(!session.state().is_open());

    let finished = session.verify(tickets[0].clone()).await;
    session.dispatch(finished);

    assert!(!session.state().is_open());
    assert!(matches!(
        session.state().content(),
        Some(ModalContent::Success {
            plan: PlanType::Yearly,
            ..
        })
    ));
}

#[tokio::test]
async fn test_last_writer_wins_shows_last_resolved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subscriptions/verify-payment/pay_8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let config = PaymentConfig::default().with_stale_policy(StalePolicy::LastWriterWins);
    let mut session = PaymentSession::start(
        &page_link(&server, "pay_8"),
        config,
        HttpGateway::new(&server.uri()).unwrap(),
        RecordingHost::new(),
    )
    .unwrap();

    let first = session.dispatch(ControllerEvent::SelectPlan("6month".into()));
    let second = session.dispatch(ControllerEvent::SelectPlan("unlimited".into()));

    let second_done = session.verify(second[0].clone()).await;
    let first_done = session.verify(first[0].clone()).await;
    session.dispatch(second_done);
    session.dispatch(first_done);

    assert!(matches!(
        session.state().content(),
        Some(ModalContent::Success {
            plan: PlanType::SixMonth,
            ..
        })
    ));
}

#[tokio::test]
async fn test_escaped_payment_id_forwarded_unchanged() {
    let server = MockServer::start().await;
    mount_verify(
        &server,
        "ab%FFcd",
        ResponseTemplate::new(200).set_body_json(json!({"ok": true})),
    )
    .await;

    let mut session = start_session(&server, "ab%FFcd");
    session.select_plan("yearly").await;

    assert!(matches!(
        session.state().content(),
        Some(ModalContent::Success { .. })
    ));
}
