mod common;

use std::sync::Arc;
use std::time::Duration;

use bizdesk::db::IntakeStorage;
use bizdesk::mail::{HttpMailTransport, MailTransport};
use bizdesk::ui::{ContactForm, FormStatus, IntakeClient, NewsletterForm};
use secrecy::Secret;
use tokio::net::TcpListener;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{TempDb, app};

/// Serve the router on an ephemeral port and return a client pointed at it.
async fn spawn_app(storage: IntakeStorage, transport: Arc<dyn MailTransport>) -> IntakeClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind random port");
    let addr = listener.local_addr().expect("no local addr");
    let router = app(storage, transport);
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server crashed");
    });
    IntakeClient::new(Url::parse(&format!("http://{addr}")).unwrap()).unwrap()
}

async fn relay(status: u16) -> (MockServer, Arc<dyn MailTransport>) {
    let mock_server = MockServer::start().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(serde_json::json!({"MessageID": "m-42"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    let transport = HttpMailTransport::new(
        Url::parse(&mock_server.uri()).unwrap(),
        Secret::new("server-token".to_string()),
        Duration::from_secs(2),
    )
    .unwrap();
    let transport: Arc<dyn MailTransport> = Arc::new(transport);
    (mock_server, transport)
}

fn filled_contact_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.draft.name = "Ada".into();
    form.draft.email = "ada@x.com".into();
    form.draft.message = "hi".into();
    form
}

#[tokio::test]
async fn contact_form_reaches_success_and_relay_gets_one_email() {
    let db = TempDb::new("client-contact");
    let storage = db.storage().await;
    let (_relay, transport) = relay(200).await;
    let client = spawn_app(storage.clone(), transport).await;

    let mut form = filled_contact_form();
    let status = form.submit(&client).await.unwrap().clone();

    match status {
        FormStatus::Success(confirmation) => {
            assert_eq!(confirmation.email_sent, Some(true));
        }
        other => panic!("unexpected status {other:?}"),
    }
    assert!(form.draft.name.is_empty());

    let rows = storage.list_inquiries().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].service, "USA LLC Registration");

    form.send_another();
    assert_eq!(form.status(), &FormStatus::Idle);
}

#[tokio::test]
async fn contact_form_succeeds_when_relay_refuses() {
    let db = TempDb::new("client-relay-500");
    let storage = db.storage().await;
    let (_relay, transport) = relay(500).await;
    let client = spawn_app(storage.clone(), transport).await;

    let mut form = filled_contact_form();
    match form.submit(&client).await.unwrap() {
        FormStatus::Success(confirmation) => assert_eq!(confirmation.email_sent, Some(false)),
        other => panic!("unexpected status {other:?}"),
    }
    assert_eq!(storage.count_inquiries().await.unwrap(), 1);
}

#[tokio::test]
async fn contact_form_shows_server_validation_error() {
    let db = TempDb::new("client-invalid");
    let storage = db.storage().await;
    let client = spawn_app(storage.clone(), common::StubTransport::accepting()).await;

    let mut form = ContactForm::default();
    form.draft.email = "ada@x.com".into();
    let status = form.submit(&client).await.unwrap().clone();

    assert_eq!(status, FormStatus::Error("Missing required fields".into()));
    assert_eq!(form.draft.email, "ada@x.com");
    assert_eq!(storage.count_inquiries().await.unwrap(), 0);
}

#[tokio::test]
async fn newsletter_form_twice_then_empty() {
    let db = TempDb::new("client-newsletter");
    let storage = db.storage().await;
    let client = spawn_app(storage.clone(), common::StubTransport::accepting()).await;

    let mut form = NewsletterForm::default();
    for expected in ["Subscribed successfully!", "Already subscribed!"] {
        form.email = "a@b.com".into();
        assert!(form.submit(&client).await.unwrap());
        match form.status() {
            FormStatus::Success(c) => assert_eq!(c.message.as_deref(), Some(expected)),
            other => panic!("unexpected status {other:?}"),
        }
        assert!(form.email.is_empty());
    }

    // empty field: no request, state untouched
    let before = form.status().clone();
    assert!(!form.submit(&client).await.unwrap());
    assert_eq!(form.status(), &before);
    assert_eq!(storage.count_subscribers().await.unwrap(), 1);
}

#[tokio::test]
async fn unreachable_server_puts_form_in_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = IntakeClient::new(Url::parse(&format!("http://{addr}")).unwrap()).unwrap();

    let mut form = NewsletterForm::default();
    form.email = "a@b.com".into();
    assert!(form.submit(&client).await.unwrap());
    assert_eq!(form.status(), &FormStatus::Error("Failed. Try again.".into()));
    // field is kept for a retry
    assert_eq!(form.email, "a@b.com");
}
