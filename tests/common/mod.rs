#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::{SystemTime, UNIX_EPOCH},
};

use axum::Router;
use bizdesk::db::IntakeStorage;
use bizdesk::error::DeskError;
use bizdesk::mail::{MailReceipt, MailTransport, NotificationDispatcher, OutboundEmail};
use bizdesk::{DeskState, desk_router};
use futures::future::BoxFuture;

/// A SQLite file under the temp dir, removed on drop.
pub struct TempDb {
    path: PathBuf,
}

impl TempDb {
    pub fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "bizdesk-{}-{}-{}.sqlite",
            tag,
            std::process::id(),
            nanos
        ));
        Self { path }
    }

    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    pub async fn storage(&self) -> IntakeStorage {
        IntakeStorage::connect(&self.url())
            .await
            .expect("failed to open temp database")
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        for suffix in ["-wal", "-shm"] {
            let _ = fs::remove_file(format!("{}{}", self.path.display(), suffix));
        }
    }
}

/// In-process relay: records what it was asked to send, optionally refusing.
#[derive(Default)]
pub struct StubTransport {
    pub refuse: bool,
    pub sent: Mutex<Vec<OutboundEmail>>,
}

impl StubTransport {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn refusing() -> Arc<Self> {
        Arc::new(Self {
            refuse: true,
            sent: Mutex::default(),
        })
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("poisoned").clone()
    }
}

impl MailTransport for StubTransport {
    fn send<'a>(
        &'a self,
        email: &'a OutboundEmail,
    ) -> BoxFuture<'a, Result<MailReceipt, DeskError>> {
        self.sent.lock().expect("poisoned").push(email.clone());
        let refuse = self.refuse;
        Box::pin(async move {
            if refuse {
                return Err(DeskError::MailRejected {
                    status: 503,
                    detail: "relay unavailable".to_string(),
                });
            }
            Ok(MailReceipt {
                message_id: Some("stub-1".to_string()),
            })
        })
    }

    fn verify(&self) -> BoxFuture<'_, Result<(), DeskError>> {
        Box::pin(async { Ok(()) })
    }
}

pub fn app(storage: IntakeStorage, transport: Arc<dyn MailTransport>) -> Router {
    let dispatcher = NotificationDispatcher::new(
        transport,
        "\"BIJAYBIZ Website\" <desk@example.com>",
        "ops@example.com",
    );
    desk_router(DeskState::new(storage, dispatcher))
}
