//! Web server for the legal-document analysis API.
//!
//! JSON in/out on every route except the static index page and the
//! multipart upload. Success and failure share transport-level success;
//! they differ only in payload shape (`{summary}` vs `{error}`).

mod assets;
mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::contacts::ContactLog;
use crate::llm::{GeminiClient, TextGenerator};
use crate::tasks::TaskRunner;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub runner: TaskRunner,
    pub settings: Arc<Settings>,
    pub contacts: Arc<ContactLog>,
}

impl AppState {
    /// Build state around an arbitrary generation backend (stubbed in tests).
    pub fn new(settings: Settings, generator: Arc<dyn TextGenerator>) -> Self {
        let contacts = Arc::new(ContactLog::new(settings.contact_log.clone()));
        Self {
            runner: TaskRunner::new(generator),
            settings: Arc::new(settings),
            contacts,
        }
    }
}

/// Start the web server against the real Gemini backend.
pub async fn serve(settings: Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let generator = Arc::new(GeminiClient::new(&settings));
    let state = AppState::new(settings, generator);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
