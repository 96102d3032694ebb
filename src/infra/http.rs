use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::SessionStore;

/// Thin wrapper around one shared reqwest client. Joins paths onto the
/// configured base URL, attaches the bearer token when a session is live,
/// and maps failures onto the error taxonomy. Requests are never retried.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session_store: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, session_store: SessionStore) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_store,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let res = self.send(self.client.get(self.url(path)), "GET", path).await?;
        Ok(res.json().await?)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, AppError> {
        let res = self.send(self.client.post(self.url(path)).json(body), "POST", path).await?;
        Ok(res.json().await?)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, AppError> {
        let res = self.send(self.client.put(self.url(path)).json(body), "PUT", path).await?;
        Ok(res.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send(self.client.delete(self.url(path)), "DELETE", path).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, req: RequestBuilder, method: &'static str, path: &str) -> Result<Response, AppError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("api_request", %request_id, method, path);

        async move {
            let req = match self.session_store.token() {
                Some(token) => req.header("Authorization", format!("Bearer {}", token)),
                None => req,
            };

            let res = req.send().await?;
            debug!(status = %res.status(), "Response received");

            check_status(res, path).await
        }
        .instrument(span)
        .await
    }
}

async fn check_status(res: Response, path: &str) -> Result<Response, AppError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let message = error_body(res).await;
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound {
            path: path.to_string(),
            message,
        });
    }
    Err(AppError::Api { status, message })
}

/// The backend reports failures as `{ "error": "..." }`; anything else
/// reads as no message.
async fn error_body(res: Response) -> Option<String> {
    let text = res.text().await.ok()?;
    let body: Value = serde_json::from_str(&text).ok()?;
    body.get("error").and_then(Value::as_str).map(str::to_string)
}
