//! Minimal Telegram Bot API client: long-poll `getUpdates` plus
//! `sendMessage`. Only the fields this bot reads are modeled.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::error::BotServiceError;

/// Long-poll timeout passed to `getUpdates`, in seconds.
pub const POLL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub from: Option<Sender>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// The sending Telegram user.
#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
}

impl Sender {
    /// The identity string correlated with web registrations. Accounts
    /// without a public username fall back to `user_<id>`.
    pub fn handle(&self) -> String {
        self.username
            .clone()
            .unwrap_or_else(|| format!("user_{}", self.id))
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base: String,
}

impl TelegramClient {
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed (startup only).
    pub fn new(api_url: &str, bot_token: &str) -> Self {
        // The request timeout must outlive the long poll.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base: format!("{}/bot{}", api_url.trim_end_matches('/'), bot_token),
        }
    }

    /// Fetch the next batch of updates, blocking server-side up to
    /// [`POLL_TIMEOUT_SECS`].
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, BotServiceError> {
        let mut request = self
            .http
            .get(format!("{}/getUpdates", self.base))
            .query(&[("timeout", POLL_TIMEOUT_SECS as i64)]);
        if let Some(offset) = offset {
            request = request.query(&[("offset", offset)]);
        }
        let response: ApiResponse<Vec<Update>> = request
            .send()
            .await
            .map_err(transport_err("getUpdates request"))?
            .json()
            .await
            .map_err(transport_err("getUpdates body"))?;
        api_result(response)
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotServiceError> {
        let response: ApiResponse<serde_json::Value> = self
            .http
            .post(format!("{}/sendMessage", self.base))
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .map_err(transport_err("sendMessage request"))?
            .json()
            .await
            .map_err(transport_err("sendMessage body"))?;
        api_result(response).map(|_| ())
    }
}

fn transport_err(context: &'static str) -> impl FnOnce(reqwest::Error) -> BotServiceError {
    move |e| BotServiceError::Telegram(anyhow::Error::new(e).context(context))
}

fn api_result<T>(response: ApiResponse<T>) -> Result<T, BotServiceError> {
    if !response.ok {
        return Err(BotServiceError::Telegram(anyhow::anyhow!(
            "api call failed: {}",
            response.description.as_deref().unwrap_or("no description")
        )));
    }
    response.result.ok_or_else(|| {
        BotServiceError::Telegram(anyhow::anyhow!("api response missing result field"))
    })
}
