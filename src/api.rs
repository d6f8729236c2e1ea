use gloo_net::http::{Request, RequestBuilder};
use thiserror::Error;
use urlencoding::encode;

use crate::config::api_url;
use crate::models::{roster_from_json, Activity, ErrorBody, MessageBody};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, aborted, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx. `detail` is whatever the server put in its error body.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
    /// 2xx whose body was not what we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Banner text for this failure. Server detail wins when there is one.
    pub fn user_message(&self, rejected_fallback: &str, transport_fallback: &str) -> String {
        match self {
            ApiError::Rejected { detail: Some(d), .. } => d.clone(),
            ApiError::Rejected { detail: None, .. } => rejected_fallback.to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => transport_fallback.to_string(),
        }
    }

    /// Rejections are expected outcomes; everything else goes to the console.
    pub fn is_unexpected(&self) -> bool {
        !matches!(self, ApiError::Rejected { .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

pub fn activities_path() -> String {
    "/activities".to_string()
}

pub fn signup_path(activity: &str, email: &str) -> String {
    format!("/activities/{}/signup?email={}", encode(activity), encode(email))
}

pub fn participant_path(activity: &str, email: &str) -> String {
    format!("/activities/{}/participants/{}", encode(activity), encode(email))
}

fn rejected(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);
    ApiError::Rejected { status, detail }
}

/// Turns a signup/removal response into the server's message or an error.
pub fn interpret_mutation(ok: bool, status: u16, body: &str) -> Result<String, ApiError> {
    if !ok {
        return Err(rejected(status, body));
    }
    serde_json::from_str::<MessageBody>(body)
        .map(|b| b.message)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn interpret_roster(ok: bool, status: u16, body: &str) -> Result<Vec<Activity>, ApiError> {
    if !ok {
        return Err(rejected(status, body));
    }
    roster_from_json(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_activities() -> Result<Vec<Activity>, ApiError> {
    let resp = Request::get(&api_url(&activities_path())).send().await?;
    let body = resp.text().await?;
    interpret_roster(resp.ok(), resp.status(), &body)
}

pub async fn signup(activity: &str, email: &str) -> Result<String, ApiError> {
    send_mutation(Request::post(&api_url(&signup_path(activity, email)))).await
}

pub async fn remove_participant(activity: &str, email: &str) -> Result<String, ApiError> {
    send_mutation(Request::delete(&api_url(&participant_path(activity, email)))).await
}

async fn send_mutation(req: RequestBuilder) -> Result<String, ApiError> {
    let resp = req.send().await?;
    let body = resp.text().await?;
    interpret_mutation(resp.ok(), resp.status(), &body)
}
