//! REST gateway for the catalog server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Non-browser builds get inert stubs: mutations fail with
//! [`ApiError::Unavailable`], queries yield empty lists.
//!
//! ERROR HANDLING
//! ==============
//! Mutation endpoints surface a typed [`ApiError`] for the workflow to
//! classify; query endpoints degrade to empty results so pages render
//! without a network instead of crashing hydration.

#![allow(clippy::unused_async)]

use serde::{Deserialize, Serialize};

use charts::{Sample, StatsQuery};

use super::error::ApiError;

/// Payload for registering a new channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelDraft {
    /// Public channel username.
    pub username: String,
    /// Geographic-region code.
    pub geo: String,
    /// Language code.
    pub language: String,
    /// Link of the selected category.
    pub category: String,
}

/// A registered channel as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Channel {
    /// Server-assigned identifier.
    pub id: String,
    /// Public channel username.
    pub username: String,
}

/// Payload for creating a discussion topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopicDraft {
    /// Display name.
    pub name: String,
    /// What the topic is about.
    pub description: String,
    /// Short identifier used in the topic's URL.
    pub link: String,
}

/// A discussion topic as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Topic {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the topic is about.
    pub description: String,
    /// Short identifier used in the topic's URL.
    pub link: String,
}

/// A catalog category.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Server-assigned identifier.
    pub id: String,
    /// Name keying the localized label (`common.categories.*`).
    pub name: String,
    /// Link submitted as the registration payload's category reference.
    pub link: String,
}

/// Register a channel via `POST /api/channels`.
///
/// # Errors
///
/// Returns [`ApiError`] when the server rejects the draft or the request
/// fails before reaching it.
pub async fn create_channel(draft: &ChannelDraft) -> Result<Channel, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/channels", draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Create a discussion topic via `POST /api/topics`.
///
/// # Errors
///
/// Returns [`ApiError`] when the server rejects the draft or the request
/// fails before reaching it.
pub async fn create_topic(draft: &TopicDraft) -> Result<Topic, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/topics", draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the catalog categories from `/api/categories`.
///
/// Returns an empty list on any failure or outside the browser.
pub async fn fetch_categories() -> Vec<Category> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/categories").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch all discussion topics from `/api/topics`.
///
/// Returns an empty list on any failure or outside the browser.
pub async fn fetch_topics() -> Vec<Topic> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/topics").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch channel statistics for `query`.
///
/// Returns an empty series on any failure or outside the browser; the
/// chart renders empty rather than erroring.
pub async fn fetch_channel_stats(query: StatsQuery) -> Vec<Sample> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "/api/channels/{}/stats?type={}&range={}&step={}&order={}",
            query.channel_id,
            query.metric.as_str(),
            query.range.as_str(),
            query.step.as_str(),
            query.order.as_str(),
        );
        get_json(&url).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Vec::new()
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(read_error(&resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        leptos::logging::warn!("GET {url} failed with status {}", resp.status());
        return Err(read_error(&resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Pull the machine-readable error code out of a non-success response.
///
/// The mutation endpoints put the code either in `code` or, for older
/// deployments, straight into `message`; take whichever is present.
#[cfg(feature = "hydrate")]
async fn read_error(resp: &gloo_net::http::Response) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        code: Option<String>,
        message: Option<String>,
    }

    let code = match resp.json::<ErrorBody>().await {
        Ok(body) => body.code.or(body.message),
        Err(_) => None,
    };
    ApiError::Server {
        status: resp.status(),
        code,
    }
}
