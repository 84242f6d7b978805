// HTTP client for the Asana REST API.
//
// Only one endpoint is used: POST /tasks/{task_gid}/stories, which appends a
// comment ("story") to a task. Every request sends `Asana-Enable: string_ids`
// so gids come back as strings rather than JSON numbers that would lose
// precision.
//
// API docs: https://developers.asana.com/reference/createstoryfortask

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{PostedComment, TaskCommenter};
use crate::references::TaskRef;

/// Default Asana API base URL.
pub const DEFAULT_ASANA_API_URL: &str = "https://app.asana.com/api/1.0";

/// Thin reqwest wrapper authenticated with a personal access token.
///
/// Built once per run and reused for every comment.
pub struct AsanaClient {
    client: reqwest::Client,
    base_url: String,
}

impl AsanaClient {
    /// Create a client for the given base URL, authenticating with `access_token`.
    pub fn new(base_url: &str, access_token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("asana-backlink/0.1 (github-action)")
            .default_headers(default_headers(access_token)?)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the stories collection for a task.
    pub fn stories_url(&self, task: &TaskRef) -> String {
        format!("{}/tasks/{}/stories", self.base_url, task)
    }
}

#[async_trait]
impl TaskCommenter for AsanaClient {
    async fn add_comment(&self, task: &TaskRef, text: &str) -> Result<PostedComment> {
        let url = self.stories_url(task);

        debug!(task_id = %task, "Asana create story request");

        let response = self
            .client
            .post(&url)
            .json(&CreateStoryRequest::comment(text))
            .send()
            .await
            .with_context(|| format!("Asana request failed for task {task}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Asana returned {status} for task {task}: {body}");
        }

        let story: CreateStoryResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse Asana response for task {task}"))?;

        Ok(PostedComment {
            story_gid: story.data.gid,
        })
    }
}

/// Headers sent on every request: bearer auth and string gids.
pub fn default_headers(access_token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {access_token}"))
        .context("Asana access token contains characters not allowed in a header")?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    headers.insert("asana-enable", HeaderValue::from_static("string_ids"));

    Ok(headers)
}

// --- Asana request/response types ---

/// Asana wraps every request body in a `data` envelope.
#[derive(Debug, Serialize)]
pub struct CreateStoryRequest<'a> {
    pub data: StoryText<'a>,
}

#[derive(Debug, Serialize)]
pub struct StoryText<'a> {
    pub text: &'a str,
}

impl<'a> CreateStoryRequest<'a> {
    pub fn comment(text: &'a str) -> Self {
        Self {
            data: StoryText { text },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateStoryResponse {
    pub data: StoryData,
}

#[derive(Debug, Deserialize)]
pub struct StoryData {
    #[serde(default)]
    pub gid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stories_url_trims_trailing_slash() {
        let client = AsanaClient::new("https://app.asana.com/api/1.0/", "token").unwrap();
        let url = client.stories_url(&TaskRef::new("1200000000000001"));
        assert_eq!(
            url,
            "https://app.asana.com/api/1.0/tasks/1200000000000001/stories"
        );
    }

    #[test]
    fn test_default_headers_request_string_ids() {
        let headers = default_headers("secret").unwrap();
        assert_eq!(headers["asana-enable"], "string_ids");
        assert_eq!(headers[AUTHORIZATION], "Bearer secret");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_default_headers_reject_newline_in_token() {
        assert!(default_headers("bad\ntoken").is_err());
    }
}
