// GitHub event payload parsing and resolution into an EventContext.
//
// GitHub Actions writes the triggering webhook payload to the file named by
// GITHUB_EVENT_PATH. We only care about a handful of fields, all of which are
// optional at the serde level. Which of them must be present depends on the
// event type, and that check happens once, in EventContext::from_payload.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// The subset of a webhook payload we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub pull_request: Option<LinkedItem>,
    #[serde(default)]
    pub issue: Option<LinkedItem>,
    #[serde(default)]
    pub comment: Option<LinkedItem>,
    #[serde(default)]
    pub changes: Option<Changes>,
    #[serde(default)]
    pub sender: Option<Sender>,
}

/// A pull request, issue, or comment — anything with a page and a body.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedItem {
    pub html_url: String,
    /// GitHub sends `null` for an empty PR description
    #[serde(default)]
    pub body: Option<String>,
}

/// The `changes` object on `edited` events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Changes {
    #[serde(default)]
    pub body: Option<ChangedField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangedField {
    #[serde(default)]
    pub from: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub login: String,
}

/// Which kind of event triggered the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PullRequest,
    IssueComment,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::PullRequest => write!(f, "pull request"),
            EventKind::IssueComment => write!(f, "issue comment"),
        }
    }
}

/// Everything the pipeline needs from the triggering event, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct EventContext {
    pub kind: EventKind,
    /// Page to link back to: the PR itself, or the specific comment
    pub url: String,
    /// Current body text (empty if GitHub sent none)
    pub text: String,
    /// Body before the edit; only set for `edited` events with a non-empty previous body
    pub previous: Option<String>,
    /// Login of the user who triggered the event
    pub actor: Option<String>,
}

impl EventContext {
    /// Resolve a payload into a context, rejecting unsupported event shapes.
    pub fn from_payload(payload: EventPayload) -> Result<Self> {
        let previous = previous_text(&payload);
        let actor = payload.sender.map(|s| s.login);

        if let Some(pr) = payload.pull_request {
            info!(url = %pr.html_url, "Extracting information from pull request");
            return Ok(Self {
                kind: EventKind::PullRequest,
                url: pr.html_url,
                text: pr.body.unwrap_or_default(),
                previous,
                actor,
            });
        }

        if let (Some(issue), Some(comment)) = (payload.issue, payload.comment) {
            info!(url = %issue.html_url, "Extracting information from issue");
            return Ok(Self {
                kind: EventKind::IssueComment,
                url: comment.html_url,
                text: comment.body.unwrap_or_default(),
                previous,
                actor,
            });
        }

        anyhow::bail!("Must be used on pull_request and issue_comment events only")
    }

    /// The comment prefix used when none is configured: "{login} referenced in: ".
    pub fn default_prefix(&self) -> Result<String> {
        let actor = self
            .actor
            .as_deref()
            .context("Event payload has no sender; set a comment prefix explicitly")?;
        Ok(format!("{actor} referenced in: "))
    }
}

/// Previous body for `edited` events, if there was one.
fn previous_text(payload: &EventPayload) -> Option<String> {
    if payload.action.as_deref() != Some("edited") {
        return None;
    }

    payload
        .changes
        .as_ref()
        .and_then(|c| c.body.as_ref())
        .and_then(|b| b.from.clone())
        .filter(|from| !from.is_empty())
}

/// Read and parse the event payload file.
pub fn load_payload(path: &Path) -> Result<EventPayload> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event payload at {}", path.display()))?;

    debug!(payload = %raw, "Raw event payload");

    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse event payload at {}", path.display()))
}

/// Read the payload file and resolve it into a context in one step.
pub fn load_context(path: &Path) -> Result<EventContext> {
    EventContext::from_payload(load_payload(path)?)
}
