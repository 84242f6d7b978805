// Unit tests for GitHub event payload resolution.
//
// Tests serde deserialization of trimmed-down webhook payloads and the
// validation in EventContext::from_payload, all without a runner.

use std::io::Write;

use asana_backlink::github::event::{load_context, EventContext, EventKind, EventPayload};

fn context(json: &str) -> anyhow::Result<EventContext> {
    let payload: EventPayload = serde_json::from_str(json).unwrap();
    EventContext::from_payload(payload)
}

#[test]
fn pull_request_opened() {
    let ctx = context(
        r#"{
            "action": "opened",
            "pull_request": {
                "html_url": "https://github.com/acme/app/pull/7",
                "body": "Implements https://app.asana.com/0/123/456"
            },
            "sender": {"login": "octocat"}
        }"#,
    )
    .unwrap();
    assert_eq!(ctx.kind, EventKind::PullRequest);
    assert_eq!(ctx.url, "https://github.com/acme/app/pull/7");
    assert_eq!(ctx.text, "Implements https://app.asana.com/0/123/456");
    assert!(ctx.previous.is_none());
    assert_eq!(ctx.actor.as_deref(), Some("octocat"));
}

#[test]
fn pull_request_null_body_is_empty_text() {
    let ctx = context(
        r#"{"action": "opened", "pull_request": {"html_url": "https://github.com/acme/app/pull/7", "body": null}}"#,
    )
    .unwrap();
    assert_eq!(ctx.text, "");
}

#[test]
fn pull_request_edited_reads_previous_body() {
    let ctx = context(
        r#"{
            "action": "edited",
            "changes": {"body": {"from": "Old body https://app.asana.com/0/1/2"}},
            "pull_request": {"html_url": "https://github.com/acme/app/pull/7", "body": "New body"},
            "sender": {"login": "octocat"}
        }"#,
    )
    .unwrap();
    assert_eq!(
        ctx.previous.as_deref(),
        Some("Old body https://app.asana.com/0/1/2")
    );
}

#[test]
fn edited_title_only_has_no_previous_body() {
    let ctx = context(
        r#"{
            "action": "edited",
            "changes": {"title": {"from": "Old title"}},
            "pull_request": {"html_url": "https://github.com/acme/app/pull/7", "body": "Body"}
        }"#,
    )
    .unwrap();
    assert!(ctx.previous.is_none());
}

#[test]
fn edited_with_empty_previous_body_has_no_previous() {
    let ctx = context(
        r#"{
            "action": "edited",
            "changes": {"body": {"from": ""}},
            "pull_request": {"html_url": "https://github.com/acme/app/pull/7", "body": "Body"}
        }"#,
    )
    .unwrap();
    assert!(ctx.previous.is_none());
}

#[test]
fn changes_ignored_when_not_edited() {
    let ctx = context(
        r#"{
            "action": "synchronize",
            "changes": {"body": {"from": "stale"}},
            "pull_request": {"html_url": "https://github.com/acme/app/pull/7", "body": "Body"}
        }"#,
    )
    .unwrap();
    assert!(ctx.previous.is_none());
}

#[test]
fn issue_comment_uses_comment_url_and_body() {
    let ctx = context(
        r#"{
            "action": "created",
            "issue": {"html_url": "https://github.com/acme/app/issues/3", "body": "Issue body"},
            "comment": {
                "html_url": "https://github.com/acme/app/issues/3#issuecomment-99",
                "body": "Tracked in https://app.asana.com/0/123/456"
            },
            "sender": {"login": "hubot"}
        }"#,
    )
    .unwrap();
    assert_eq!(ctx.kind, EventKind::IssueComment);
    assert_eq!(
        ctx.url,
        "https://github.com/acme/app/issues/3#issuecomment-99"
    );
    assert_eq!(ctx.text, "Tracked in https://app.asana.com/0/123/456");
}

#[test]
fn issue_without_comment_is_rejected() {
    let err = context(
        r#"{"action": "opened", "issue": {"html_url": "https://github.com/acme/app/issues/3", "body": "x"}}"#,
    )
    .unwrap_err();
    assert!(err
        .to_string()
        .contains("pull_request and issue_comment events only"));
}

#[test]
fn push_event_is_rejected() {
    assert!(context(r#"{"ref": "refs/heads/main", "commits": []}"#).is_err());
}

#[test]
fn default_prefix_uses_sender_login() {
    let ctx = context(
        r#"{"pull_request": {"html_url": "https://github.com/acme/app/pull/7"}, "sender": {"login": "octocat"}}"#,
    )
    .unwrap();
    assert_eq!(ctx.default_prefix().unwrap(), "octocat referenced in: ");
}

#[test]
fn default_prefix_without_sender_is_an_error() {
    let ctx = context(r#"{"pull_request": {"html_url": "https://github.com/acme/app/pull/7"}}"#)
        .unwrap();
    assert!(ctx.default_prefix().is_err());
}

#[test]
fn load_context_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"pull_request": {{"html_url": "https://github.com/acme/app/pull/1", "body": "hi"}}}}"#
    )
    .unwrap();

    let ctx = load_context(file.path()).unwrap();
    assert_eq!(ctx.url, "https://github.com/acme/app/pull/1");
    assert_eq!(ctx.text, "hi");
}

#[test]
fn load_context_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_context(&dir.path().join("event.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read event payload"));
}

#[test]
fn load_context_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let err = load_context(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse event payload"));
}
