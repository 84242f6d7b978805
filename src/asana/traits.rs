// Task commenter trait — the seam between the notification pipeline and Asana.
//
// The pipeline only needs "add this text as a comment on that task". Keeping
// that behind a trait lets the composition tests drive the whole run with a
// recording fake instead of a live Asana workspace.

use anyhow::Result;
use async_trait::async_trait;

use crate::references::TaskRef;

/// What the remote service returned for a posted comment.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedComment {
    /// Asana story gid of the new comment (string form, never numeric)
    pub story_gid: Option<String>,
}

/// Something that can append a text comment to a task.
#[async_trait]
pub trait TaskCommenter: Send + Sync {
    /// Add `text` as a comment on `task`. Called exactly once per task per run.
    async fn add_comment(&self, task: &TaskRef, text: &str) -> Result<PostedComment>;
}

/// Commenter used for `--dry-run`: logs what would be posted, touches nothing.
pub struct DryRunCommenter;

#[async_trait]
impl TaskCommenter for DryRunCommenter {
    async fn add_comment(&self, task: &TaskRef, text: &str) -> Result<PostedComment> {
        tracing::info!(task_id = %task, comment = text, "Dry run: would add comment");
        Ok(PostedComment { story_gid: None })
    }
}
