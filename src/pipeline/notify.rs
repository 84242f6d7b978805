// Back-reference pipeline: event text -> new task links -> Asana comments.
//
// 1. Extract task links from the current body (and the previous body on edits)
// 2. Keep only links the edit added
// 3. Post "{prefix}{url}" on each of those tasks, one at a time
//
// The first failed comment aborts the run; tasks after it are not attempted.

use anyhow::Result;
use futures::stream::{self, TryStreamExt};
use tracing::info;

use crate::asana::traits::TaskCommenter;
use crate::github::event::EventContext;
use crate::references::diff::new_references;
use crate::references::extract::TaskLinkExtractor;
use crate::references::{ReferenceSet, TaskRef};

/// The comments a run is going to post.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyPlan {
    pub tasks: ReferenceSet,
    pub comment: String,
}

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotifySummary {
    /// Tasks commented on, in the order the comments were posted
    pub notified: Vec<TaskRef>,
}

/// Work out which tasks to comment on and what to say.
///
/// Returns `None` when the event added no task links — the caller should stop
/// there without building an Asana client.
pub fn plan(
    extractor: &TaskLinkExtractor,
    context: &EventContext,
    comment_prefix: Option<&str>,
) -> Result<Option<NotifyPlan>> {
    let tasks = new_references(extractor, &context.text, context.previous.as_deref());

    if tasks.is_empty() {
        info!("No Asana tasks referenced. Done.");
        return Ok(None);
    }

    info!(tasks = ?tasks.ids(), kind = %context.kind, "Found new Asana task links");

    let prefix = match comment_prefix {
        Some(prefix) => prefix.to_string(),
        None => context.default_prefix()?,
    };

    Ok(Some(NotifyPlan {
        tasks,
        comment: format!("{prefix}{}", context.url),
    }))
}

/// Post the planned comment on every task, sequentially.
pub async fn run(commenter: &dyn TaskCommenter, plan: NotifyPlan) -> Result<NotifySummary> {
    let comment = plan.comment.as_str();

    stream::iter(plan.tasks.into_iter().map(Ok::<_, anyhow::Error>))
        .try_fold(NotifySummary::default(), |mut summary, task| async move {
            let posted = commenter.add_comment(&task, comment).await?;
            info!(
                task_id = %task,
                story_gid = ?posted.story_gid,
                "Added the GitHub link to the Asana task"
            );
            summary.notified.push(task);
            Ok::<_, anyhow::Error>(summary)
        })
        .await
}
