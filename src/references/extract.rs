// Asana task link extraction.
//
// Recognises the URL shapes Asana has used for task links over the years:
//
//   https://app.asana.com/0/{project}/{task}
//   https://app.asana.com/0/home/{workspace}/{task}
//   https://app.asana.com/1/{workspace}/project/{project}/task/{task}
//
// The leading segment ("0" or "1") is the URL format version. Anything after
// the task id (e.g. "/f" for full-screen) is ignored.

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::{ReferenceSet, TaskRef};

/// Alternatives are tried left to right, so the `home/` and `/project/.../task/`
/// forms must come before the plain `{project}/{task}` form or the latter would
/// capture the wrong segment.
const TASK_LINK_PATTERN: &str = r"(?i)https?://app\.asana\.com/\d+/(?:home/\d+/|\d+/project/\d+/task/|\d+/)(?P<task_id>\d+)";

/// Pulls Asana task references out of free text.
///
/// The compiled pattern holds no match position between calls, so running
/// the extractor twice on the same text always yields the same set.
pub struct TaskLinkExtractor {
    pattern: Regex,
}

impl TaskLinkExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(TASK_LINK_PATTERN).context("Invalid Asana task link pattern")?;
        Ok(Self { pattern })
    }

    /// Extract every task referenced in `text`, deduplicated.
    pub fn extract(&self, text: &str) -> ReferenceSet {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.name("task_id"))
            .map(|m| TaskRef::new(m.as_str()))
            .collect()
    }
}
