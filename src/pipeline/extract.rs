// Local extraction: list the task links in a text, optionally only those
// added since a previous revision stored in another file.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::references::diff::new_references;
use crate::references::extract::TaskLinkExtractor;
use crate::references::ReferenceSet;

/// Read a file, or all of stdin when no path is given.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// References in `text` that are not already in the file at `previous`.
pub fn run(
    extractor: &TaskLinkExtractor,
    text: &str,
    previous: Option<&Path>,
) -> Result<ReferenceSet> {
    let previous = previous
        .map(|p| std::fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display())))
        .transpose()?;

    Ok(new_references(extractor, text, previous.as_deref()))
}
