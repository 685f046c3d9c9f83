use crate::error::{BoardError, Result};
use std::collections::HashSet;

/// The element ids a host page provides
///
/// The board only needs to know which anchors exist; instantiating
/// templates into live elements is the host's job.
#[derive(Debug, Clone, Default)]
pub struct Page {
    anchors: HashSet<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchors<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchors: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_anchor(&mut self, id: impl Into<String>) {
        self.anchors.insert(id.into());
    }

    pub fn has_anchor(&self, id: &str) -> bool {
        self.anchors.contains(id)
    }

    /// Fails with `MissingAnchor` when the page lacks `id`
    pub fn require(&self, id: &str) -> Result<()> {
        if self.has_anchor(id) {
            Ok(())
        } else {
            Err(BoardError::MissingAnchor(id.to_string()))
        }
    }
}
