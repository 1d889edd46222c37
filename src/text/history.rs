//! Bounded undo history of whole-text checkpoints.

/// Maximum number of edit blocks retained. Oldest blocks are evicted
/// first once the cap is exceeded.
pub const MAX_EDIT_BLOCKS: usize = 10;

/// The kind of edit a block checkpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Insertion,
    Deletion,
}

impl EditKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insertion => "Insertion",
            Self::Deletion => "Deletion",
        }
    }
}

/// An undo checkpoint: the full buffer text as it was before a run of
/// same-kind edits began.
///
/// Checkpoints store whole-buffer snapshots rather than diffs. With the
/// cap at [`MAX_EDIT_BLOCKS`] this bounds memory at eleven copies of the
/// text in the worst case; a diff-based block would slot in behind the
/// same interface for very large documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditBlock {
    pub kind: EditKind,
    pub label: String,
    pub snapshot: String,
}

/// Bounded FIFO log of edit blocks.
#[derive(Clone, Debug, Default)]
pub struct EditHistory {
    blocks: Vec<EditBlock>,
}

impl EditHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// The recorded blocks, oldest first.
    #[must_use]
    pub fn blocks(&self) -> &[EditBlock] {
        &self.blocks
    }

    /// Kind of the most recent block, if any.
    #[must_use]
    pub fn latest_kind(&self) -> Option<EditKind> {
        self.blocks.last().map(|block| block.kind)
    }

    /// Append a checkpoint and evict from the front past the cap.
    pub fn push_checkpoint(&mut self, kind: EditKind, snapshot: String) {
        self.blocks.push(EditBlock {
            kind,
            label: kind.as_str().to_string(),
            snapshot,
        });

        if self.blocks.len() > MAX_EDIT_BLOCKS {
            let excess = self.blocks.len() - MAX_EDIT_BLOCKS;
            self.blocks.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_kind() {
        let mut history = EditHistory::new();
        assert_eq!(history.latest_kind(), None);

        history.push_checkpoint(EditKind::Insertion, String::new());
        assert_eq!(history.latest_kind(), Some(EditKind::Insertion));

        history.push_checkpoint(EditKind::Deletion, "abc".to_string());
        assert_eq!(history.latest_kind(), Some(EditKind::Deletion));
    }

    #[test]
    fn test_block_label_matches_kind() {
        let mut history = EditHistory::new();
        history.push_checkpoint(EditKind::Deletion, String::new());
        assert_eq!(history.blocks()[0].label, "Deletion");
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let mut history = EditHistory::new();
        for i in 0..15 {
            let kind = if i % 2 == 0 {
                EditKind::Insertion
            } else {
                EditKind::Deletion
            };
            history.push_checkpoint(kind, i.to_string());
        }

        assert_eq!(history.blocks().len(), MAX_EDIT_BLOCKS);
        // Blocks 0..5 were evicted; the oldest survivor is block 5.
        assert_eq!(history.blocks()[0].snapshot, "5");
        assert_eq!(history.blocks()[9].snapshot, "14");
    }
}
