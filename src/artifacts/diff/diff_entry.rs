use crate::artifacts::hashing::digest::Digest;
use colored::{ColoredString, Colorize};
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiffKind {
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffEntry {
    pub path: String,
    pub kind: DiffKind,
    pub stored_digest: Option<Digest>,
    pub current_digest: Option<Digest>,
}

impl DiffEntry {
    pub fn added(path: String, current: Digest) -> Self {
        DiffEntry::new(path, DiffKind::Added, None, Some(current))
    }

    pub fn removed(path: String, stored: Digest) -> Self {
        DiffEntry::new(path, DiffKind::Removed, Some(stored), None)
    }

    pub fn modified(path: String, stored: Digest, current: Digest) -> Self {
        DiffEntry::new(path, DiffKind::Modified, Some(stored), Some(current))
    }

    /// `<current> | <stored> | <path>`, with a dash placeholder of
    /// `digest_width` for a missing side
    pub fn render(&self, digest_width: usize) -> String {
        let placeholder = "-".repeat(digest_width);
        let current = self
            .current_digest
            .as_ref()
            .map_or(placeholder.as_str(), |digest| digest.as_ref());
        let stored = self
            .stored_digest
            .as_ref()
            .map_or(placeholder.as_str(), |digest| digest.as_ref());

        format!("{} | {} | {}", current, stored, self.path)
    }

    pub fn render_colored(&self, digest_width: usize) -> ColoredString {
        let line = self.render(digest_width);
        match self.kind {
            DiffKind::Added => line.as_str().green(),
            DiffKind::Removed => line.as_str().red(),
            DiffKind::Modified => line.as_str().yellow(),
        }
    }
}
