/// Number of past patterns shown in the history panel
pub const RECENT_LIMIT: usize = 5;

/// One completed generation, as the user saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub description: String,
    pub regex: String,
    pub explanation: String,
}

/// Append-only record of this session's generations, oldest first
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The last [`RECENT_LIMIT`] entries, newest first, numbered from 1
    pub fn recent(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries
            .iter()
            .rev()
            .take(RECENT_LIMIT)
            .enumerate()
            .map(|(idx, entry)| (idx + 1, entry))
    }
}
