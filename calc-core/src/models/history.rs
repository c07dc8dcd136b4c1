use serde::{Deserialize, Serialize};

/// Separator between an equation and its result in a history entry.
const RESULT_SEPARATOR: &str = " = ";

/// A completed equation of the form `"<equation> = <result>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text before the last `" = "`, or the whole entry if there is none.
    pub fn equation(&self) -> &str {
        self.0
            .rsplit_once(RESULT_SEPARATOR)
            .map_or(self.0.as_str(), |(equation, _)| equation)
    }

    /// Text after the last `" = "`, or the whole entry if there is none.
    pub fn result(&self) -> &str {
        self.0
            .rsplit_once(RESULT_SEPARATOR)
            .map_or(self.0.as_str(), |(_, result)| result)
            .trim()
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session-local, append-only log of completed equations.
///
/// Entries are stored oldest first. Only the engine can append.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(
        &mut self,
        entry: HistoryEntry,
    ) {
        self.entries.push(entry);
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
