// Session transcript: every processed line together with its reply

use std::collections::VecDeque;

/// Default number of entries kept before the oldest ones are dropped
pub const DEFAULT_TRANSCRIPT_LIMIT: usize = 1000;

/// How a transcript entry should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Successful evaluation or lookup
    Value,
    /// Successful assignment (no reply)
    Silent,
    /// Help text and other informational replies
    Message,
    /// Any rejected input
    Error,
}

/// One processed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub input: String,
    pub reply: Option<String>,
    pub kind: EntryKind,
}

/// Bounded history of processed lines
#[derive(Debug, Clone)]
pub struct Transcript {
    entries: VecDeque<TranscriptEntry>,
    max_entries: usize,
}

impl Transcript {
    pub fn new(max_entries: usize) -> Self {
        Transcript {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Append an entry, dropping the oldest one once the limit is reached
    pub fn record(&mut self, input: String, reply: Option<String>, kind: EntryKind) {
        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(TranscriptEntry { input, reply, kind });
    }

    pub fn entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// Flatten into display lines: the echoed input (kind `None`), then the
    /// reply if any.
    pub fn lines(&self) -> Vec<(String, Option<EntryKind>)> {
        self.entries
            .iter()
            .flat_map(|entry| {
                let mut lines = vec![(format!("> {}", entry.input), None)];
                if let Some(reply) = &entry.reply {
                    lines.push((reply.clone(), Some(entry.kind)));
                }
                lines
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Maximum number of entries kept
    pub fn limit(&self) -> usize {
        self.max_entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSCRIPT_LIMIT)
    }
}
