use std::collections::VecDeque;

/// One narrated event in the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Position in the full append sequence, including evicted entries.
    pub seq: u64,
    /// Scheduler tick during which the event was resolved.
    pub tick: u64,
    pub message: String,
}

/// Bounded, append-only record of resolved actions.
///
/// Entries keep the order in which actions were applied. Once `capacity` is
/// reached the oldest entry is evicted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    appended: u64,
}

impl BattleLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            appended: 0,
        }
    }

    pub fn push(&mut self, tick: u64, message: impl Into<String>) {
        while self.entries.len() >= self.capacity.max(1) {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            seq: self.appended,
            tick,
            message: message.into(),
        });
        self.appended += 1;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries ever appended, including evicted ones.
    pub fn total_appended(&self) -> u64 {
        self.appended
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// The newest `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    /// Messages currently retained, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.message.as_str()).collect()
    }
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::with_capacity(crate::config::BattleConfig::DEFAULT_LOG_CAPACITY)
    }
}
