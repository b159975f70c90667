use std::collections::BTreeMap;

/// Configuration for the sliding context window
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Maximum number of chunk entries kept resident
    pub capacity: usize,
    /// How many preceding chunk indices contribute context
    pub lookback: usize,
    /// Maximum number of context points handed to the model
    pub tail: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            lookback: 3,
            tail: 5,
        }
    }
}

/// Bounded sliding-window store of per-chunk context points.
///
/// Eviction is FIFO by index: once more than `capacity` entries are
/// resident, the entry with the smallest chunk index goes first, regardless
/// of when it was written.
#[derive(Debug)]
pub struct ContextTracker {
    entries: BTreeMap<usize, Vec<String>>,
    config: ContextConfig,
}

impl ContextTracker {
    pub fn new(config: ContextConfig) -> Self {
        Self {
            entries: BTreeMap::new(),
            config,
        }
    }

    /// Store the context points extracted from a chunk
    pub fn record(&mut self, index: usize, points: Vec<String>) {
        self.entries.insert(index, points);
        while self.entries.len() > self.config.capacity {
            self.entries.pop_first();
        }
    }

    /// Collect recent context for the given chunk index.
    ///
    /// Gathers points recorded for up to `lookback` preceding indices in
    /// key-ascending order, keeps the last `tail` points of that list, and
    /// joins them with newlines. Empty when nothing is in range.
    pub fn context_for(&self, index: usize) -> String {
        let from = index.saturating_sub(self.config.lookback);
        let mut points: Vec<&str> = Vec::new();

        for (_, entry) in self.entries.range(from..index) {
            points.extend(entry.iter().map(String::as_str));
        }

        let keep_from = points.len().saturating_sub(self.config.tail);
        points[keep_from..].join("\n")
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_capacity_evicts_smallest_index() {
        let mut tracker = ContextTracker::new(ContextConfig::default());

        for i in 0..11 {
            tracker.record(i, points(&[&format!("point {i}")]));
        }

        assert_eq!(tracker.len(), 10);
        // Index 0 was evicted, so looking back from 1 finds nothing
        assert_eq!(tracker.context_for(1), "");
        assert!(!tracker.context_for(10).is_empty());
    }

    #[test]
    fn test_context_only_reflects_preceding_indices() {
        let mut tracker = ContextTracker::new(ContextConfig::default());
        tracker.record(2, points(&["from two"]));
        tracker.record(3, points(&["from three"]));
        tracker.record(4, points(&["from four"]));

        let context = tracker.context_for(4);

        assert!(context.contains("from two"));
        assert!(context.contains("from three"));
        assert!(!context.contains("from four"));
    }

    #[test]
    fn test_lookback_is_bounded() {
        let mut tracker = ContextTracker::new(ContextConfig::default());
        tracker.record(0, points(&["too old"]));
        tracker.record(5, points(&["recent"]));

        let context = tracker.context_for(6);

        assert!(!context.contains("too old"));
        assert!(context.contains("recent"));
    }

    #[test]
    fn test_tail_keeps_last_five_points() {
        let mut tracker = ContextTracker::new(ContextConfig::default());
        tracker.record(0, points(&["a", "b", "c", "d"]));
        tracker.record(1, points(&["e", "f", "g"]));

        let context = tracker.context_for(2);

        assert_eq!(context, "c\nd\ne\nf\ng");
    }

    #[test]
    fn test_empty_range_is_empty_string() {
        let tracker = ContextTracker::new(ContextConfig::default());
        assert_eq!(tracker.context_for(0), "");
        assert_eq!(tracker.context_for(7), "");
    }
}
