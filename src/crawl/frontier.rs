// src/crawl/frontier.rs
// =============================================================================
// The frontier is the queue of URLs waiting to be visited.
//
// It is a plain first-in, first-out queue. Popping from the front and
// pushing to the back is what makes the crawl breadth-first.
//
// Duplicates are allowed on purpose: the same URL can sit in the queue many
// times. The index decides later whether a visit is worth anything.
// =============================================================================

use std::collections::VecDeque;

#[derive(Debug, Default, Clone)]
pub struct Frontier {
    queue: VecDeque<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    // Number of queued URLs, duplicates included
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    // Appends a URL to the back, no questions asked
    pub fn push(&mut self, url: impl Into<String>) {
        self.queue.push_back(url.into());
    }

    // Removes and returns the front URL, None when the queue is empty
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    // Queued URLs from front to back
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }
}

impl Extend<String> for Frontier {
    fn extend<T: IntoIterator<Item = String>>(&mut self, urls: T) {
        self.queue.extend(urls);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.push("a");
        frontier.push("b");
        frontier.push("c");

        assert_eq!(frontier.pop().as_deref(), Some("a"));
        frontier.push("d");
        assert_eq!(frontier.pop().as_deref(), Some("b"));
        assert_eq!(frontier.pop().as_deref(), Some("c"));
        assert_eq!(frontier.pop().as_deref(), Some("d"));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut frontier = Frontier::new();
        frontier.push("a");
        frontier.push("a");
        frontier.push("b");
        frontier.push("a");

        assert_eq!(frontier.len(), 4);
        assert_eq!(frontier.iter().collect::<Vec<_>>(), vec!["a", "a", "b", "a"]);
    }

    #[test]
    fn test_pop_empty() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
        assert_eq!(frontier.len(), 0);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut frontier = Frontier::new();
        frontier.push("seed");
        frontier.extend(vec!["x".to_string(), "y".to_string(), "x".to_string()]);

        assert_eq!(frontier.iter().collect::<Vec<_>>(), vec!["seed", "x", "y", "x"]);
    }
}
