//! Local unlock rules for the page's discovery surfaces. Each rule only
//! reports that its condition was met; recording is the tracker's job.

use chrono::{NaiveTime, Timelike};

/// ↑ ↑ ↓ ↓ ← → ← → B A, as `KeyboardEvent.key` values.
pub const KONAMI: [&str; 10] = [
    "arrowup",
    "arrowup",
    "arrowdown",
    "arrowdown",
    "arrowleft",
    "arrowright",
    "arrowleft",
    "arrowright",
    "b",
    "a",
];

/// Watches key presses for a fixed sequence.
#[derive(Clone, Debug)]
pub struct SequenceDetector {
    sequence: Vec<String>,
    progress: usize,
}

impl Default for SequenceDetector {
    fn default() -> Self {
        Self::konami()
    }
}

impl SequenceDetector {
    pub fn new(sequence: &[&str]) -> Self {
        Self {
            sequence: sequence.iter().map(|k| k.to_lowercase()).collect(),
            progress: 0,
        }
    }

    pub fn konami() -> Self {
        Self::new(&KONAMI)
    }

    /// Feed one key; true when it completes the sequence.
    pub fn push(&mut self, key: &str) -> bool {
        if self.sequence.is_empty() {
            return false;
        }
        let key = key.to_lowercase();
        if self.sequence[self.progress] == key {
            self.progress += 1;
        } else {
            // Longest suffix of what we have seen (plus this key) that is
            // still a prefix of the sequence.
            let mut seen: Vec<&str> = self.sequence[..self.progress]
                .iter()
                .map(String::as_str)
                .collect();
            seen.push(&key);
            self.progress = (1..=seen.len())
                .rev()
                .find(|&len| {
                    len <= self.sequence.len()
                        && seen[seen.len() - len..]
                            .iter()
                            .zip(&self.sequence[..len])
                            .all(|(a, b)| *a == b.as_str())
                })
                .unwrap_or(0);
        }
        if self.progress == self.sequence.len() {
            self.progress = 0;
            return true;
        }
        false
    }
}

/// Counts clicks until a threshold. Stops counting once satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickCounter {
    clicks: u32,
    threshold: u32,
    done: bool,
}

impl ClickCounter {
    pub fn new(threshold: u32) -> Self {
        Self {
            clicks: 0,
            threshold: threshold.max(1),
            done: false,
        }
    }

    /// A counter for a surface whose egg was found in an earlier visit.
    pub fn already_done(threshold: u32) -> Self {
        Self {
            done: true,
            ..Self::new(threshold)
        }
    }

    /// True exactly once, on the click that reaches the threshold.
    pub fn click(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.clicks += 1;
        if self.clicks >= self.threshold {
            self.done = true;
            return true;
        }
        false
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Midnight hour in the visitor's local time.
pub fn is_midnight(time: NaiveTime) -> bool {
    time.hour() == 0
}
