//! Scroll-triggered reveal bookkeeping.
//!
//! Elements are tagged once at startup, grouped by the selector that
//! matched them. Within a group each element's transition delay grows by
//! one stagger step, restarting at zero for the next group. Reveal is
//! one-way: nothing ever clears the flag.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Transition delay for the `index`-th element of a selector group.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u64 {
    index as u64 * u64::from(step_ms)
}

/// CSS `transition-delay` value for the `index`-th element of a group.
#[must_use]
pub fn transition_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", stagger_delay_ms(index, step_ms))
}

/// Revealed flags for the fixed set of tagged elements.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { revealed: vec![false; len] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Record an intersection notification.
    ///
    /// Returns `true` only the first time element `index` intersects; that is
    /// the caller's cue to mark it active and stop watching it.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Whether every element has been revealed and the watcher can go.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}
