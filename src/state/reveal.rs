//! Bookkeeping for scroll-triggered fade-in.
//!
//! Sections are indexed in document order. Each one is revealed at most once;
//! after that the observer stops watching it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(sections: usize) -> Self {
        Self { revealed: vec![false; sections] }
    }

    /// Record an intersection report for `index`.
    ///
    /// Returns `true` exactly once per section: the first time it is reported
    /// as intersecting. The caller then marks it visible and unobserves it.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Sections still waiting to scroll into view. Zero means the observer
    /// has nothing left to do.
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|seen| !**seen).count()
    }
}
