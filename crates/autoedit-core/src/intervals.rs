//! Style interval primitives.
//!
//! Highlighting crates classify character runs and hand them to the host as
//! intervals; the host's theme layer maps [`StyleId`]s to actual colors.

/// Style ID type
pub type StyleId = u32;

/// A classified character run: `[start, end)` char offsets plus a style id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Start char offset.
    pub start: usize,
    /// End char offset (exclusive).
    pub end: usize,
    /// Style ID
    pub style_id: StyleId,
}

impl Interval {
    /// Create a new interval with `[start, end)` offsets and a style id.
    pub fn new(start: usize, end: usize, style_id: StyleId) -> Self {
        Self {
            start,
            end,
            style_id,
        }
    }

    /// Check if interval contains a specific position
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if two intervals overlap
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_and_overlaps() {
        let a = Interval::new(2, 5, 1);

        assert!(a.contains(2));
        assert!(a.contains(4));
        assert!(!a.contains(5));

        assert!(a.overlaps(&Interval::new(4, 8, 2)));
        assert!(!a.overlaps(&Interval::new(5, 8, 2)));
    }
}
