//! Bounds for the random edge weights.

/// Smallest weight drawn by default.
pub const MIN_WEIGHT: u32 = 1;

/// Largest weight drawn by default.
pub const MAX_WEIGHT: u32 = 20;

/// Closed range `[min, max]` of edge weights.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct WeightRange {
    /// Smallest weight, inclusive.
    pub min: u32,
    /// Largest weight, inclusive.
    pub max: u32,
}

impl WeightRange {
    /// Create a new range. Use [`WeightRange::is_valid`] before sampling from it.
    pub fn new(min: u32, max: u32) -> Self {
        WeightRange { min, max }
    }

    /// Weights must be positive and the range non-empty.
    pub fn is_valid(&self) -> bool {
        self.min >= 1 && self.min <= self.max
    }

    /// Whether `w` lies in the range.
    pub fn contains(&self, w: u32) -> bool {
        self.min <= w && w <= self.max
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        WeightRange::new(MIN_WEIGHT, MAX_WEIGHT)
    }
}
