//! Injectable choice source for the randomized fallback reply.
//!
//! Production uses [`RandomPicker`]; tests substitute [`FixedPicker`] to pin the
//! chosen index and assert exact reply text.

use rand::Rng;

/// Picks an index in `0..len`.
pub trait Picker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random pick.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always returns the same index; clamped by the caller's range check.
#[derive(Debug)]
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}
