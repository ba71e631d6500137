// File: crates/curve-core/src/types.rs
// Summary: Shared types and constants (canvas size, plot margins).

/// Default surface width in pixels (10 in at 100 dpi).
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels (6 in at 100 dpi).
pub const HEIGHT: i32 = 600;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    // Room for the title above, tick labels and axis titles on the left/bottom.
    fn default() -> Self {
        Self::new(90, 30, 60, 70)
    }
}
