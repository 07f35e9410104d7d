//! Unit types: Dp and density conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: Density) -> f32 {
        self.0 * density.factor()
    }

    pub fn from_px(px: f32, density: Density) -> Self {
        Self(px / density.factor())
    }
}

/// Display density factor relative to the baseline (1.0 = mdpi-style 1:1).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(f32);

impl Density {
    /// Creates a density scale. Non-positive factors fall back to 1.0.
    pub fn new(factor: f32) -> Self {
        if factor > 0.0 {
            Self(factor)
        } else {
            Self(1.0)
        }
    }

    #[inline]
    pub fn factor(&self) -> f32 {
        self.0
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.0
    }

    pub fn px_to_dp(&self, px: f32) -> f32 {
        px / self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}
