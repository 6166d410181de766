//! Color scale for the heatmap.

/// Number of intensity steps.
pub const LEVELS: usize = 5;

/// A fixed five-step color scale, index 0 = no activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [&'static str; LEVELS],
}

/// The only configured scheme.
pub const LIGHT: Palette = Palette {
    colors: ["#ffffff", "#9be9a8", "#30c463", "#30a14e", "#216e39"],
};

impl Palette {
    /// Color for a provider level. Levels above 4 use the strongest color.
    pub fn color(&self, level: u8) -> &'static str {
        self.colors[usize::from(level).min(LEVELS - 1)]
    }

    /// All colors, weakest first. Used for the "Less … More" legend.
    pub fn colors(&self) -> &[&'static str; LEVELS] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        LIGHT
    }
}
