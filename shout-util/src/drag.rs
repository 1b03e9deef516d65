//! Drag gesture math
//!
//! Maps the cumulative vertical translation of a drag to the banner height,
//! and decides where the banner settles once the drag is released.

use shout_config::ShoutConfig;

/// Thresholds governing how the banner follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragParams {
    /// Downward translation after which the banner stretches with damping
    pub overshoot_threshold: f32,
    /// Divisor for the translation once past the threshold
    pub overshoot_damping: f32,
    /// Upward translation that dismisses on release
    pub dismiss_threshold: f32,
}

impl Default for DragParams {
    fn default() -> Self {
        Self::from_config(&ShoutConfig::default())
    }
}

impl DragParams {
    pub fn from_config(config: &ShoutConfig) -> Self {
        Self {
            overshoot_threshold: config.overshoot_threshold,
            overshoot_damping: config.overshoot_damping,
            dismiss_threshold: config.dismiss_drag_threshold,
        }
    }

    /// Height of the banner while dragged `dy` units from where the drag began.
    ///
    /// Positive `dy` is downward. Never negative.
    pub fn height_for(&self, full_height: f32, dy: f32) -> f32 {
        let height = if dy >= self.overshoot_threshold {
            full_height + self.overshoot_threshold + dy / self.overshoot_damping
        } else {
            full_height + dy
        };
        height.max(0.0)
    }

    /// Whether releasing the drag at `dy` throws the banner away.
    pub fn dismisses(&self, dy: f32) -> bool {
        dy < -self.dismiss_threshold
    }
}
