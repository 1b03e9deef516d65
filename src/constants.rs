// Constants for the shout host

// ============================================================================
// Host Screen Constants
// ============================================================================

/// Name of the overlay the banner attaches to
pub(crate) const OVERLAY_NAME: &str = "navigation";

// ============================================================================
// Text Display Constants
// ============================================================================

/// Maximum title length before truncation in the rendered frame
pub(crate) const TITLE_MAX_LENGTH: usize = 32;

/// Maximum subtitle length before truncation in the rendered frame
pub(crate) const SUBTITLE_MAX_LENGTH: usize = 48;

/// Terminal rows used per 20 units of banner height
pub(crate) const UNITS_PER_ROW: f32 = 20.0;

// ============================================================================
// Channel and Buffer Constants
// ============================================================================

/// Buffer size for the host message channel
pub(crate) const CHANNEL_BUFFER_SIZE: usize = 100;
