//! Banner geometry
//!
//! Frames for the pieces of the banner, derived from [`Dimensions`]. The
//! surface owns the actual views; these are the positions it should apply.

use shout_config::ShoutConfig;

/// Height of the strip at the bottom edge that receives drag gestures
pub const GESTURE_CONTAINER_HEIGHT: f32 = 20.0;

/// Gap between the drag indicator and the bottom edge
pub const INDICATOR_BOTTOM_MARGIN: f32 = 5.0;

/// Line height assumed for the single-line title when placing the subtitle
pub const TITLE_LINE_HEIGHT: f32 = 20.0;

/// Gap between title and subtitle
pub const TEXT_SPACING: f32 = 2.5;

/// Fixed measurements of the banner, supplied by the host environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Fully shown height
    pub height: f32,
    /// Screen width
    pub width: f32,
    pub indicator_height: f32,
    pub indicator_width: f32,
    pub image_size: f32,
    pub image_offset: f32,
    pub text_offset: f32,
}

impl Dimensions {
    pub fn with_width(width: f32) -> Self {
        Self {
            height: 80.0,
            width,
            indicator_height: 6.0,
            indicator_width: 50.0,
            image_size: 48.0,
            image_offset: 18.0,
            text_offset: 75.0,
        }
    }

    pub fn from_config(config: &ShoutConfig) -> Self {
        Self {
            height: config.banner_height,
            ..Self::with_width(config.screen_width)
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::from_config(&ShoutConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// Resting layout of a fully shown banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerLayout {
    pub background: Rect,
    pub gesture_container: Rect,
    pub indicator: Rect,
    pub image: Rect,
    pub title: Rect,
    pub subtitle: Rect,
}

impl BannerLayout {
    pub fn new(dims: &Dimensions) -> Self {
        let image = Rect::new(
            dims.image_offset,
            (dims.height - dims.image_size) / 2.0 + 5.0,
            dims.image_size,
            dims.image_size,
        );
        let text_width = dims.width - dims.image_size - dims.image_offset * 2.0;
        let title = Rect::new(dims.text_offset, image.y + 3.0, text_width, TITLE_LINE_HEIGHT);
        let subtitle = Rect::new(
            dims.text_offset,
            title.max_y() + TEXT_SPACING,
            text_width,
            TITLE_LINE_HEIGHT,
        );

        Self {
            background: Rect::new(0.0, 0.0, dims.width, dims.height),
            gesture_container: Rect::new(
                0.0,
                dims.height - GESTURE_CONTAINER_HEIGHT,
                dims.width,
                GESTURE_CONTAINER_HEIGHT,
            ),
            indicator: Rect::new(
                (dims.width - dims.indicator_width) / 2.0,
                dims.height - dims.indicator_height - INDICATOR_BOTTOM_MARGIN,
                dims.indicator_width,
                dims.indicator_height,
            ),
            image,
            title,
            subtitle,
        }
    }
}

/// Positions of the pieces that follow the bottom edge while the height changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeLayout {
    pub background_height: f32,
    pub gesture_container_y: f32,
    pub indicator_y: f32,
}

impl ChromeLayout {
    pub fn for_height(height: f32, dims: &Dimensions) -> Self {
        Self {
            background_height: height,
            gesture_container_y: height - GESTURE_CONTAINER_HEIGHT,
            indicator_y: height - dims.indicator_height - INDICATOR_BOTTOM_MARGIN,
        }
    }
}
