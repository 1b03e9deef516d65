//! Collaborators driven by the banner controller
//!
//! The controller owns no views and no clock. It talks to the rendering
//! side through [`PresentableSurface`], finds where to attach through
//! [`Container`], and schedules its auto-dismiss deadline through
//! [`DeadlineTimer`]. Completions come back as events carrying the id they
//! were issued with.

use std::fmt;
use std::time::Duration;

use crate::content::BannerImage;
use crate::layout::{BannerLayout, ChromeLayout, Dimensions};

/// Identity of one `show` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BannerId(pub u64);

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "banner#{}", self.0)
    }
}

/// Ticket for one height animation. Reported back through
/// `BannerController::animation_finished` once the surface finishes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId {
    pub banner: BannerId,
    pub seq: u64,
}

/// The view that actually draws the banner.
pub trait PresentableSurface {
    /// Whatever the host hands out to attach the banner to
    type Target;

    fn dimensions(&self) -> Dimensions;

    /// Insert the banner into the host's overlay.
    fn attach(&mut self, target: &Self::Target);

    /// Remove the banner from whatever it is attached to.
    fn detach(&mut self);

    /// Populate the display fields. Sizing text to fit is up to the surface.
    fn set_content(&mut self, image: Option<&BannerImage>, title: &str, subtitle: &str);

    fn set_layout(&mut self, layout: &BannerLayout);

    /// Start animating to `height`. The surface must later report `id` as finished,
    /// unless it is dropped because a newer animation replaced it.
    fn animate_height(&mut self, height: f32, duration: Duration, id: AnimationId);

    fn set_height_immediate(&mut self, height: f32);

    /// Reposition the chrome that follows the bottom edge. Zero duration means no animation.
    fn place_chrome(&mut self, chrome: ChromeLayout, duration: Duration);
}

/// A host screen the banner can be shown over.
pub trait Container {
    type Target;

    /// The overlay the banner attaches to, or `None` if this host has none.
    fn overlay_target(&self) -> Option<Self::Target>;
}

/// One-shot timer for the auto-dismiss deadline. Expiry is reported back
/// through `BannerController::timer_fired` with the same id.
pub trait DeadlineTimer {
    fn schedule(&mut self, id: BannerId, after: Duration);

    fn cancel(&mut self, id: BannerId);
}
