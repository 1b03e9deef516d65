//! Banner presentation state machine
//!
//! A single [`BannerController`] serves every caller of a host. It holds at
//! most one [`Content`]; a new `show` supersedes whatever is on screen.
//! All events arrive on the host's event thread, so there is no locking.
//! Timer expiries and animation completions carry the id they were issued
//! with and are dropped if that id is no longer current.

use std::time::Duration;

use shout_config::ShoutConfig;
use tracing::{debug, info, trace};

use crate::content::Content;
use crate::drag::DragParams;
use crate::layout::{BannerLayout, ChromeLayout, Dimensions};
use crate::surface::{AnimationId, BannerId, Container, DeadlineTimer, PresentableSurface};

/// Where the banner is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Appearing,
    Displayed,
    Dragging,
    Dismissing,
}

impl Phase {
    /// Appearing, displayed or being dragged
    pub fn is_shown(self) -> bool {
        matches!(self, Phase::Appearing | Phase::Displayed | Phase::Dragging)
    }
}

/// Inputs the host dispatches into the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerEvent {
    Tap,
    DragBegin,
    /// Cumulative vertical translation since the drag began, positive downward
    DragUpdate(f32),
    DragEnd(f32),
    TimerFired(BannerId),
    AnimationFinished(AnimationId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoutError {
    /// The host has no overlay to attach the banner to
    NoOverlayTarget,
}

impl std::fmt::Display for ShoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShoutError::NoOverlayTarget => {
                write!(f, "The host must provide an overlay to show the banner on")
            }
        }
    }
}

impl std::error::Error for ShoutError {}

/// Timings for the three height transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub appear: Duration,
    pub dismiss: Duration,
    pub settle: Duration,
}

impl Timings {
    pub fn from_config(config: &ShoutConfig) -> Self {
        Self {
            appear: config.appear_duration(),
            dismiss: config.dismiss_duration(),
            settle: config.settle_duration(),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_config(&ShoutConfig::default())
    }
}

pub struct BannerController<S, T> {
    surface: S,
    timer: T,
    timings: Timings,
    drag: DragParams,
    phase: Phase,
    content: Option<Content>,
    banner: BannerId,
    display_height: f32,
    /// Armed auto-dismiss deadline
    deadline: Option<BannerId>,
    drag_active: bool,
    pending_auto_dismiss: bool,
    /// Only completions of this animation are acted upon
    animation: Option<AnimationId>,
    animation_seq: u64,
    attached: bool,
}

impl<S, T> BannerController<S, T>
where
    S: PresentableSurface,
    T: DeadlineTimer,
{
    pub fn new(surface: S, timer: T, config: &ShoutConfig) -> Self {
        Self {
            surface,
            timer,
            timings: Timings::from_config(config),
            drag: DragParams::from_config(config),
            phase: Phase::Hidden,
            content: None,
            banner: BannerId(0),
            display_height: 0.0,
            deadline: None,
            drag_active: false,
            pending_auto_dismiss: false,
            animation: None,
            animation_seq: 0,
            attached: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn display_height(&self) -> f32 {
        self.display_height
    }

    pub fn current_content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Id of the most recent `show`
    pub fn banner_id(&self) -> BannerId {
        self.banner
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn pending_auto_dismiss(&self) -> bool {
        self.pending_auto_dismiss
    }

    pub fn is_timer_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    fn dimensions(&self) -> Dimensions {
        self.surface.dimensions()
    }

    /// Show `content` over `host`, replacing any banner already on screen.
    ///
    /// The new banner always slides in from zero height, even if the previous
    /// one was still partially visible.
    pub fn show<C>(&mut self, content: Content, host: &C) -> Result<BannerId, ShoutError>
    where
        C: Container<Target = S::Target>,
    {
        let Some(target) = host.overlay_target() else {
            tracing::error!("Cannot show banner: host has no overlay target");
            return Err(ShoutError::NoOverlayTarget);
        };

        self.supersede();

        self.banner = BannerId(self.banner.0 + 1);
        let dims = self.dimensions();
        info!(banner = %self.banner, title = %content.title, "showing banner");

        self.surface.attach(&target);
        self.attached = true;
        self.surface
            .set_content(content.image.as_ref(), &content.title, &content.subtitle);
        self.surface.set_layout(&BannerLayout::new(&dims));
        self.surface.set_height_immediate(0.0);
        self.display_height = 0.0;

        if content.auto_dismisses() {
            self.timer.schedule(self.banner, content.duration);
            self.deadline = Some(self.banner);
        }
        self.content = Some(content);

        self.phase = Phase::Appearing;
        self.animate_to(dims.height, self.timings.appear);

        Ok(self.banner)
    }

    /// Drop every trace of the banner currently on screen, if any.
    fn supersede(&mut self) {
        if let Some(id) = self.deadline.take() {
            self.timer.cancel(id);
        }
        self.animation = None;
        self.drag_active = false;
        self.pending_auto_dismiss = false;
        if self.attached {
            debug!(banner = %self.banner, "superseding banner");
            self.surface.detach();
            self.attached = false;
        }
        self.content = None;
        self.phase = Phase::Hidden;
    }

    pub fn handle(&mut self, event: BannerEvent) {
        match event {
            BannerEvent::Tap => self.tap(),
            BannerEvent::DragBegin => self.drag_begin(),
            BannerEvent::DragUpdate(dy) => self.drag_update(dy),
            BannerEvent::DragEnd(dy) => self.drag_end(dy),
            BannerEvent::TimerFired(id) => self.timer_fired(id),
            BannerEvent::AnimationFinished(id) => self.animation_finished(id),
        }
    }

    /// Invoke the content's action, then dismiss.
    pub fn tap(&mut self) {
        if !self.phase.is_shown() {
            debug!(phase = ?self.phase, "ignoring tap");
            return;
        }

        if let Some(action) = self.content.as_ref().and_then(|c| c.action.clone()) {
            trace!(banner = %self.banner, "invoking banner action");
            action();
        }
        self.begin_dismissal(self.timings.dismiss);
    }

    /// Hide the banner as if its deadline had passed. Does nothing if it is
    /// already hidden or on its way out.
    pub fn dismiss(&mut self) {
        if !self.phase.is_shown() {
            debug!(phase = ?self.phase, "ignoring dismiss");
            return;
        }
        self.begin_dismissal(self.timings.dismiss);
    }

    pub fn timer_fired(&mut self, id: BannerId) {
        if self.deadline != Some(id) {
            debug!(banner = %id, "ignoring stale deadline");
            return;
        }
        self.deadline = None;

        match self.phase {
            Phase::Dragging => {
                debug!(banner = %id, "deadline passed during drag, deferring dismissal");
                self.pending_auto_dismiss = true;
            }
            Phase::Appearing | Phase::Displayed => self.begin_dismissal(self.timings.dismiss),
            Phase::Hidden | Phase::Dismissing => {}
        }
    }

    pub fn drag_begin(&mut self) {
        if !matches!(self.phase, Phase::Appearing | Phase::Displayed) {
            debug!(phase = ?self.phase, "ignoring drag begin");
            return;
        }
        // Any in-flight appear or settle animation is superseded by 1:1 tracking
        self.animation = None;
        self.drag_active = true;
        self.phase = Phase::Dragging;
    }

    pub fn drag_update(&mut self, dy: f32) {
        if self.phase != Phase::Dragging {
            trace!(phase = ?self.phase, "ignoring drag update");
            return;
        }
        let dims = self.dimensions();
        self.display_height = self.drag.height_for(dims.height, dy);
        self.surface.set_height_immediate(self.display_height);
        self.surface
            .place_chrome(ChromeLayout::for_height(self.display_height, &dims), Duration::ZERO);
    }

    pub fn drag_end(&mut self, dy: f32) {
        if self.phase != Phase::Dragging {
            debug!(phase = ?self.phase, "ignoring drag end");
            return;
        }
        let dismiss = self.drag.dismisses(dy) || self.pending_auto_dismiss;
        self.drag_active = false;
        self.pending_auto_dismiss = false;

        if dismiss {
            self.begin_dismissal(self.timings.settle);
        } else {
            // The deadline, if still armed, keeps its original expiry
            self.phase = Phase::Displayed;
            let height = self.dimensions().height;
            self.animate_to(height, self.timings.settle);
        }
    }

    pub fn animation_finished(&mut self, id: AnimationId) {
        if self.animation != Some(id) {
            trace!(?id, "ignoring stale animation completion");
            return;
        }
        self.animation = None;

        match self.phase {
            Phase::Appearing => self.phase = Phase::Displayed,
            Phase::Dismissing => self.finish_dismissal(),
            _ => {}
        }
    }

    fn begin_dismissal(&mut self, duration: Duration) {
        if let Some(id) = self.deadline.take() {
            self.timer.cancel(id);
        }
        self.drag_active = false;
        self.pending_auto_dismiss = false;
        self.phase = Phase::Dismissing;
        debug!(banner = %self.banner, "dismissing banner");
        self.animate_to(0.0, duration);
    }

    fn finish_dismissal(&mut self) {
        if self.attached {
            self.surface.detach();
            self.attached = false;
        }
        self.content = None;
        self.display_height = 0.0;
        self.phase = Phase::Hidden;
        info!(banner = %self.banner, "banner hidden");
    }

    fn animate_to(&mut self, height: f32, duration: Duration) {
        self.animation_seq += 1;
        let id = AnimationId {
            banner: self.banner,
            seq: self.animation_seq,
        };
        self.animation = Some(id);
        self.display_height = height;

        let dims = self.dimensions();
        self.surface.animate_height(height, duration, id);
        self.surface
            .place_chrome(ChromeLayout::for_height(height, &dims), duration);
    }
}
