pub mod content;
pub mod controller;
pub mod drag;
pub mod layout;
pub mod surface;

pub use content::{Action, BannerImage, Content};
pub use controller::{BannerController, BannerEvent, Phase, ShoutError, Timings};
pub use drag::DragParams;
pub use layout::{BannerLayout, ChromeLayout, Dimensions, Rect};
pub use surface::{AnimationId, BannerId, Container, DeadlineTimer, PresentableSurface};
