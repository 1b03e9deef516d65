use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Image shown at the leading edge of the banner.
///
/// The controller never inspects it; it is handed to the surface as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BannerImage {
    /// Themed icon name
    Name(String),
    /// Image file on disk
    File(PathBuf),
}

/// Callback invoked when the user taps the banner.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// What a single banner shows and for how long.
#[derive(Clone)]
pub struct Content {
    pub image: Option<BannerImage>,
    pub title: String,
    pub subtitle: String,
    /// Time until the banner dismisses itself. Zero keeps it until tapped or dragged away.
    pub duration: Duration,
    pub action: Option<Action>,
}

impl Content {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            image: None,
            title: title.into(),
            subtitle: subtitle.into(),
            duration: Duration::ZERO,
            action: None,
        }
    }

    pub fn image(mut self, image: BannerImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Whether this content arms the auto-dismiss deadline.
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Content")
            .field("image", &self.image)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("duration", &self.duration)
            .field("action", &self.action.as_ref().map(|_| "Fn()"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_content_defaults_never_auto_dismiss() {
        let content = Content::new("Ramon Gilabert", "Just commented a post");
        assert!(content.image.is_none());
        assert!(content.action.is_none());
        assert!(!content.auto_dismisses());
    }

    #[test]
    fn test_content_builder() {
        let content = Content::new("Title", "Subtitle")
            .image(BannerImage::Name("mail-unread-symbolic".into()))
            .duration(Duration::from_secs(2));

        assert_eq!(content.image, Some(BannerImage::Name("mail-unread-symbolic".into())));
        assert!(content.auto_dismisses());
    }

    #[test]
    fn test_action_shared_between_clones() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let content = Content::new("a", "b").action(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let copy = content.clone();

        (content.action.unwrap())();
        (copy.action.unwrap())();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_hides_callback() {
        let content = Content::new("a", "b").action(|| {});
        let debug = format!("{:?}", content);
        assert!(debug.contains("Fn()"));
        assert!(debug.contains("title: \"a\""));
    }
}
