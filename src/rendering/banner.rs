use crate::constants::*;
use crate::handlers::Message;
use shout_util::{
    AnimationId, BannerEvent, BannerImage, BannerLayout, ChromeLayout, Container, Dimensions,
    PresentableSurface,
};
use std::borrow::Cow;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// Overlay of a host screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub name: String,
}

/// The host screen the banner is shown over
#[derive(Debug, Clone, Default)]
pub struct Screen {
    overlay: Option<Overlay>,
}

impl Screen {
    pub fn with_overlay(name: &str) -> Self {
        Self {
            overlay: Some(Overlay {
                name: name.to_string(),
            }),
        }
    }
}

impl Container for Screen {
    type Target = Overlay;

    fn overlay_target(&self) -> Option<Overlay> {
        self.overlay.clone()
    }
}

/// Renders the banner as text frames on stdout.
///
/// Height animations complete after their duration on the tokio timer and
/// are reported back through the host channel.
pub struct TerminalSurface {
    tx: Sender<Message>,
    dims: Dimensions,
    overlay: Option<Overlay>,
    height: f32,
    title: String,
    subtitle: String,
    image: Option<BannerImage>,
    layout: Option<BannerLayout>,
    chrome: Option<ChromeLayout>,
    animation: Option<JoinHandle<()>>,
}

impl TerminalSurface {
    pub fn new(dims: Dimensions, tx: Sender<Message>) -> Self {
        Self {
            tx,
            dims,
            overlay: None,
            height: 0.0,
            title: String::new(),
            subtitle: String::new(),
            image: None,
            layout: None,
            chrome: None,
            animation: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Text rendition of the banner at its current height.
    pub fn frame(&self) -> String {
        let rows = (self.height / UNITS_PER_ROW).round() as usize;
        if rows == 0 {
            return String::new();
        }

        let icon = match &self.image {
            Some(BannerImage::Name(name)) => Cow::from(format!("[{}] ", name)),
            Some(BannerImage::File(path)) => Cow::from(format!(
                "[{}] ",
                path.file_name().and_then(|n| n.to_str()).unwrap_or("image")
            )),
            None => Cow::from(""),
        };
        // Roughly 8 units per column of the laid out text width
        let (title_max, subtitle_max) = match &self.layout {
            Some(layout) => {
                let columns = (layout.title.width / 8.0) as usize;
                (columns.min(TITLE_MAX_LENGTH), columns.min(SUBTITLE_MAX_LENGTH))
            }
            None => (TITLE_MAX_LENGTH, SUBTITLE_MAX_LENGTH),
        };
        let mut lines = vec![format!("{}{}", icon, truncate(&self.title, title_max))];
        if rows > 1 {
            lines.push(truncate(&self.subtitle, subtitle_max).into_owned());
        }
        // Drag indicator on the bottom row
        while lines.len() + 1 < rows {
            lines.push(String::new());
        }
        lines.push("───".to_string());
        lines.join("\n")
    }

    fn render(&self) {
        let Some(overlay) = &self.overlay else {
            return;
        };
        tracing::trace!(overlay = %overlay.name, height = self.height, chrome = ?self.chrome, "render");
        let frame = self.frame();
        if !frame.is_empty() {
            println!("{}\n", frame);
        }
    }
}

fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > max {
        Cow::from(format!("{}...", line.chars().take(max).collect::<String>()))
    } else {
        Cow::from(line)
    }
}

impl PresentableSurface for TerminalSurface {
    type Target = Overlay;

    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn attach(&mut self, target: &Overlay) {
        tracing::debug!("attaching banner to {}", target.name);
        self.overlay = Some(target.clone());
    }

    fn detach(&mut self) {
        if let Some(handle) = self.animation.take() {
            handle.abort();
        }
        if let Some(overlay) = self.overlay.take() {
            tracing::debug!("detached banner from {}", overlay.name);
        }
        self.height = 0.0;
    }

    fn set_content(&mut self, image: Option<&BannerImage>, title: &str, subtitle: &str) {
        self.image = image.cloned();
        self.title = title.to_string();
        self.subtitle = subtitle.to_string();
    }

    fn set_layout(&mut self, layout: &BannerLayout) {
        self.layout = Some(*layout);
    }

    fn animate_height(&mut self, height: f32, duration: Duration, id: AnimationId) {
        if let Some(handle) = self.animation.take() {
            handle.abort();
        }
        self.height = height;
        self.render();

        let tx = self.tx.clone();
        self.animation = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if let Err(err) = tx
                .send(Message::Banner(BannerEvent::AnimationFinished(id)))
                .await
            {
                tracing::error!("Failed to report animation completion: {:?}", err);
            }
        }));
    }

    fn set_height_immediate(&mut self, height: f32) {
        self.height = height;
        self.render();
    }

    fn place_chrome(&mut self, chrome: ChromeLayout, _duration: Duration) {
        self.chrome = Some(chrome);
    }
}
