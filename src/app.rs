// Host event loop
// ===============
//
// Every input reaches the banner controller through one channel and one
// `update` call at a time:
//
// - stdin commands (show, gestures, dismiss) from `subscriptions::input`
// - auto-dismiss deadlines from `subscriptions::timer`
// - animation completions from `rendering::banner`
//
// The controller therefore never needs locking, and any completion that
// arrives after its banner was replaced is rejected by id.

use crate::constants::*;
use crate::handlers::Message;
use crate::rendering::{Screen, TerminalSurface};
use crate::subscriptions::{input, timer::TokioTimer};
use shout_config::ShoutConfig;
use shout_util::{BannerController, Content, Dimensions};
use std::ops::ControlFlow;
use tokio::sync::mpsc::{Receiver, Sender, channel};

pub async fn run(config: ShoutConfig) -> anyhow::Result<()> {
    let (tx, mut rx) = channel(CHANNEL_BUFFER_SIZE);
    let input = tokio::spawn(input::listen(tokio::io::stdin(), tx.clone()));

    let mut app = Shout::new(config, Screen::with_overlay(OVERLAY_NAME), tx);
    let result = app.event_loop(&mut rx).await;

    input.abort();
    result
}

pub(crate) struct Shout {
    controller: BannerController<TerminalSurface, TokioTimer>,
    screen: Screen,
    config: ShoutConfig,
}

impl Shout {
    pub(crate) fn new(config: ShoutConfig, screen: Screen, tx: Sender<Message>) -> Self {
        let surface = TerminalSurface::new(Dimensions::from_config(&config), tx.clone());
        let timer = TokioTimer::new(tx);
        Self {
            controller: BannerController::new(surface, timer, &config),
            screen,
            config,
        }
    }

    async fn event_loop(&mut self, rx: &mut Receiver<Message>) -> anyhow::Result<()> {
        while let Some(message) = rx.recv().await {
            if self.update(message)?.is_break() {
                break;
            }
        }
        Ok(())
    }

    pub(crate) fn update(&mut self, message: Message) -> anyhow::Result<ControlFlow<()>> {
        match message {
            Message::Show {
                title,
                subtitle,
                duration,
            } => {
                let duration = duration.unwrap_or_else(|| self.config.default_duration());
                let opened = title.clone();
                let content = Content::new(title, subtitle)
                    .duration(duration)
                    .action(move || tracing::info!("opened banner \"{}\"", opened));
                // A host without an overlay is a setup error, not a runtime condition
                self.controller.show(content, &self.screen)?;
            }
            Message::Banner(event) => self.controller.handle(event),
            Message::Dismiss => self.controller.dismiss(),
            Message::Status => self.status(),
            Message::Quit => {
                tracing::info!("shutting down");
                return Ok(ControlFlow::Break(()));
            }
            Message::Ignore => {}
        }
        Ok(ControlFlow::Continue(()))
    }

    fn status(&self) {
        let surface = self.controller.surface();
        tracing::info!(
            banner = %self.controller.banner_id(),
            phase = ?self.controller.phase(),
            height = self.controller.display_height(),
            rendered_height = surface.height(),
            attached = surface.is_attached(),
            timer_armed = self.controller.is_timer_armed(),
            timer_running = self.controller.timer().is_pending(),
            dragging = self.controller.is_drag_active(),
            pending_auto_dismiss = self.controller.pending_auto_dismiss(),
            title = self.controller.current_content().map(|c| c.title.as_str()),
            "status"
        );
    }
}
