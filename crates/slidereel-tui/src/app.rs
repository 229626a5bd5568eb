use std::sync::Arc;

use ratatui::layout::Rect;
use slidereel_core::{
    AppConfig, AutoAdvanceHandle, Carousel, CarouselEvent, Item, Lifecycle, Trigger,
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::input::Action;
use crate::keymap::Keymap;
use crate::layout::Areas;
use crate::stage::TerminalStage;
use crate::theme::Theme;

pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub keymap: Keymap,
    pub carousel: Carousel<TerminalStage>,
    pub areas: Areas,
    /// Auto-advance control, absent when no timer runs
    pub autoplay: Option<AutoAdvanceHandle>,
    /// Pointer currently over the mask
    pub hovering: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Most recent lifecycle notification
    pub last_event: Option<CarouselEvent>,
    /// Timer paused by a pagination click, restarted on its `after`
    restart_pending: bool,
    events: UnboundedReceiver<CarouselEvent>,
}

impl App {
    /// Build the carousel from the configured slides. It is initialized on
    /// the first call to [`App::layout`], once the mask can be measured.
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Self {
        let items = Item::from_slides(&config.slides);
        let stage = TerminalStage::new(config.ui.item_width, config.ui.easing);
        let mut carousel = Carousel::new(items, config.slider.clone(), stage);
        let events = carousel.subscribe();

        Self {
            keymap: Keymap::from_config(&config.slider),
            config,
            theme,
            carousel,
            areas: Areas::default(),
            autoplay: None,
            hovering: false,
            should_quit: false,
            status_message: None,
            last_event: None,
            restart_pending: false,
            events,
        }
    }

    pub fn set_autoplay(&mut self, handle: AutoAdvanceHandle) {
        self.autoplay = Some(handle);
    }

    /// Recompute screen areas. A changed mask width re-measures the carousel.
    pub fn layout(&mut self, size: Rect) {
        let (prev, next) = self.config.slider.buttons_enabled();
        self.areas = Areas::compute(size, prev, next, self.config.slider.navigation_enabled());

        let changed = self
            .carousel
            .stage_mut()
            .set_mask_width(self.areas.mask.width);

        if !self.carousel.is_initialized() {
            self.carousel.init();
        } else if changed {
            self.carousel.dispatch(Trigger::Resize);
        }
        self.drain_events();
    }

    /// Advance animations and join finished transitions. Returns whether
    /// the next frame should come quickly.
    pub fn update(&mut self) -> bool {
        self.carousel.stage_mut().update();
        let joined = self.carousel.pump();
        if joined > 0 {
            debug!("Joined {} transition(s)", joined);
        }
        self.drain_events();
        self.needs_fast_update()
    }

    pub fn needs_fast_update(&self) -> bool {
        self.carousel.is_animating() || self.carousel.stage().needs_redraw()
    }

    /// Route a trigger from outside the input loop, e.g. the auto-advance timer
    pub fn handle_trigger(&mut self, trigger: Trigger) {
        if trigger == Trigger::Tick && self.hovering {
            return;
        }
        self.carousel.dispatch(trigger);
        self.drain_events();
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if let Some(autoplay) = &self.autoplay {
                    autoplay.shutdown();
                }
                self.should_quit = true;
            }
            Action::Next => {
                self.carousel.dispatch(Trigger::Next);
            }
            Action::Prev => {
                self.carousel.dispatch(Trigger::Prev);
            }
            Action::Goto(index) => {
                if index < self.carousel.item_count() {
                    self.carousel.dispatch(Trigger::Goto(index));
                }
            }
            Action::Paginate(index) => {
                if let Some(autoplay) = &self.autoplay {
                    autoplay.pause();
                }
                if self.carousel.dispatch(Trigger::Paginate(index)) {
                    self.restart_pending = self.autoplay.is_some();
                } else if let Some(autoplay) = &self.autoplay {
                    autoplay.restart();
                }
            }
            Action::Key(code) => {
                self.carousel.dispatch(Trigger::Key(code));
            }
            Action::ToggleStepByStep => {
                let step_by_step = !self.carousel.config().step_by_step;
                self.carousel.set_step_by_step(step_by_step);
                info!("Step-by-step navigation: {}", step_by_step);
                self.set_status(if step_by_step {
                    "Step-by-step navigation"
                } else {
                    "Direct jump navigation"
                });
            }
            Action::Hover(over) => self.set_hovering(over),
            Action::None => {}
        }
        self.drain_events();
    }

    fn set_hovering(&mut self, over: bool) {
        if over == self.hovering {
            return;
        }
        self.hovering = over;
        if let Some(autoplay) = &self.autoplay {
            if over {
                autoplay.pause();
            } else {
                autoplay.resume();
            }
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!("{} index={}", event.kind.event_name(), event.index);
            if event.kind == Lifecycle::After && self.restart_pending {
                self.restart_pending = false;
                if let Some(autoplay) = &self.autoplay {
                    debug!("Pagination finished, restarting auto-advance");
                    autoplay.restart();
                }
            }
            self.last_event = Some(event);
        }
    }
}
