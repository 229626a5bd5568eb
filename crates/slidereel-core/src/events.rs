//! Lifecycle notifications: `init`, `before` and `after`.
//!
//! Each notification goes to the registered callback (if any) and to every
//! subscribed channel as a named [`CarouselEvent`].

use std::fmt;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lifecycle {
    #[serde(rename = "init.slider")]
    Init,
    #[serde(rename = "before.slider")]
    Before,
    #[serde(rename = "after.slider")]
    After,
}

impl Lifecycle {
    pub fn event_name(&self) -> &'static str {
        match self {
            Lifecycle::Init => "init.slider",
            Lifecycle::Before => "before.slider",
            Lifecycle::After => "after.slider",
        }
    }
}

/// Named event delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselEvent {
    #[serde(rename = "event")]
    pub kind: Lifecycle,
    pub index: usize,
    pub item: Item,
}

pub type Callback = Box<dyn FnMut(usize, &Item)>;

#[derive(Default)]
pub struct Notifier {
    init: Option<Callback>,
    before: Option<Callback>,
    after: Option<Callback>,
    subscribers: Vec<mpsc::UnboundedSender<CarouselEvent>>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("init", &self.init.is_some())
            .field("before", &self.before.is_some())
            .field("after", &self.after.is_some())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Notifier {
    /// Replace the callback for `kind`
    pub fn on(&mut self, kind: Lifecycle, callback: Callback) {
        let slot = match kind {
            Lifecycle::Init => &mut self.init,
            Lifecycle::Before => &mut self.before,
            Lifecycle::After => &mut self.after,
        };
        *slot = Some(callback);
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<CarouselEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn emit(&mut self, kind: Lifecycle, index: usize, item: &Item) {
        debug!("{} (index {})", kind.event_name(), index);

        let callback = match kind {
            Lifecycle::Init => self.init.as_mut(),
            Lifecycle::Before => self.before.as_mut(),
            Lifecycle::After => self.after.as_mut(),
        };
        if let Some(callback) = callback {
            callback(index, item);
        }

        // Receivers that went away are dropped silently
        self.subscribers.retain(|tx| {
            tx.send(CarouselEvent {
                kind,
                index,
                item: item.clone(),
            })
            .is_ok()
        });
    }
}
