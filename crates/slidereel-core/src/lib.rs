pub mod autoplay;
pub mod barrier;
pub mod carousel;
pub mod chain;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod item;
mod navigation;
pub mod positions;
pub mod registry;
pub mod stage;
pub mod strip;
mod sync;
pub mod trigger;

pub use autoplay::{AutoAdvance, AutoAdvanceHandle, TimerControl};
pub use barrier::{Ticket, TrackDone};
pub use carousel::Carousel;
pub use chain::Step;
pub use config::{AppConfig, EasingType, SliderConfig};
pub use error::{Error, Result};
pub use events::{CarouselEvent, Lifecycle};
pub use geometry::{compute_geometry, Geometry};
pub use item::Item;
pub use positions::PositionTable;
pub use registry::Registry;
pub use stage::{Animation, InstantStage, Stage, Track};
pub use strip::{Slot, Strip};
pub use trigger::Trigger;
