//! Carousel instance: strip layout, transition bookkeeping and the join.
//!
//! A carousel is either idle or animating exactly one transition. Track
//! completions reported by the stage are drained by [`Carousel::pump`]; the
//! join of a transition runs once its countdown reaches zero.

use tracing::{debug, info, warn};

use crate::barrier::{completion_channel, Arrival, CompletionReceiver, CompletionSender, Countdown, Ticket};
use crate::chain::{Chain, Step};
use crate::config::SliderConfig;
use crate::events::{Callback, CarouselEvent, Lifecycle, Notifier};
use crate::geometry::{compute_geometry, Geometry};
use crate::item::Item;
use crate::positions::PositionTable;
use crate::stage::{Animation, Stage, Track};
use crate::strip::Strip;

/// What the join does once the strip is back at rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Finish {
    /// Show caption, mark indicator, emit `after`
    Sync,
    /// Hand control back to the chain executor
    Chain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Motion {
    Step(Step),
    Jump(isize),
}

#[derive(Debug)]
pub(crate) struct InFlight {
    pub(crate) ticket: Ticket,
    pub(crate) countdown: Countdown,
    pub(crate) motion: Motion,
    pub(crate) finish: Finish,
}

#[derive(Debug)]
pub(crate) enum Phase {
    Idle,
    Animating(InFlight),
}

#[derive(Debug)]
pub struct Carousel<S: Stage> {
    pub(crate) config: SliderConfig,
    pub(crate) items: Vec<Item>,
    pub(crate) stage: S,
    pub(crate) strip: Strip,
    pub(crate) positions: PositionTable,
    pub(crate) geometry: Geometry,
    pub(crate) phase: Phase,
    pub(crate) current: usize,
    pub(crate) chain: Chain,
    pub(crate) notifier: Notifier,
    next_ticket: Ticket,
    done_tx: CompletionSender,
    done_rx: CompletionReceiver,
    initialized: bool,
    resize_pending: bool,
}

impl<S: Stage> Carousel<S> {
    /// Create an uninitialized carousel; call [`Carousel::init`] before navigating
    /// Items are renumbered by position.
    pub fn new(mut items: Vec<Item>, config: SliderConfig, stage: S) -> Self {
        for (i, item) in items.iter_mut().enumerate() {
            item.original_index = i;
        }
        let (done_tx, done_rx) = completion_channel();
        let count = items.len();
        Self {
            config,
            items,
            stage,
            strip: Strip::new(count),
            positions: PositionTable::default(),
            geometry: compute_geometry(0.0, 0.0, count, false),
            phase: Phase::Idle,
            current: 0,
            chain: Chain::default(),
            notifier: Notifier::default(),
            next_ticket: 0,
            done_tx,
            done_rx,
            initialized: false,
            resize_pending: false,
        }
    }

    /// Register a callback for one lifecycle notification
    pub fn on(&mut self, kind: Lifecycle, callback: Callback) -> &mut Self {
        self.notifier.on(kind, callback);
        self
    }

    /// Receive every lifecycle notification as a named event
    pub fn subscribe(&mut self) -> tokio::sync::mpsc::UnboundedReceiver<CarouselEvent> {
        self.notifier.subscribe()
    }

    /// Lay out the strip, sync caption and indicator, and emit `init`.
    /// Calling it again on an initialized carousel does nothing.
    pub fn init(&mut self) -> &mut Self {
        if self.initialized {
            debug!("Carousel already initialized");
            return self;
        }

        self.current = 0;

        if self.config.captions_managed() {
            for item in 0..self.items.len() {
                if self.items[item].caption.is_some() {
                    self.stage.hide_caption(item);
                }
            }
        }
        self.show_caption();
        self.update_indicator();

        self.layout();
        self.initialized = true;

        info!("Carousel initialized with {} items", self.items.len());
        self.emit(Lifecycle::Init);
        self
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.current)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    /// Single steps still queued behind the one in flight
    pub fn pending_steps(&self) -> usize {
        self.chain.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Toggle step-by-step navigation for later `goto_index` calls
    pub fn set_step_by_step(&mut self, step_by_step: bool) {
        self.config.step_by_step = step_by_step;
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    /// Re-measure after a viewport resize. While a transition is in flight the
    /// recomputation waits for it (and any chain) to finish.
    pub fn resize(&mut self) {
        if !self.initialized {
            return;
        }
        if self.is_animating() {
            debug!("Resize while animating, deferring reposition");
            self.resize_pending = true;
            return;
        }
        self.reposition();
    }

    /// Drain finished tracks from the stage and run any join that became due.
    /// Returns the number of transitions completed.
    pub fn pump(&mut self) -> usize {
        let mut joined = 0;

        while let Ok(done) = self.done_rx.try_recv() {
            let released = match &mut self.phase {
                Phase::Animating(flight) if flight.ticket == done.ticket => {
                    match flight.countdown.arrive(done.slot) {
                        Arrival::Released => true,
                        Arrival::Pending(_) => false,
                        Arrival::Ignored => {
                            debug!("Ignoring repeated completion for slot {}", done.slot);
                            false
                        }
                    }
                }
                _ => {
                    debug!("Ignoring stale completion for ticket {}", done.ticket);
                    false
                }
            };

            if released {
                if let Phase::Animating(flight) = std::mem::replace(&mut self.phase, Phase::Idle) {
                    self.complete(flight);
                    joined += 1;
                }
            }
        }

        joined
    }

    fn measure(&self) -> Geometry {
        let item_width = self.stage.item_width();
        let (mask_width, center_items) = if self.config.mask_enabled() {
            (self.stage.mask_width(), self.config.center_items)
        } else {
            (item_width, false)
        };

        let geometry = compute_geometry(mask_width, item_width, self.items.len(), center_items);
        if geometry.overflows() {
            warn!(
                "Mask ({}) is wider than the whole strip ({}), layout is best-effort",
                geometry.mask_width, geometry.strip_width
            );
        }
        geometry
    }

    fn layout(&mut self) {
        self.geometry = self.measure();
        debug!("Slider side items: {}", self.geometry.side_items);
        self.positions = PositionTable::build(&mut self.strip, &self.geometry);
        self.stage.settle(&self.strip);
    }

    fn reposition(&mut self) {
        self.geometry = self.measure();
        let central = self.strip.slot_of(self.current).unwrap_or(0);
        self.positions = PositionTable::reposition(&mut self.strip, &self.geometry, central);
        self.stage.settle(&self.strip);
        debug!("Repositioned around slot {}: {:?}", central, self.positions.as_slice());
    }

    /// Hand `tracks` to the stage as one transition and enter `Animating`
    pub(crate) fn start(&mut self, motion: Motion, finish: Finish, shift: f64) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let tracks: Vec<Track> = self
            .strip
            .iter()
            .enumerate()
            .map(|(slot, s)| Track {
                slot,
                item: s.item,
                from: s.offset,
                to: s.offset + shift,
            })
            .collect();

        let duration = match motion {
            Motion::Step(_) => self.config.step_duration(),
            Motion::Jump(_) => self.config.jump_duration(),
        };

        self.phase = Phase::Animating(InFlight {
            ticket,
            countdown: Countdown::new(tracks.len()),
            motion,
            finish,
        });

        // Hide before handing over: a stage may finish synchronously
        if finish == Finish::Sync {
            self.hide_caption();
        }

        self.stage
            .animate(Animation::new(ticket, tracks, duration, self.done_tx.clone()));
    }

    fn complete(&mut self, flight: InFlight) {
        let count = self.items.len();

        match flight.motion {
            Motion::Step(Step::Next) => {
                if let Some(item) = self.strip.rotate_forward() {
                    debug!(
                        "Moving item {} to the end of the strip, offset = {:?}",
                        item,
                        self.positions.last()
                    );
                }
                self.current = (self.current + 1) % count;
            }
            Motion::Step(Step::Prev) => {
                if let Some(item) = self.strip.rotate_backward() {
                    debug!(
                        "Moving item {} to the beginning of the strip, offset = {:?}",
                        item,
                        self.positions.first()
                    );
                }
                self.current = (self.current + count - 1) % count;
            }
            Motion::Jump(delta) => {
                let retired = self.strip.retire_clones();
                debug!("Jump of {} finished, retired {} clones", delta, retired);
                self.strip.rotate(delta);
                self.current = (self.current as isize + delta).rem_euclid(count as isize) as usize;
            }
        }

        self.strip.snap(&self.positions);
        self.stage.settle(&self.strip);

        match flight.finish {
            Finish::Chain => {
                self.run_chain();
            }
            Finish::Sync => self.settle_ui(),
        }

        if self.resize_pending && !self.is_animating() {
            self.resize_pending = false;
            self.reposition();
        }
    }

    pub(crate) fn emit(&mut self, kind: Lifecycle) {
        if let Some(item) = self.items.get(self.current) {
            self.notifier.emit(kind, self.current, item);
        }
    }
}
