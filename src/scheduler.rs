//! Main polling loop - ties the inputs to the display and the strip.
//!
//! Per tick:
//!
//! 1. Once the encoder has settled, compare its length with the strip and
//!    sample the pots. Both checks always run.
//! 2. Enter the idle screen when the idle conditions hold.
//! 3. While idle, poll the encoder then the pots and redraw the idle
//!    visual until one of them moves. Waking forces a refresh.
//! 4. On any change, push color and length to display and strip together.
//! 5. Update the encoder once more.
//!
//! The idle wait is one poll per [`Scheduler::tick`], so an idle tick
//! returns before step 5 and never swallows the change that wakes it.

use crate::clock::{Clock, Millis};
use crate::config;
use crate::idle::IdleMonitor;
use crate::input::{ColorPots, PotSource, QuadratureCounter, SizeEncoder};
use crate::strip::StripDriver;
use crate::ui::DisplayDriver;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Static title shown on the status screen.
    pub title: &'static str,
    /// Quiet time (ms) before the idle screen may show.
    pub idle_after_ms: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            title: config::TITLE,
            idle_after_ms: config::IDLE_AFTER_MS,
        }
    }
}

/// What a single [`Scheduler::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Nothing to propagate.
    Unchanged,
    /// Color and length were pushed to display and strip.
    Refreshed,
    /// The idle screen just came up.
    EnteredIdle,
    /// Still idle; only the idle visual was serviced.
    Idle,
}

pub struct Scheduler<C, P, Q, D, S> {
    clock: C,
    pots: ColorPots<P>,
    encoder: SizeEncoder<Q>,
    display: D,
    strip: S,
    idle: IdleMonitor,
}

impl<C, P, Q, D, S> Scheduler<C, P, Q, D, S>
where
    C: Clock,
    P: PotSource,
    Q: QuadratureCounter,
    D: DisplayDriver,
    S: StripDriver,
{
    /// Wire the components together and draw the first status screen.
    pub fn new(
        clock: C,
        pots: ColorPots<P>,
        encoder: SizeEncoder<Q>,
        mut display: D,
        strip: S,
        config: SchedulerConfig,
    ) -> Self {
        display.set_title(config.title);
        display.set_color(pots.rgb());
        display.set_length(encoder.ready_pos());
        display.render(clock.now());

        Self {
            clock,
            pots,
            encoder,
            display,
            strip,
            idle: IdleMonitor::new(config.idle_after_ms),
        }
    }

    /// Run one pass of the loop.
    pub fn tick(&mut self) -> Tick {
        let now = self.clock.now();
        let mut changed = false;

        if self.idle.is_idle() {
            // Encoder first: it has priority over the pots.
            if !(self.encoder.update(now) || self.pots.update(now)) {
                self.display.render(now);
                return Tick::Idle;
            }
            self.idle.wake();
            self.display.set_idle(false);
            changed = true;
        } else {
            if self.encoder.ready() {
                changed = self.strip.length() != self.encoder.ready_pos();
                changed |= self.pots.update(now);
            }

            let entered = self.idle.try_sleep(
                self.pots.zeroed(),
                self.pots.time_since_change(now),
                self.encoder.time_since_change(now),
            );
            if entered {
                self.display.set_idle(true);
                self.display.render(now);
                return Tick::EnteredIdle;
            }
        }

        if changed {
            self.refresh(now);
        }

        self.encoder.update(now);

        if changed {
            Tick::Refreshed
        } else {
            Tick::Unchanged
        }
    }

    fn refresh(&mut self, now: Millis) {
        let color = self.pots.rgb();
        let length = self.encoder.ready_pos();
        debug!(
            "Refresh: {} LEDs, rgb({}, {}, {})",
            length, color.r, color.g, color.b
        );

        self.display.set_color(color);
        self.display.set_length(length);
        self.strip.set_color(color);
        self.strip.set_length(length);
        self.strip.push();
        self.display.render(now);
    }

    /// Loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    pub fn is_idle(&self) -> bool {
        self.idle.is_idle()
    }

    pub fn pots(&self) -> &ColorPots<P> {
        &self.pots
    }

    pub fn encoder(&self) -> &SizeEncoder<Q> {
        &self.encoder
    }
}
