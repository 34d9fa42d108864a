use std::time::Instant;

use crate::gallery::ResourceSlot;
use crate::signal::Signal;
use crate::traits::{EventSource, RenderHost};

/// How often the loop reports its frame rate
const FPS_REPORT_INTERVAL: f32 = 1.0;

/// Per-iteration state driven by classified signals
#[derive(Debug, Clone, Copy)]
pub struct LoopState {
    selected: ResourceSlot,
    quit: bool,
}

impl LoopState {
    pub fn new() -> Self {
        Self {
            selected: ResourceSlot::Default,
            quit: false,
        }
    }

    pub fn selected(&self) -> ResourceSlot {
        self.selected
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Fold one signal into the state
    ///
    /// Quit only raises a flag; it is acted on at the iteration boundary, so
    /// every signal drained in the same pass still lands. `Other` signals
    /// change nothing, while an unrecognized key press selects the default
    /// resource (see [`ResourceSlot::for_key`]).
    pub fn apply(&mut self, signal: Signal) {
        match signal {
            Signal::Quit => self.quit = true,
            Signal::KeyPress(direction) => self.selected = ResourceSlot::for_key(direction),
            Signal::Other => {}
        }
    }
}

impl Default for LoopState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock frame counter that reports fps about once a second
#[derive(Debug)]
pub struct FrameClock {
    last_report: Instant,
    frames_since_report: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_report: Instant::now(),
            frames_since_report: 0,
        }
    }

    /// Count one frame; returns the measured rate when a report is due
    pub fn tick(&mut self) -> Option<f32> {
        self.frames_since_report += 1;
        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed < FPS_REPORT_INTERVAL {
            return None;
        }
        let fps = self.frames_since_report as f32 / elapsed;
        self.last_report = Instant::now();
        self.frames_since_report = 0;
        Some(fps)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    /// Iterations completed, each with exactly one draw + present
    pub frames: u64,
    /// Signals drained over the whole run
    pub signals: u64,
    /// Selection at the moment the loop returned
    pub last_selected: ResourceSlot,
}

/// Run the render cycle until a quit signal is observed
///
/// Each iteration drains the event source until it reports empty, folds the
/// signals into the loop state, draws, and presents exactly once. The quit
/// flag is checked only after present, so the iteration that drained the
/// quit still shows its frame, and termination happens within one iteration
/// of the signal arriving.
///
/// Draw and present failures are logged and the loop moves on; only a quit
/// signal ends the run.
pub fn run<E, H>(events: &mut E, host: &mut H) -> LoopSummary
where
    E: EventSource,
    H: RenderHost,
{
    let mut state = LoopState::new();
    let mut clock = FrameClock::new();
    let mut frames: u64 = 0;
    let mut signals: u64 = 0;

    loop {
        while let Some(signal) = events.poll_signal() {
            signals += 1;
            state.apply(signal);
        }

        if let Err(err) = host.draw(state.selected()) {
            log::error!("frame {frames}: {err}");
        }
        if let Err(err) = host.present() {
            log::error!("frame {frames}: present failed: {err}");
        }
        frames += 1;

        if let Some(fps) = clock.tick() {
            log::debug!("{fps:.1} fps");
        }

        if state.quit_requested() {
            break;
        }
    }

    LoopSummary {
        frames,
        signals,
        last_selected: state.selected(),
    }
}
