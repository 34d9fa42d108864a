//! Shared fakes for the integration suites: a scripted event source, a
//! recording render host, and a fake platform whose stages log their drops.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use pixel_gallery::config::WindowConfig;
use pixel_gallery::error::{DrawError, InitError};
use pixel_gallery::gallery::ResourceSlot;
use pixel_gallery::signal::Signal;
use pixel_gallery::traits::{EventSource, RenderHost, VideoPlatform};

/// Event source scripted as one signal batch per drain pass
///
/// Each inner vec is what one frame-loop iteration drains; an empty vec is an
/// iteration with no pending events. When the script runs dry a single quit
/// is injected so bounded tests always terminate.
pub struct ScriptedEvents {
    current: VecDeque<Signal>,
    passes: VecDeque<Vec<Signal>>,
    auto_quit: bool,
}

impl ScriptedEvents {
    pub fn new(passes: Vec<Vec<Signal>>) -> Self {
        let mut passes: VecDeque<Vec<Signal>> = passes.into();
        let current = passes.pop_front().unwrap_or_default().into();
        Self {
            current,
            passes,
            auto_quit: false,
        }
    }

    /// Same, but inject a final quit once all scripted passes are spent
    pub fn with_auto_quit(passes: Vec<Vec<Signal>>) -> Self {
        let mut events = Self::new(passes);
        events.auto_quit = true;
        events
    }
}

impl EventSource for ScriptedEvents {
    fn poll_signal(&mut self) -> Option<Signal> {
        if let Some(signal) = self.current.pop_front() {
            return Some(signal);
        }
        // This drain pass is over; stage the next one for the next iteration.
        match self.passes.pop_front() {
            Some(next) => self.current = next.into(),
            None => {
                if self.auto_quit {
                    self.auto_quit = false;
                    self.current.push_back(Signal::Quit);
                }
            }
        }
        None
    }
}

/// What the frame loop asked a host to do, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOp {
    Draw(ResourceSlot),
    Present,
}

/// Render host that records every call instead of rendering
#[derive(Default)]
pub struct RecordingHost {
    pub ops: Vec<HostOp>,
    pub fail_draw: bool,
    pub fail_present: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draws(&self) -> Vec<ResourceSlot> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                HostOp::Draw(slot) => Some(*slot),
                HostOp::Present => None,
            })
            .collect()
    }

    pub fn presents(&self) -> usize {
        self.ops.iter().filter(|op| **op == HostOp::Present).count()
    }
}

impl RenderHost for RecordingHost {
    fn draw(&mut self, selected: ResourceSlot) -> Result<(), DrawError> {
        self.ops.push(HostOp::Draw(selected));
        if self.fail_draw {
            Err(DrawError::from("scripted draw failure"))
        } else {
            Ok(())
        }
    }

    fn present(&mut self) -> Result<(), DrawError> {
        self.ops.push(HostOp::Present);
        if self.fail_present {
            Err(DrawError::from("scripted present failure"))
        } else {
            Ok(())
        }
    }
}

/// Shared log the fake platform stages append to
pub type StageLog = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> StageLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(log: &StageLog) -> Vec<String> {
    log.borrow().clone()
}

/// Position of the first entry starting with `prefix`; panics when missing
pub fn index_of(log: &StageLog, prefix: &str) -> usize {
    log.borrow()
        .iter()
        .position(|e| e.starts_with(prefix))
        .unwrap_or_else(|| panic!("log has no entry {prefix:?}: {:?}", log.borrow()))
}

/// A lifecycle stage handle that reports its own release
pub struct FakeStage {
    name: &'static str,
    log: StageLog,
}

impl FakeStage {
    pub fn new(name: &'static str, log: &StageLog) -> Self {
        Self {
            name,
            log: log.clone(),
        }
    }
}

impl Drop for FakeStage {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("{} dropped", self.name));
    }
}

/// Platform whose stages can be scripted to fail at any step
pub struct FakePlatform {
    pub log: StageLog,
    pub fail_subsystem: bool,
    pub fail_window: bool,
    pub fail_render_target: bool,
}

impl FakePlatform {
    pub fn new(log: &StageLog) -> Self {
        Self {
            log: log.clone(),
            fail_subsystem: false,
            fail_window: false,
            fail_render_target: false,
        }
    }
}

impl VideoPlatform for FakePlatform {
    type Subsystem = FakeStage;
    type Window = FakeStage;
    type RenderTarget = FakeStage;

    fn start_subsystem(&mut self) -> Result<FakeStage, InitError> {
        if self.fail_subsystem {
            return Err(InitError::Subsystem("scripted subsystem failure".into()));
        }
        self.log.borrow_mut().push("subsystem started".into());
        Ok(FakeStage::new("subsystem", &self.log))
    }

    fn create_window(
        &mut self,
        _subsystem: &mut FakeStage,
        config: &WindowConfig,
    ) -> Result<FakeStage, InitError> {
        if self.fail_window {
            return Err(InitError::Window("scripted window failure".into()));
        }
        self.log
            .borrow_mut()
            .push(format!("window created ({}x{})", config.width, config.height));
        Ok(FakeStage::new("window", &self.log))
    }

    fn create_render_target(
        &mut self,
        _subsystem: &mut FakeStage,
        _window: &FakeStage,
    ) -> Result<FakeStage, InitError> {
        if self.fail_render_target {
            return Err(InitError::RenderTarget(
                "scripted render target failure".into(),
            ));
        }
        self.log.borrow_mut().push("render target created".into());
        Ok(FakeStage::new("render target", &self.log))
    }
}
