//! Test doubles for the capability traits

use core::cell::Cell;
use core::num::NonZeroU32;

use crate::traits::{Canvas, CanvasError, Clock, RandomSource, RoundRect, Triangle};

/// A primitive received by [`RecordingCanvas`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Clear,
    Rect(RoundRect),
    Triangle(Triangle),
    Present,
}

/// Canvas that remembers every call
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    /// Make every draw call fail
    pub failing: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            ops: Vec::new(),
            failing: true,
        }
    }

    /// Number of completed frames
    pub fn frames(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Present).count()
    }

    pub fn rects(&self) -> Vec<RoundRect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn triangles(&self) -> Vec<Triangle> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Triangle(triangle) => Some(*triangle),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, op: Op) -> Result<(), CanvasError> {
        self.ops.push(op);
        if self.failing {
            Err(CanvasError::Draw)
        } else {
            Ok(())
        }
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) -> Result<(), CanvasError> {
        self.record(Op::Clear)
    }

    fn fill_round_rect(&mut self, rect: RoundRect) -> Result<(), CanvasError> {
        self.record(Op::Rect(rect))
    }

    fn fill_triangle(&mut self, triangle: Triangle) -> Result<(), CanvasError> {
        self.record(Op::Triangle(triangle))
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        self.record(Op::Present)
    }
}

/// Clock moved by hand
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn new(now: u32) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: u32) {
        self.now.set(now);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Random source replaying a fixed sequence
///
/// Values repeat once the script runs out and are reduced into range.
#[derive(Debug)]
pub struct ScriptedRng {
    script: Vec<u32>,
    calls: usize,
}

impl ScriptedRng {
    pub fn new(script: &[u32]) -> Self {
        Self {
            script: script.to_vec(),
            calls: 0,
        }
    }

    /// How often the engine asked for a number
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for ScriptedRng {
    fn below(&mut self, limit: NonZeroU32) -> u32 {
        let value = self
            .script
            .get(self.calls % self.script.len().max(1))
            .copied()
            .unwrap_or(0);
        self.calls += 1;
        value % limit.get()
    }
}
