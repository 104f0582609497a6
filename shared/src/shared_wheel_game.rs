use rand::Rng;
use serde::Serialize;
use std::f64::consts::PI;

use crate::constants::{
    MIN_SPIN_DURATION_MS, MIN_SPIN_RADIANS, POINTER_ANGLE, SPIN_DURATION_RANGE_MS,
    SPIN_RANGE_RADIANS,
};
use crate::error::{GameError, GameResult};

const TAU: f64 = 2.0 * PI;

/// What landing on a slice does to the active team.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum SliceKind {
    Points,
    LoseTurn,
    Bankrupt,
}

/// One segment of the wheel. `value` is the payout per revealed letter.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: u32,
    pub kind: SliceKind,
    pub color: &'static str,
}

impl Slice {
    const fn points(label: &'static str, value: u32, color: &'static str) -> Self {
        Self { label, value, kind: SliceKind::Points, color }
    }

    const fn special(label: &'static str, kind: SliceKind, color: &'static str) -> Self {
        Self { label, value: 0, kind, color }
    }
}

pub const WHEEL_SLICES: [Slice; 12] = [
    Slice::points("50", 50, "#1d4ed8"),
    Slice::points("100", 100, "#0ea5e9"),
    Slice::points("150", 150, "#22c55e"),
    Slice::points("200", 200, "#f59e0b"),
    Slice::points("250", 250, "#84cc16"),
    Slice::points("300", 300, "#eab308"),
    Slice::points("350", 350, "#06b6d4"),
    Slice::points("400", 400, "#a855f7"),
    Slice::points("500", 500, "#ef4444"),
    Slice::special("Lose Turn", SliceKind::LoseTurn, "#991b1b"),
    Slice::special("Bankrupt", SliceKind::Bankrupt, "#7c3aed"),
    Slice::points("1000", 1000, "#16a34a"),
];

pub const WHEEL_SEGMENTS: usize = WHEEL_SLICES.len();

/// The slice a finished spin landed on.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct SliceOutcome {
    pub index: usize,
    pub slice: Slice,
}

impl SliceOutcome {
    pub fn at(index: usize) -> Self {
        Self { index, slice: WHEEL_SLICES[index] }
    }
}

/// Angular width of a single slice.
pub fn slice_angle() -> f64 {
    TAU / WHEEL_SEGMENTS as f64
}

/// Cubic ease-out: fast start, velocity reaches zero at `t = 1`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Index of the slice sitting under the pointer for a given wheel rotation.
///
/// Slice `i` covers `[angle + i*w, angle + (i+1)*w)` going clockwise, so the
/// rotation is subtracted from the pointer position before bucketing.
pub fn slice_index_at(angle: f64) -> usize {
    let relative = (POINTER_ANGLE - angle).rem_euclid(TAU);
    (relative / slice_angle()).floor() as usize % WHEEL_SEGMENTS
}

/// Rotation and duration for one spin, fixed when the spin starts.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub start_angle: f64,
    pub target: f64,
    pub duration_ms: f64,
}

impl SpinPlan {
    pub fn random<R: Rng + ?Sized>(start_angle: f64, rng: &mut R) -> Self {
        Self {
            start_angle,
            target: MIN_SPIN_RADIANS + rng.gen::<f64>() * SPIN_RANGE_RADIANS,
            duration_ms: MIN_SPIN_DURATION_MS + rng.gen::<f64>() * SPIN_DURATION_RANGE_MS,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn angle_at(&self, elapsed_ms: f64) -> f64 {
        self.start_angle + self.target * ease_out_cubic(self.progress(elapsed_ms))
    }

    pub fn final_angle(&self) -> f64 {
        self.start_angle + self.target
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnimationStatus {
    Idle,
    Running { angle: f64, progress: f64 },
    Finished(SliceOutcome),
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct Wheel {
    angle: f64,
    is_spinning: bool,
    last_resolved_index: Option<usize>,
    plan: Option<SpinPlan>,
    elapsed_ms: f64,
}

impl Wheel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    /// Slice the last completed spin landed on. Drives both the highlight and scoring.
    pub fn last_resolved_index(&self) -> Option<usize> {
        self.last_resolved_index
    }

    pub fn last_outcome(&self) -> Option<SliceOutcome> {
        self.last_resolved_index.map(SliceOutcome::at)
    }

    pub fn clear_highlight(&mut self) {
        self.last_resolved_index = None;
    }

    /// Starts a spin with a freshly randomized plan.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult<SpinPlan> {
        let plan = SpinPlan::random(self.angle, rng);
        self.start_planned(plan)?;
        Ok(plan)
    }

    /// Starts a spin with a caller-supplied plan. The plan's start angle is
    /// replaced with the wheel's current angle so the rotation stays continuous.
    pub fn start_planned(&mut self, plan: SpinPlan) -> GameResult<()> {
        if self.is_spinning {
            return Err(GameError::AlreadySpinning);
        }
        self.plan = Some(SpinPlan { start_angle: self.angle, ..plan });
        self.elapsed_ms = 0.0;
        self.is_spinning = true;
        self.last_resolved_index = None;
        Ok(())
    }

    /// Moves the animation forward by `delta_ms` of host time.
    pub fn advance(&mut self, delta_ms: f64) -> AnimationStatus {
        let plan = match (self.is_spinning, self.plan) {
            (true, Some(plan)) => plan,
            _ => return AnimationStatus::Idle,
        };

        self.elapsed_ms += delta_ms.max(0.0);
        let progress = plan.progress(self.elapsed_ms);

        if progress < 1.0 {
            self.angle = plan.angle_at(self.elapsed_ms);
            return AnimationStatus::Running { angle: self.angle, progress };
        }

        self.angle = plan.final_angle();
        self.is_spinning = false;
        self.plan = None;
        self.elapsed_ms = 0.0;

        let index = slice_index_at(self.angle);
        self.last_resolved_index = Some(index);
        log::debug!("wheel stopped at {:.3} rad on slice {}", self.angle, index);
        AnimationStatus::Finished(SliceOutcome::at(index))
    }

    /// Runs a whole spin in fixed `frame_ms` steps and returns where it landed.
    pub fn spin_to_completion<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        frame_ms: f64,
    ) -> GameResult<SliceOutcome> {
        self.start_spin(rng)?;
        let step = if frame_ms > 0.0 { frame_ms } else { 16.0 };
        loop {
            if let AnimationStatus::Finished(outcome) = self.advance(step) {
                return Ok(outcome);
            }
        }
    }
}
