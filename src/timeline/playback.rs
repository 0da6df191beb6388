use crate::timeline::model::Repeat;

/// Direction the play head is moving in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    /// Not moving.
    #[default]
    Idle,
    /// Moving toward the end.
    Forward,
    /// Moving toward zero.
    Reverse,
}

/// Mutable play head of one scheduled timeline.
///
/// Holds no reference to the timeline itself; the runtime samples the
/// [`TimelineDef`](crate::timeline::model::TimelineDef) at [`sample_time`](Self::sample_time)
/// whenever [`take_dirty`](Self::take_dirty) reports a change.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Playback {
    time: f64,
    duration: f64,
    repeat: Repeat,
    state: PlayState,
    completed: bool,
    dirty: bool,
    scrub_target: Option<f64>,
    smoothing: f64,
}

/// Distance in seconds under which a smoothed scrub snaps to its target.
const SNAP: f64 = 1e-4;

impl Playback {
    /// Idle play head at zero.
    pub fn new(duration: f64, repeat: Repeat) -> Self {
        Self {
            time: 0.0,
            duration: duration.max(0.0),
            repeat,
            state: PlayState::Idle,
            completed: false,
            dirty: false,
            scrub_target: None,
            smoothing: 0.0,
        }
    }

    /// Start or resume forward play.
    pub fn play(&mut self) {
        self.scrub_target = None;
        self.state = PlayState::Forward;
        self.dirty = true;
    }

    /// Play backward toward zero.
    pub fn reverse(&mut self) {
        self.scrub_target = None;
        self.completed = false;
        self.state = PlayState::Reverse;
        self.dirty = true;
    }

    /// Move toward `progress` of the duration; `smoothing == 0` jumps immediately.
    pub fn scrub_to(&mut self, progress: f64, smoothing: f64) {
        let target = progress.clamp(0.0, 1.0) * self.duration;
        self.state = PlayState::Idle;
        self.smoothing = smoothing.max(0.0);
        if self.smoothing == 0.0 {
            self.scrub_target = None;
            self.set_time(target);
        } else {
            self.scrub_target = Some(target);
        }
        self.dirty = true;
    }

    /// Jump to the end without playing.
    pub fn finish(&mut self) {
        self.scrub_target = None;
        self.state = PlayState::Idle;
        self.time = self.duration;
        self.completed = true;
        self.dirty = true;
    }

    /// Advance by `dt` seconds of wall time.
    pub fn advance(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if let Some(target) = self.scrub_target {
            let k = 1.0 - (-dt / self.smoothing).exp();
            let next = self.time + (target - self.time) * k;
            if (target - next).abs() <= SNAP {
                self.scrub_target = None;
                self.set_time(target);
            } else {
                self.time = next;
                self.completed = false;
            }
            self.dirty = true;
            return;
        }
        match self.state {
            PlayState::Idle => {}
            PlayState::Forward => {
                let t = self.time + dt;
                match self.repeat {
                    Repeat::Infinite if self.duration > 0.0 => self.time = t % self.duration,
                    _ if t >= self.duration => {
                        self.time = self.duration;
                        self.completed = true;
                        self.state = PlayState::Idle;
                    }
                    _ => self.time = t,
                }
                self.dirty = true;
            }
            PlayState::Reverse => {
                self.time = (self.time - dt).max(0.0);
                if self.time == 0.0 {
                    self.state = PlayState::Idle;
                }
                self.dirty = true;
            }
        }
    }

    fn set_time(&mut self, t: f64) {
        self.time = t;
        self.completed = self.repeat == Repeat::Once && t >= self.duration;
    }

    /// Clear and return the changed-since-last-render flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Play head in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Time to sample the timeline at. A completed play head samples past the end so
    /// zero-length tweens sitting exactly at the end also land.
    pub fn sample_time(&self) -> f64 {
        if self.completed {
            f64::INFINITY
        } else {
            self.time
        }
    }

    /// Play head as a fraction of the duration.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return if self.completed { 1.0 } else { 0.0 };
        }
        (self.time / self.duration).clamp(0.0, 1.0)
    }

    /// Current direction.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// `true` once a non-looping play head reached the end.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// `true` while a smoothed scrub is still catching up.
    pub fn is_settling(&self) -> bool {
        self.scrub_target.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/playback.rs"]
mod tests;
