//! Run-state machine that turns ticks into samples.

use crate::config::ResetPolicy;
use crate::data::generator;

/// Decimal places the clock is rounded to after every advance.
const CLOCK_DECIMALS: i32 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

/// Sample clock and the two index-aligned sample sequences.
///
/// `time[i]` is the clock value at which `data[i]` was generated. Both
/// vectors always have the same length.
#[derive(Clone, Debug)]
pub struct SamplerData {
    time: Vec<f64>,
    data: Vec<f64>,
    t: f64,
    state: RunState,
    time_interval: f64,
    reset_policy: ResetPolicy,
}

impl Default for SamplerData {
    fn default() -> Self {
        Self::new(0.01, ResetPolicy::default())
    }
}

impl SamplerData {
    pub fn new(time_interval: f64, reset_policy: ResetPolicy) -> Self {
        Self {
            time: Vec::new(),
            data: Vec::new(),
            t: 0.0,
            state: RunState::Running,
            time_interval,
            reset_policy,
        }
    }

    pub fn start(&mut self) {
        self.state = RunState::Running;
    }

    pub fn stop(&mut self) {
        self.state = RunState::Paused;
    }

    /// Rewind the clock to zero. The run state is left untouched.
    pub fn reset(&mut self) {
        self.t = 0.0;
        if self.reset_policy == ResetPolicy::ClearSamples {
            self.time.clear();
            self.data.clear();
        }
    }

    /// Handle one tick. Returns `true` if a sample was appended.
    pub fn tick(&mut self) -> bool {
        if self.state == RunState::Paused {
            return false;
        }
        let value = generator::sample(self.t);
        self.data.push(value);
        self.time.push(self.t);
        self.t = round_to(self.t + self.time_interval, CLOCK_DECIMALS);
        true
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Clock value the next sample will be taken at.
    pub fn clock(&self) -> f64 {
        self.t
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples as `[time, value]` pairs, ready for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(self.data.iter())
            .map(|(&t, &y)| [t, y])
            .collect()
    }
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(0.1 + 0.2, 2), 0.3);
        assert_eq!(round_to(0.07 + 0.01, 2), 0.08);
        assert_eq!(round_to(1.234, 2), 1.23);
    }

    #[test]
    fn tick_advances_clock_after_sampling() {
        let mut s = SamplerData::default();
        assert!(s.tick());
        assert_eq!(s.time(), &[0.0]);
        assert_eq!(s.clock(), 0.01);
    }
}
