use fnvisualizer::data::generator::sample;
use fnvisualizer::data::sampler::{RunState, SamplerData};
use fnvisualizer::ResetPolicy;

fn ticked(n: usize) -> SamplerData {
    let mut s = SamplerData::default();
    for _ in 0..n {
        s.tick();
    }
    s
}

#[test]
fn starts_running_and_empty() {
    let s = SamplerData::default();
    assert_eq!(s.state(), RunState::Running);
    assert!(s.is_empty());
    assert_eq!(s.clock(), 0.0);
}

#[test]
fn n_ticks_produce_aligned_samples() {
    let n = 1_000;
    let s = ticked(n);
    assert_eq!(s.time().len(), n);
    assert_eq!(s.data().len(), n);
    for i in 0..n {
        let expected_t = (i as f64 * 0.01 * 100.0).round() / 100.0;
        assert_eq!(s.time()[i], expected_t, "index {i}");
        assert_eq!(s.data()[i], sample(expected_t), "index {i}");
    }
    assert_eq!(s.clock(), 10.0);
}

#[test]
fn stop_pauses_and_ticks_are_noops() {
    let mut s = ticked(5);
    s.stop();
    s.stop();
    assert_eq!(s.state(), RunState::Paused);
    for _ in 0..20 {
        assert!(!s.tick());
    }
    assert_eq!(s.len(), 5);
    assert_eq!(s.clock(), 0.05);

    s.start();
    s.start();
    assert!(s.is_running());
    assert!(s.tick());
    assert_eq!(s.time().last(), Some(&0.05));
}

#[test]
fn reset_rewinds_clock_and_keeps_samples() {
    let mut s = ticked(30);
    s.reset();
    assert_eq!(s.clock(), 0.0);
    assert_eq!(s.len(), 30);
    assert!(s.is_running());

    s.tick();
    assert_eq!(s.len(), 31);
    assert_eq!(s.time()[30], 0.0);
    assert_eq!(s.data()[30], sample(0.0));
}

#[test]
fn reset_keeps_paused_state() {
    let mut s = ticked(3);
    s.stop();
    s.reset();
    assert_eq!(s.state(), RunState::Paused);
    assert_eq!(s.clock(), 0.0);
    s.tick();
    assert_eq!(s.len(), 3);
}

#[test]
fn clear_samples_policy_drops_history() {
    let mut s = SamplerData::new(0.01, ResetPolicy::ClearSamples);
    for _ in 0..10 {
        s.tick();
    }
    s.reset();
    assert!(s.is_empty());
    assert!(s.time().is_empty());
    s.tick();
    assert_eq!(s.points(), vec![[0.0, sample(0.0)]]);
}

#[test]
fn points_pair_time_with_value() {
    let s = ticked(3);
    let pts = s.points();
    assert_eq!(pts.len(), 3);
    assert_eq!(pts[2], [0.02, sample(0.02)]);
}
