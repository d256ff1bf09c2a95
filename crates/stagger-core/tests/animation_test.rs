//! Integration tests for easing, stagger and scene playback.

use std::time::Duration;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use stagger_core::animation::stagger::Stagger;
use stagger_core::animation::{Animation, Ease, Fade};
use stagger_core::{AnimationEngine, EngineEvent, Property, SceneEngine, Timeline, Tween};

const MS_16: Duration = Duration::from_millis(16);
const MS_100: Duration = Duration::from_millis(100);

const ALL_EASES: [Ease; 8] = [
    Ease::Linear,
    Ease::Power1Out,
    Ease::Power1InOut,
    Ease::Power2Out,
    Ease::Power3In,
    Ease::Power3Out,
    Ease::Power3InOut,
    Ease::Power4Out,
];

#[test]
fn easing_curves_are_monotonic() {
    for ease in ALL_EASES {
        let mut prev = 0.0f32;
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let v = ease.apply(t);
            assert!(v >= prev - 0.001, "{} not monotonic at t={t}", ease.name());
            prev = v;
        }
    }
}

#[test]
fn fade_tracks_frames_without_drift() {
    let mut fade = Fade::new(Duration::from_secs(1));
    for _ in 0..1000 {
        fade.tick(Duration::from_millis(1));
    }
    assert!(fade.is_complete(), "1000x1ms should complete 1s fade");
}

#[test]
fn frame_stepping_matches_single_jump() {
    let run = |frames: &[Duration]| {
        let mut engine = SceneEngine::new();
        let layer = engine.mount("layer");
        engine.set(layer, Property::XPercent, 100.0);
        let mut tl = Timeline::new();
        tl.insert(
            layer,
            Tween::to(Property::XPercent, 0.0, Duration::from_millis(480), Ease::Power4Out),
            Duration::ZERO,
        );
        engine.play(tl);
        for dt in frames {
            engine.advance(*dt);
        }
        engine.value(layer, Property::XPercent).unwrap()
    };

    let stepped = run(&[MS_16; 10]);
    let jumped = run(&[Duration::from_millis(160)]);
    assert!((stepped - jumped).abs() < 1e-3, "{stepped} vs {jumped}");
}

#[test]
fn staggered_batch_settles_in_declaration_order() {
    let mut engine = SceneEngine::new();
    let labels: Vec<_> = (0..3).map(|i| engine.mount(&format!("item{i}"))).collect();
    let mut tl = Timeline::new();
    tl.insert_staggered(
        &labels,
        Tween::from_to(Property::YPercent, 140.0, 0.0, MS_100, Ease::Linear),
        Duration::ZERO,
        Stagger::each(MS_100),
    );
    let id = engine.play(tl);

    engine.advance(Duration::from_millis(150));
    let y: Vec<f32> = labels
        .iter()
        .map(|l| engine.value(*l, Property::YPercent).unwrap())
        .collect();
    assert_eq!(y[0], 0.0);
    assert!(y[1] > 0.0 && y[1] < 140.0);
    // Third label has not started yet and keeps its mounted value.
    assert_eq!(y[2], 0.0);

    engine.advance(Duration::from_millis(200));
    assert_eq!(engine.drain_events(), vec![EngineEvent::Completed(id)]);
}

proptest! {
    #[test]
    fn stagger_offsets_stay_within_span(count in 0usize..40, each_ms in 0u64..500) {
        let stagger = Stagger::each(Duration::from_millis(each_ms));
        let offsets = stagger.offsets(count);
        prop_assert_eq!(offsets.len(), count);
        for offset in &offsets {
            prop_assert!(*offset <= stagger.span(count));
        }
        prop_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        if count > 0 {
            prop_assert!(offsets[0].is_zero());
        }
    }

    #[test]
    fn timeline_duration_bounds_every_step(
        starts in proptest::collection::vec(0u64..2000, 0..20),
        dur_ms in 0u64..1000,
    ) {
        let mut engine = SceneEngine::new();
        let layer = engine.mount("layer");
        let mut tl = Timeline::new();
        for start in &starts {
            tl.insert(
                layer,
                Tween::to(Property::Opacity, 0.5, Duration::from_millis(dur_ms), Ease::Linear),
                Duration::from_millis(*start),
            );
        }
        let total = tl.duration();
        for step in tl.steps() {
            prop_assert!(step.end() <= total);
        }

        let id = engine.play(tl);
        engine.advance(total);
        prop_assert_eq!(engine.drain_events(), vec![EngineEvent::Completed(id)]);
    }

    #[test]
    fn eased_values_stay_in_unit_range(t in -1.0f32..2.0) {
        for ease in ALL_EASES {
            let v = ease.apply(t);
            prop_assert!((0.0..=1.0).contains(&v), "{} gave {}", ease.name(), v);
        }
    }
}
