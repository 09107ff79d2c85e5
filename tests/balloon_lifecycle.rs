use balloon_pop::gameplay::text_layout::{TextMeasure, TextMetrics};
use balloon_pop::{BalloonEvent, BalloonEventKind, BalloonModel, BalloonParams, TextCatalog};
use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::{Arc, Mutex};

struct HalfEm;
impl TextMeasure for HalfEm {
    fn measure(&self, text: &str) -> TextMetrics {
        TextMetrics { width: 24.0 * text.chars().count() as f32, descent: 10.0 }
    }
}

fn model_with(texts: &[&str], surface: Vec2, params: BalloonParams, seed: u64) -> BalloonModel {
    let catalog = TextCatalog::build(texts.iter().copied(), &HalfEm, params.box_size(), 20.0).unwrap();
    BalloonModel::with_rng(surface, params, catalog, Handle::default(), StdRng::seed_from_u64(seed)).unwrap()
}

fn model(texts: &[&str], seed: u64) -> BalloonModel {
    model_with(texts, Vec2::new(320.0, 480.0), BalloonParams::default(), seed)
}

fn center_of(model: &BalloonModel, index: usize) -> Vec2 {
    model.balloons()[index].position + model.params().box_size() * 0.5
}

#[test]
fn scenario_first_fifty_ticks() {
    let mut m = model(&["A", "B"], 11);
    assert!(m.balloons().is_empty());
    m.update();
    // spawn row is height - balloon height, risen once in the same tick
    assert_eq!(m.balloons()[0].position.y + 2.0, 380.0);
    for _ in 1..50 {
        m.update();
    }
    assert_eq!(m.balloons().len(), 1);
    let b = &m.balloons()[0];
    assert!(["A", "B"].contains(&b.text.text()));
    assert_eq!(b.position.y, 380.0 - 2.0 * 50.0);
}

#[test]
fn untouched_balloon_expires_exactly_once() {
    let mut m = model(&["solo"], 12);
    let mut expired = Vec::new();
    // spawned at y = 380: it is still on screen after 190 rises and leaves on the 191st
    for tick in 1..=190 {
        let report = m.update();
        assert!(report.events.is_empty(), "unexpected event at tick {tick}");
    }
    assert_eq!(m.balloons().len(), 4);
    let report = m.update();
    expired.extend(report.events);
    assert_eq!(expired, vec![BalloonEvent::Expired { text: "solo".into() }]);
    assert_eq!(m.balloons().len(), 3);
    for _ in 0..60 {
        let report = m.update();
        assert!(report.events.iter().all(|e| e.kind() == BalloonEventKind::Expired));
        assert!(report.events.len() <= 1);
    }
}

#[test]
fn touched_balloon_reports_its_text_and_never_expires() {
    let mut m = model(&["hello"], 13);
    m.update();
    let point = center_of(&m, 0);
    assert_eq!(m.on_touch(&[point]), 1);
    let report = m.update();
    assert_eq!(report.events, vec![BalloonEvent::Touched { text: "hello".into() }]);
    assert!(m.balloons().is_empty());
    for _ in 0..300 {
        let report = m.update();
        // later balloons may expire, but each is a fresh spawn
        assert!(report.events.len() <= 1);
    }
}

#[test]
fn double_touch_before_update_fires_once() {
    let mut m = model(&["A"], 14);
    m.update();
    let point = center_of(&m, 0);
    m.on_touch(&[point]);
    m.on_touch(&[point, point]);
    let report = m.update();
    assert_eq!(report.events.len(), 1);
    assert!(m.update().events.is_empty());
}

#[test]
fn one_touch_call_can_flag_several_balloons() {
    let params = BalloonParams { spawn_interval: 1, ..BalloonParams::default() };
    let mut m = model_with(&["A"], Vec2::new(320.0, 480.0), params, 15);
    m.update();
    m.update();
    assert_eq!(m.balloons().len(), 2);
    let points = [center_of(&m, 0), center_of(&m, 1)];
    assert_eq!(m.on_touch(&points), 2);
    let report = m.update();
    let touched = report.events.iter().filter(|e| e.kind() == BalloonEventKind::Touched).count();
    assert_eq!(touched, 2);
}

#[test]
fn full_house_blocks_spawn_even_on_interval() {
    let params = BalloonParams { spawn_interval: 1, ..BalloonParams::default() };
    let mut m = model_with(&["A", "B", "C"], Vec2::new(320.0, 480.0), params, 16);
    for _ in 0..5 {
        assert!(m.update().spawned);
    }
    assert_eq!(m.balloons().len(), 5);
    for _ in 0..20 {
        assert!(!m.update().spawned);
        assert_eq!(m.balloons().len(), 5);
    }
}

#[test]
fn active_count_never_exceeds_max_under_random_play() {
    let mut m = model(&["A", "B", "C", "D"], 17);
    let mut input = StdRng::seed_from_u64(99);
    for _ in 0..5_000 {
        if input.gen_bool(0.05) {
            let p = Vec2::new(input.gen_range(0.0..320.0), input.gen_range(0.0..480.0));
            m.on_touch(&[p]);
        }
        m.update();
        assert!(m.balloons().len() <= m.params().max_balloons);
        for b in m.balloons() {
            assert!(m.catalog().contains(&b.text));
            assert!(b.position.y >= 0.0);
            assert!(!b.pending_removal);
        }
    }
}

#[test]
fn listeners_receive_both_kinds() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut m = model(&["Z"], 18);
    for kind in BalloonEventKind::ALL {
        let log = Arc::clone(&log);
        m.on(kind, move |ev| log.lock().unwrap().push((ev.kind().name(), ev.text().to_string())));
    }
    m.update();
    let point = center_of(&m, 0);
    m.on_touch(&[point]);
    m.update();
    for _ in 0..400 {
        m.update();
    }
    let log = log.lock().unwrap();
    assert_eq!(log[0], ("event_balloon_touched", "Z".to_string()));
    assert!(log.iter().skip(1).all(|(name, text)| *name == "event_balloon_expired" && text == "Z"));
    assert!(log.len() >= 2);
}
