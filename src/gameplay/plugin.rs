use bevy::prelude::*;
use std::time::Duration;

use super::events::BalloonEvent;
use super::model::BalloonModel;
use crate::core::system::system_order::{configure_balloon_sets, BalloonTickSet};

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct BalloonTouched(pub String);

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct BalloonExpired(pub String);

/// Repeating timer standing in for the widget's fixed update period.
#[derive(Resource, Deref, DerefMut)]
pub struct UpdateClock(pub Timer);

impl UpdateClock {
    pub fn from_millis(period_ms: u64) -> Self {
        Self(Timer::new(Duration::from_millis(period_ms.max(1)), TimerMode::Repeating))
    }
}

/// Running totals of what the player did, kept from the forwarded events.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct BalloonTally {
    pub touched: u32,
    pub expired: u32,
    pub last_text: Option<String>,
}

/// Ticks a `BalloonModel` resource (when present) on a fixed period and republishes its
/// domain events as Bevy events. Works without a window.
pub struct BalloonSimulationPlugin {
    pub update_period_ms: u64,
}

impl Default for BalloonSimulationPlugin {
    fn default() -> Self {
        Self { update_period_ms: 30 }
    }
}

impl Plugin for BalloonSimulationPlugin {
    fn build(&self, app: &mut App) {
        configure_balloon_sets(app);
        app.add_event::<BalloonTouched>()
            .add_event::<BalloonExpired>()
            .init_resource::<BalloonTally>()
            .insert_resource(UpdateClock::from_millis(self.update_period_ms))
            .add_systems(
                Update,
                (tick_balloon_model, record_balloon_events)
                    .chain()
                    .in_set(BalloonTickSet)
                    .run_if(resource_exists::<BalloonModel>),
            );
    }
}

/// Runs one model update per elapsed period; a long frame catches up with several.
pub fn tick_balloon_model(
    time: Res<Time>,
    mut clock: ResMut<UpdateClock>,
    mut model: ResMut<BalloonModel>,
    mut touched: EventWriter<BalloonTouched>,
    mut expired: EventWriter<BalloonExpired>,
) {
    clock.tick(time.delta());
    for _ in 0..clock.times_finished_this_tick() {
        let report = model.update();
        for event in report.events {
            match event {
                BalloonEvent::Touched { text } => {
                    touched.write(BalloonTouched(text));
                }
                BalloonEvent::Expired { text } => {
                    expired.write(BalloonExpired(text));
                }
            }
        }
    }
}

fn record_balloon_events(
    mut tally: ResMut<BalloonTally>,
    mut touched: EventReader<BalloonTouched>,
    mut expired: EventReader<BalloonExpired>,
) {
    for BalloonTouched(text) in touched.read() {
        tally.touched += 1;
        tally.last_text = Some(text.clone());
        info!(target: "balloons", "touched '{text}' (total {})", tally.touched);
    }
    for BalloonExpired(text) in expired.read() {
        tally.expired += 1;
        info!(target: "balloons", "expired '{text}' (total {})", tally.expired);
    }
}
