//! Timed exit for demos and smoke runs, driven by `window.autoClose` (seconds, 0 = off).

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::plugin::BalloonTally;

#[derive(Resource, Deref, DerefMut)]
struct SessionDeadline(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_deadline)
            .add_systems(Update, close_when_due.run_if(resource_exists::<SessionDeadline>));
    }
}

fn arm_session_deadline(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "balloons", "session will close after {secs} seconds");
        commands.insert_resource(SessionDeadline(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn close_when_due(
    time: Res<Time>,
    mut deadline: ResMut<SessionDeadline>,
    tally: Option<Res<BalloonTally>>,
    mut exit: EventWriter<AppExit>,
) {
    if !deadline.tick(time.delta()).just_finished() {
        return;
    }
    let (touched, expired) = tally.map(|t| (t.touched, t.expired)).unwrap_or_default();
    info!(target: "balloons", touched, expired, "session deadline reached, exiting");
    exit.write(AppExit::Success);
}
