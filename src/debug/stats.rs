#[cfg(feature = "debug")]
use super::modes::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::gameplay::model::BalloonModel;
#[cfg(feature = "debug")]
use crate::gameplay::plugin::BalloonTally;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    model: Option<Res<BalloonModel>>,
    tally: Option<Res<BalloonTally>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    stats.fps = if stats.fps == 0.0 { inst_fps } else { stats.fps * 0.9 + inst_fps * 0.1 };
    let inst_ms = dt * 1000.0;
    stats.frame_time_ms = if stats.frame_time_ms == 0.0 {
        inst_ms
    } else {
        stats.frame_time_ms * 0.9 + inst_ms * 0.1
    };
    if let Some(model) = model {
        stats.active_balloons = model.balloons().len();
        stats.max_balloons = model.params().max_balloons;
        stats.model_ticks = model.ticks();
    }
    if let Some(tally) = tally {
        stats.touched = tally.touched;
        stats.expired = tally.expired;
    }
}
