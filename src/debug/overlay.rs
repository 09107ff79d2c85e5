#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::modes::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::gameplay::plugin::BalloonTally;

#[cfg(feature = "debug")]
#[derive(Component)]
pub(crate) struct DebugOverlayText;

#[cfg(feature = "debug")]
pub fn debug_overlay_spawn(mut commands: Commands) {
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 12.0,
            ..Default::default()
        },
        TextColor(Color::srgb(0.75, 0.85, 0.95)),
        bevy::ui::Node {
            position_type: bevy::ui::PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

#[cfg(feature = "debug")]
pub(crate) fn debug_overlay_update(
    state: Res<DebugState>,
    stats: Res<DebugStats>,
    tally: Option<Res<BalloonTally>>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    if !state.overlay_visible {
        text.0.clear();
        return;
    }
    let mut line = format!(
        "FPS {:.1} balloons {}/{} tick {} touched {} expired {}",
        stats.fps, stats.active_balloons, stats.max_balloons, stats.model_ticks, stats.touched, stats.expired
    );
    if let Some(last) = tally.as_ref().and_then(|t| t.last_text.as_deref()) {
        line.push_str(&format!("\nlast: {last}"));
    }
    text.0 = line;
}
