//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. BalloonInput (touch / click points flag balloons)
//! 2. BalloonTick (timer-driven model updates, event forwarding)
//! 3. BalloonPresent (render request consumed, frame drawn)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BalloonInputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BalloonTickSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BalloonPresentSet;

/// Chains the three balloon sets in `Update`. Safe to call from several plugins.
pub fn configure_balloon_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            BalloonInputSet,
            BalloonTickSet.after(BalloonInputSet),
            BalloonPresentSet.after(BalloonTickSet),
        ),
    );
}
