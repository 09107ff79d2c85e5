pub mod input;
pub mod session;

use bevy::prelude::*;

use crate::core::system::system_order::{configure_balloon_sets, BalloonInputSet};
use crate::gameplay::model::BalloonModel;

/// Pointer input feeding the model. Needs Bevy's input and window plugins.
pub struct BalloonInputPlugin;

impl Plugin for BalloonInputPlugin {
    fn build(&self, app: &mut App) {
        configure_balloon_sets(app);
        app.add_systems(
            Update,
            input::pointer::collect_pointer_points
                .in_set(BalloonInputSet)
                .run_if(resource_exists::<BalloonModel>),
        );
    }
}
