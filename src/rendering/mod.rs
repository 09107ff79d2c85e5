//! Balloon drawing: the surface contract, the stateless view and its Bevy backend.

pub mod camera;
pub mod canvas;
pub mod font_metrics;
pub mod frame;
pub mod view;

use bevy::prelude::*;

use crate::core::system::system_order::{configure_balloon_sets, BalloonPresentSet};
use crate::gameplay::model::BalloonModel;
use frame::{apply_frame, present_balloons, FrameCanvas};
use view::BalloonView;

pub struct BalloonRenderPlugin;

impl Plugin for BalloonRenderPlugin {
    fn build(&self, app: &mut App) {
        configure_balloon_sets(app);
        app.add_systems(Startup, camera::setup_camera).add_systems(
            Update,
            (present_balloons, apply_frame)
                .chain()
                .in_set(BalloonPresentSet)
                .run_if(resource_exists::<BalloonModel>)
                .run_if(resource_exists::<BalloonView>)
                .run_if(resource_exists::<FrameCanvas>),
        );
    }
}
