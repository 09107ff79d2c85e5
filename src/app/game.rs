// This file is part of Balloon Pop.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::core::config::{ConfigIssues, GameConfig};
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::model::{BalloonModel, ModelError};
use crate::gameplay::plugin::BalloonSimulationPlugin;
use crate::gameplay::text_layout::TextCatalog;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::BalloonInputPlugin;
use crate::rendering::canvas::TextStyle;
use crate::rendering::font_metrics::measurer_for;
use crate::rendering::frame::FrameCanvas;
use crate::rendering::view::BalloonView;
use crate::rendering::BalloonRenderPlugin;

/// Full widget: simulation, pointer input, drawing and session helpers.
/// Expects `GameConfig` as a resource and Bevy's `DefaultPlugins`.
pub struct BalloonGamePlugin {
    pub update_period_ms: u64,
}

impl BalloonGamePlugin {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self { update_period_ms: cfg.balloons.update_period_ms }
    }
}

impl Plugin for BalloonGamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            BalloonSimulationPlugin { update_period_ms: self.update_period_ms },
            BalloonRenderPlugin,
            BalloonInputPlugin,
            AutoClosePlugin,
            #[cfg(feature = "debug")]
            DebugPlugin,
        ))
        .add_systems(Startup, (report_config_warnings, bootstrap_widget).chain());
    }
}

fn report_config_warnings(cfg: Res<GameConfig>, issues: Option<Res<ConfigIssues>>) {
    for issue in issues.iter().flat_map(|i| i.0.iter()) {
        warn!(target: "balloons", "config load: {issue}");
    }
    for w in cfg.validate() {
        warn!(target: "balloons", "config: {w}");
    }
}

/// Builds the label catalog and the model from config. The image only starts loading here;
/// balloons drawn before it arrives show just their label.
pub fn build_model(cfg: &GameConfig, image: Handle<Image>) -> Result<BalloonModel, ModelError> {
    let params = cfg.balloon_params();
    let measure = measurer_for(cfg.text.font_path.as_deref(), cfg.text.font_px);
    let catalog = TextCatalog::build(
        &cfg.text.entries,
        measure.as_ref(),
        params.box_size(),
        cfg.text.baseline_drop,
    )?;
    let surface = cfg.surface_size();
    match cfg.seed {
        Some(seed) => BalloonModel::with_rng(surface, params, catalog, image, StdRng::seed_from_u64(seed)),
        None => BalloonModel::new(surface, params, catalog, image),
    }
}

fn bootstrap_widget(mut commands: Commands, cfg: Res<GameConfig>, asset_server: Res<AssetServer>) {
    let image: Handle<Image> = asset_server.load(cfg.balloons.image.clone());
    let model = match build_model(&cfg, image) {
        Ok(model) => model,
        Err(e) => {
            error!(target: "balloons", "widget not started: {e}");
            return;
        }
    };
    let canvas = FrameCanvas::new(cfg.surface_size());
    let view = BalloonView::new(
        &canvas,
        TextStyle {
            font_px: cfg.text.font_px,
            color: cfg.text_color(),
        },
    );
    info!(
        target: "balloons",
        "widget started: {} labels, surface {}x{}, up to {} balloons",
        model.catalog().len(),
        cfg.window.width,
        cfg.window.height,
        model.params().max_balloons
    );
    commands.insert_resource(model);
    commands.insert_resource(view);
    commands.insert_resource(canvas);
}
