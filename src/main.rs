// This file is part of Balloon Pop.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use anyhow::Result;
use balloon_pop::core::config::ConfigIssues;
use balloon_pop::{BalloonGamePlugin, GameConfig};
use bevy::prelude::*;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Touch the rising balloons before they float away", long_about = None)]
struct Args {
    /// Base config; `<stem>.local.ron` next to it overrides individual keys.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: PathBuf,
    /// Seed for spawn positions and label choice.
    #[arg(long)]
    seed: Option<u64>,
    /// Balloon label (repeatable). Replaces the configured list.
    #[arg(long = "text")]
    texts: Vec<String>,
    /// Exit after this many seconds.
    #[arg(long)]
    auto_close: Option<f32>,
}

fn local_override(base: &std::path::Path) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("game");
    base.with_file_name(format!("{stem}.local.ron"))
}

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let args = Args::parse();
    let local = local_override(&args.config);
    let layers = [args.config.clone(), local.clone()];
    let (mut cfg, used, mut errors) = GameConfig::load_layered(&layers);
    if used.is_empty() {
        anyhow::bail!(
            "no readable config (tried {}): {}",
            args.config.display(),
            errors.join("; ")
        );
    }
    // the local override is optional
    let local_missing = format!("{}: read error", local.display());
    errors.retain(|e| !e.starts_with(&local_missing));
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if !args.texts.is_empty() {
        cfg.text.entries = args.texts;
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(BalloonGamePlugin::from_config(&cfg))
        .insert_resource(ClearColor(Color::srgb(0.53, 0.81, 0.92)))
        .insert_resource(cfg)
        .insert_resource(ConfigIssues(errors))
        .run();
    Ok(())
}
