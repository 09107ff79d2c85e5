use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::gameplay::model::BalloonParams;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 480.0,
            title: "Balloon Pop".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BalloonConfig {
    pub width: f32,
    pub height: f32,
    pub max_active: usize,
    pub spawn_interval_ticks: u32,
    pub update_period_ms: u64,
    pub rise_per_tick: f32,
    /// Asset path (relative to `assets/`) of the balloon sprite.
    pub image: String,
}
impl Default for BalloonConfig {
    fn default() -> Self {
        Self {
            width: 80.0,
            height: 100.0,
            max_active: 5,
            spawn_interval_ticks: 50,
            update_period_ms: 30,
            rise_per_tick: 2.0,
            image: "images/redballoon.png".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    pub entries: Vec<String>,
    pub font_px: f32,
    /// Optional TTF/OTF on disk used to measure labels. Missing → approximate metrics.
    pub font_path: Option<String>,
    pub baseline_drop: f32,
    pub color: (f32, f32, f32),
}
impl Default for TextConfig {
    fn default() -> Self {
        Self {
            entries: ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect(),
            font_px: 48.0,
            font_path: None,
            baseline_drop: 20.0,
            color: (1.0, 1.0, 1.0),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub mouse_as_touch: bool,
}
impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse_as_touch: true }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub balloons: BalloonConfig,
    pub text: TextConfig,
    pub input: InputConfig,
    pub seed: Option<u64>,
}

/// Non-fatal problems met while loading config files, logged once the app runs.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ConfigIssues(pub Vec<String>);

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(format!("{e:#}"))),
        }
    }

    /// Loads every readable file in order, later files overriding earlier ones key by key.
    /// Returns the merged config, the files that were used and any per-file errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;

        fn overlay(base: &mut Value, top: Value) {
            match (base, top) {
                (Value::Map(base_map), Value::Map(top_map)) => {
                    for (key, value) in top_map.into_iter() {
                        let mut incoming = Some(value);
                        if let Some((_, existing)) = base_map.iter_mut().find(|(k, _)| **k == key) {
                            if let Some(v) = incoming.take() {
                                overlay(existing, v);
                            }
                        }
                        if let Some(v) = incoming {
                            base_map.insert(key, v);
                        }
                    }
                }
                (slot, value) => *slot = value,
            }
        }

        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path = p.as_ref();
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    errors.push(format!("{}: read error: {e}", path.display()));
                    continue;
                }
            };
            match ron::from_str::<Value>(&text) {
                Ok(value) => {
                    match merged.as_mut() {
                        Some(cur) => overlay(cur, value),
                        None => merged = Some(value),
                    }
                    used.push(path.display().to_string());
                }
                Err(e) => errors.push(format!("{}: parse error: {e}", path.display())),
            }
        }

        let Some(value) = merged else {
            return (Self::default(), used, errors);
        };
        match value.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (Self::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        let win = &self.window;
        let b = &self.balloons;
        if win.width <= 0.0 || win.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if win.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                win.auto_close
            ));
        }
        if b.width <= 0.0 || b.height <= 0.0 {
            w.push("balloons.width/height must be > 0".into());
        }
        if b.width > win.width {
            w.push(format!(
                "balloon width {} exceeds surface width {}; balloons spawn at x = 0",
                b.width, win.width
            ));
        }
        if b.height > win.height {
            w.push(format!(
                "balloon height {} exceeds surface height {}; balloons spawn above the top and expire at once",
                b.height, win.height
            ));
        }
        if b.max_active == 0 {
            w.push("balloons.max_active is 0; nothing will spawn".into());
        }
        if b.spawn_interval_ticks == 0 {
            w.push("balloons.spawn_interval_ticks is 0 -> treated as 1".into());
        }
        if b.update_period_ms == 0 {
            w.push("balloons.update_period_ms is 0 -> clamped to 1 ms".into());
        }
        if b.rise_per_tick <= 0.0 {
            w.push(format!(
                "balloons.rise_per_tick {} must be > 0 or balloons never expire",
                b.rise_per_tick
            ));
        }
        if self.text.entries.is_empty() {
            w.push("text.entries is empty; the widget cannot start".into());
        }
        if self.text.font_px <= 0.0 {
            w.push("text.font_px must be > 0".into());
        }
        w
    }

    pub fn balloon_params(&self) -> BalloonParams {
        let b = &self.balloons;
        BalloonParams {
            width: b.width,
            height: b.height,
            max_balloons: b.max_active,
            spawn_interval: b.spawn_interval_ticks.max(1),
            rise_per_tick: b.rise_per_tick,
        }
    }

    pub fn surface_size(&self) -> Vec2 {
        Vec2::new(self.window.width, self.window.height)
    }

    pub fn text_color(&self) -> Color {
        let (r, g, b) = self.text.color;
        Color::srgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_constants() {
        let cfg = GameConfig::default();
        let p = cfg.balloon_params();
        assert_eq!(p.width, 80.0);
        assert_eq!(p.height, 100.0);
        assert_eq!(p.max_balloons, 5);
        assert_eq!(p.spawn_interval, 50);
        assert_eq!(p.rise_per_tick, 2.0);
        assert_eq!(cfg.balloons.update_period_ms, 30);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg: GameConfig = ron::from_str("(text: (entries: [\"X\"]), seed: Some(7))").unwrap();
        assert_eq!(cfg.text.entries, vec!["X".to_string()]);
        assert_eq!(cfg.text.font_px, 48.0);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn zero_interval_is_clamped_and_reported() {
        let mut cfg = GameConfig::default();
        cfg.balloons.spawn_interval_ticks = 0;
        cfg.text.entries.clear();
        assert_eq!(cfg.balloon_params().spawn_interval, 1);
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("spawn_interval_ticks")));
        assert!(warnings.iter().any(|w| w.contains("text.entries")));
    }
}
