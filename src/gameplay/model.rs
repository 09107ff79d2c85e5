use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::sync::Arc;

use super::events::{BalloonEmitter, BalloonEvent, BalloonEventKind};
use super::text_layout::{TextCatalog, TextLayout};

pub const BALLOON_WIDTH: f32 = 80.0;
pub const BALLOON_HEIGHT: f32 = 100.0;
pub const MAX_BALLOONS: usize = 5;
pub const SPAWN_INTERVAL_TICKS: u32 = 50;
pub const RISE_PER_TICK: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("text catalog is empty; balloons need at least one label")]
    EmptyCatalog,
}

/// Fixed geometry and cadence of the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalloonParams {
    pub width: f32,
    pub height: f32,
    pub max_balloons: usize,
    pub spawn_interval: u32,
    pub rise_per_tick: f32,
}

impl Default for BalloonParams {
    fn default() -> Self {
        Self {
            width: BALLOON_WIDTH,
            height: BALLOON_HEIGHT,
            max_balloons: MAX_BALLOONS,
            spawn_interval: SPAWN_INTERVAL_TICKS,
            rise_per_tick: RISE_PER_TICK,
        }
    }
}

impl BalloonParams {
    pub fn box_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone)]
pub struct Balloon {
    /// May point at an image that is still loading (or failed); it then draws as nothing.
    pub image: Handle<Image>,
    pub text: Arc<TextLayout>,
    /// Top-left corner in surface coordinates (y grows downward).
    pub position: Vec2,
    pub pending_removal: bool,
}

impl Balloon {
    pub fn hit_box(&self, size: Vec2) -> Rect {
        Rect::from_corners(self.position, self.position + size)
    }
}

/// What one `update` call did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub spawned: bool,
    pub events: Vec<BalloonEvent>,
}

/// Owns the active balloons, the label catalog and the spawn cadence.
#[derive(Resource)]
pub struct BalloonModel {
    balloons: Vec<Balloon>,
    catalog: TextCatalog,
    ticks: u32,
    surface: Vec2,
    params: BalloonParams,
    image: Handle<Image>,
    rng: Box<dyn RngCore + Send + Sync>,
    emitter: BalloonEmitter,
    render_requested: bool,
}

impl BalloonModel {
    /// Model seeded from OS entropy.
    pub fn new(
        surface: Vec2,
        params: BalloonParams,
        catalog: TextCatalog,
        image: Handle<Image>,
    ) -> Result<Self, ModelError> {
        Self::with_rng(surface, params, catalog, image, StdRng::from_entropy())
    }

    pub fn with_rng(
        surface: Vec2,
        params: BalloonParams,
        catalog: TextCatalog,
        image: Handle<Image>,
        rng: impl RngCore + Send + Sync + 'static,
    ) -> Result<Self, ModelError> {
        if catalog.is_empty() {
            return Err(ModelError::EmptyCatalog);
        }
        debug!(
            target: "balloons",
            "model ready: surface={}x{} labels={} max={}",
            surface.x,
            surface.y,
            catalog.len(),
            params.max_balloons
        );
        Ok(Self {
            balloons: Vec::with_capacity(params.max_balloons),
            catalog,
            ticks: 0,
            surface,
            params,
            image,
            rng: Box::new(rng),
            emitter: BalloonEmitter::default(),
            render_requested: false,
        })
    }

    pub fn balloons(&self) -> &[Balloon] {
        &self.balloons
    }

    pub fn catalog(&self) -> &TextCatalog {
        &self.catalog
    }

    pub fn params(&self) -> &BalloonParams {
        &self.params
    }

    pub fn surface_size(&self) -> Vec2 {
        self.surface
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn on<F>(&mut self, kind: BalloonEventKind, handler: F)
    where
        F: FnMut(&BalloonEvent) + Send + Sync + 'static,
    {
        self.emitter.on(kind, handler);
    }

    /// Flags every balloon containing any of `points` (edges inclusive). Already flagged
    /// balloons stay flagged. Removal happens on the next `update`. Returns how many
    /// balloons were newly flagged.
    pub fn on_touch(&mut self, points: &[Vec2]) -> usize {
        let size = self.params.box_size();
        let mut flagged = 0;
        for balloon in self.balloons.iter_mut().filter(|b| !b.pending_removal) {
            let hit_box = balloon.hit_box(size);
            if points.iter().any(|p| hit_box.contains(*p)) {
                balloon.pending_removal = true;
                flagged += 1;
            }
        }
        flagged
    }

    /// One tick: maybe spawn, rise every balloon, drop touched / escaped ones and emit
    /// their events. Touch wins over escape when both apply.
    pub fn update(&mut self) -> TickReport {
        let mut report = TickReport::default();

        if self.balloons.len() < self.params.max_balloons
            && self.ticks % self.params.spawn_interval.max(1) == 0
        {
            let balloon = self.spawn_balloon();
            debug!(
                target: "balloons",
                "spawned '{}' at ({}, {})",
                balloon.text.text(),
                balloon.position.x,
                balloon.position.y
            );
            self.balloons.push(balloon);
            self.ticks = 0;
            report.spawned = true;
        }
        self.ticks = self.ticks.wrapping_add(1);

        let rise = self.params.rise_per_tick;
        let events = &mut report.events;
        self.balloons.retain_mut(|balloon| {
            balloon.position.y -= rise;
            if balloon.pending_removal {
                events.push(BalloonEvent::Touched { text: balloon.text.text().to_string() });
                false
            } else if balloon.position.y < 0.0 {
                events.push(BalloonEvent::Expired { text: balloon.text.text().to_string() });
                false
            } else {
                true
            }
        });

        for event in &report.events {
            debug!(target: "balloons", "{} '{}'", event.kind(), event.text());
            self.emitter.emit(event);
        }

        self.render_requested = true;
        report
    }

    /// Returns whether an `update` asked for a redraw since the last call, clearing the request.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    fn spawn_balloon(&mut self) -> Balloon {
        let max_x = (self.surface.x - self.params.width).max(0.0).floor() as u32;
        let x = self.rng.gen_range(0..=max_x) as f32;
        Balloon {
            image: self.image.clone(),
            text: self.catalog.choose(&mut self.rng),
            position: Vec2::new(x, self.surface.y - self.params.height),
            pending_removal: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn balloons_mut(&mut self) -> &mut Vec<Balloon> {
        &mut self.balloons
    }
}

impl std::fmt::Debug for BalloonModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalloonModel")
            .field("balloons", &self.balloons.len())
            .field("ticks", &self.ticks)
            .field("surface", &self.surface)
            .field("params", &self.params)
            .field("emitter", &self.emitter)
            .finish_non_exhaustive()
    }
}
