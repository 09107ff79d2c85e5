use bevy::prelude::*;
use rand::Rng;
use std::sync::Arc;

use super::model::ModelError;

/// Measured extent of a label at the widget's font size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f32,
    /// Distance the glyphs reach below the baseline (positive).
    pub descent: f32,
}

/// Anything able to measure a label before it is drawn.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> TextMetrics;
}

/// A label plus its offset inside the balloon box. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    text: String,
    offset: Vec2,
}

impl TextLayout {
    /// Centers `text` horizontally in `box_size`; the y offset is the baseline, pushed
    /// `baseline_drop` below the vertical middle.
    pub fn centered(text: impl Into<String>, metrics: TextMetrics, box_size: Vec2, baseline_drop: f32) -> Self {
        let x = ((box_size.x - metrics.width.floor()) / 2.0).floor();
        let y = ((box_size.y - metrics.descent.floor()) / 2.0).floor() + baseline_drop;
        Self { text: text.into(), offset: Vec2::new(x, y) }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}

/// Fixed set of labels new balloons draw from. Never empty.
#[derive(Debug, Clone)]
pub struct TextCatalog {
    entries: Vec<Arc<TextLayout>>,
}

impl TextCatalog {
    pub fn build<S, I>(
        texts: I,
        measure: &dyn TextMeasure,
        box_size: Vec2,
        baseline_drop: f32,
    ) -> Result<Self, ModelError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let entries: Vec<_> = texts
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                Arc::new(TextLayout::centered(s, measure.measure(s), box_size, baseline_drop))
            })
            .collect();
        if entries.is_empty() {
            return Err(ModelError::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// Uniform pick over every entry.
    pub fn choose(&self, rng: &mut impl Rng) -> Arc<TextLayout> {
        let index = rng.gen_range(0..self.entries.len());
        Arc::clone(&self.entries[index])
    }

    pub fn contains(&self, layout: &Arc<TextLayout>) -> bool {
        self.entries.iter().any(|e| Arc::ptr_eq(e, layout))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
