use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use bevy::prelude::*;
use std::path::Path;

use crate::gameplay::text_layout::{TextMeasure, TextMetrics};

/// Measures labels with a real font (kerning included).
pub struct GlyphMeasure {
    font: FontArc,
    scale: PxScale,
}

impl GlyphMeasure {
    pub fn new(font: FontArc, font_px: f32) -> Self {
        Self { font, scale: PxScale::from(font_px) }
    }

    pub fn from_file(path: impl AsRef<Path>, font_px: f32) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| anyhow::anyhow!("parse font {}: {e}", path.display()))?;
        Ok(Self::new(font, font_px))
    }
}

impl TextMeasure for GlyphMeasure {
    fn measure(&self, text: &str) -> TextMetrics {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut prev = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        // ab_glyph reports descent as a negative offset from the baseline
        TextMetrics { width, descent: -scaled.descent() }
    }
}

/// Font-free estimate used when no font file is available.
#[derive(Debug, Clone, Copy)]
pub struct ApproxMeasure {
    pub font_px: f32,
}

impl ApproxMeasure {
    const ADVANCE_EM: f32 = 0.5;
    const DESCENT_EM: f32 = 0.22;
}

impl TextMeasure for ApproxMeasure {
    fn measure(&self, text: &str) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.font_px * Self::ADVANCE_EM,
            descent: self.font_px * Self::DESCENT_EM,
        }
    }
}

/// Glyph metrics from `font_path` when it loads, otherwise the estimate.
pub fn measurer_for(font_path: Option<&str>, font_px: f32) -> Box<dyn TextMeasure> {
    let Some(path) = font_path else {
        return Box::new(ApproxMeasure { font_px });
    };
    match GlyphMeasure::from_file(path, font_px) {
        Ok(m) => {
            info!(target: "balloons", "Loaded font '{path}' for label metrics");
            Box::new(m)
        }
        Err(e) => {
            warn!(target: "balloons", "Font '{path}' unavailable ({e:#}); using approximate label metrics");
            Box::new(ApproxMeasure { font_px })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_scales_with_length() {
        let m = ApproxMeasure { font_px: 48.0 };
        assert_eq!(m.measure("").width, 0.0);
        assert_eq!(m.measure("ab").width, 48.0);
        assert!(m.measure("a").descent > 0.0);
    }

    #[test]
    fn missing_font_falls_back() {
        let m = measurer_for(Some("does/not/exist.ttf"), 10.0);
        assert_eq!(m.measure("abcd").width, 20.0);
    }
}
