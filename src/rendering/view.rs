use bevy::prelude::*;

use super::canvas::{DrawSurface, TextStyle};
use crate::gameplay::model::BalloonModel;

/// Stateless painter for the model's balloons. Holds only the surface size and text style.
#[derive(Resource, Debug, Clone)]
pub struct BalloonView {
    size: Vec2,
    style: TextStyle,
}

impl BalloonView {
    pub fn new(surface: &dyn DrawSurface, style: TextStyle) -> Self {
        Self { size: surface.size(), style }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Clears the surface and paints every active balloon: image over its box, label at
    /// `position + offset`. Returns how many balloons were painted (0 when the surface has
    /// no 2D context).
    pub fn draw(&self, model: &BalloonModel, surface: &mut dyn DrawSurface) -> usize {
        let Some(ctx) = surface.context_2d() else {
            return 0;
        };
        ctx.clear_rect(Rect::from_corners(Vec2::ZERO, self.size));
        let box_size = model.params().box_size();
        let balloons = model.balloons();
        for balloon in balloons {
            ctx.draw_image(&balloon.image, balloon.hit_box(box_size));
            let label = &balloon.text;
            ctx.fill_text(label.text(), balloon.position + label.offset(), &self.style);
        }
        balloons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::model::BalloonParams;
    use crate::gameplay::text_layout::{TextCatalog, TextMeasure, TextMetrics};
    use crate::rendering::canvas::Canvas2d;
    use rand::{rngs::StdRng, SeedableRng};

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Rect),
        Image(Rect),
        Text(String, Vec2),
    }

    struct Recorder {
        size: Vec2,
        supports_2d: bool,
        calls: Vec<Call>,
    }

    impl Canvas2d for Recorder {
        fn clear_rect(&mut self, rect: Rect) {
            self.calls.push(Call::Clear(rect));
        }
        fn draw_image(&mut self, _image: &Handle<Image>, rect: Rect) {
            self.calls.push(Call::Image(rect));
        }
        fn fill_text(&mut self, text: &str, at: Vec2, _style: &TextStyle) {
            self.calls.push(Call::Text(text.to_string(), at));
        }
    }

    impl DrawSurface for Recorder {
        fn size(&self) -> Vec2 {
            self.size
        }
        fn context_2d(&mut self) -> Option<&mut dyn Canvas2d> {
            if self.supports_2d {
                Some(self as &mut dyn Canvas2d)
            } else {
                None
            }
        }
    }

    struct Fixed;
    impl TextMeasure for Fixed {
        fn measure(&self, _text: &str) -> TextMetrics {
            TextMetrics { width: 20.0, descent: 10.0 }
        }
    }

    fn model() -> BalloonModel {
        let params = BalloonParams::default();
        let catalog = TextCatalog::build(["Q"], &Fixed, params.box_size(), 20.0).unwrap();
        BalloonModel::with_rng(Vec2::new(320.0, 480.0), params, catalog, Handle::default(), StdRng::seed_from_u64(9))
            .unwrap()
    }

    #[test]
    fn clears_then_draws_image_and_label() {
        let mut m = model();
        m.update();
        let pos = m.balloons()[0].position;
        let mut surface = Recorder { size: Vec2::new(320.0, 480.0), supports_2d: true, calls: Vec::new() };
        let view = BalloonView::new(&surface, TextStyle::default());
        assert_eq!(view.draw(&m, &mut surface), 1);
        assert_eq!(
            surface.calls,
            vec![
                Call::Clear(Rect::new(0.0, 0.0, 320.0, 480.0)),
                Call::Image(Rect::from_corners(pos, pos + Vec2::new(80.0, 100.0))),
                // offset: ((80 - 20) / 2, (100 - 10) / 2 + 20)
                Call::Text("Q".into(), pos + Vec2::new(30.0, 65.0)),
            ]
        );
    }

    #[test]
    fn empty_model_only_clears() {
        let m = model();
        let mut surface = Recorder { size: Vec2::new(320.0, 480.0), supports_2d: true, calls: Vec::new() };
        let view = BalloonView::new(&surface, TextStyle::default());
        assert_eq!(view.draw(&m, &mut surface), 0);
        assert_eq!(surface.calls.len(), 1);
    }

    #[test]
    fn surface_without_2d_is_left_alone() {
        let mut m = model();
        m.update();
        let mut surface = Recorder { size: Vec2::new(320.0, 480.0), supports_2d: false, calls: Vec::new() };
        let view = BalloonView::new(&surface, TextStyle::default());
        assert_eq!(view.draw(&m, &mut surface), 0);
        assert!(surface.calls.is_empty());
        assert_eq!(m.balloons().len(), 1);
    }
}
