// Gallows illustration: six cumulative stages drawn as line paths and circles.
use web_sys::CanvasRenderingContext2d;

use crate::game::MAX_WRONG_GUESSES;

/// Coordinate space the strokes are authored in.
pub const LOGICAL_SIZE: (f64, f64) = (250.0, 250.0);

/// Stages in unlock order. Stage `k` (1-based) shows once `k` wrong guesses
/// have been made; the discriminant is `k - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GallowsStage {
    Gallows = 0,
    Rope,
    Head,
    Body,
    Arms,
    Legs,
}

impl GallowsStage {
    pub const ORDER: [GallowsStage; MAX_WRONG_GUESSES as usize] = [
        GallowsStage::Gallows,
        GallowsStage::Rope,
        GallowsStage::Head,
        GallowsStage::Body,
        GallowsStage::Arms,
        GallowsStage::Legs,
    ];

    /// Wrong-guess count at which this stage appears.
    pub fn threshold(self) -> u8 {
        self as u8 + 1
    }

    /// Strokes in [`LOGICAL_SIZE`] coordinates.
    pub fn strokes(self) -> &'static [Stroke] {
        match self {
            GallowsStage::Gallows => &[
                Stroke::Path(&[(20.0, 230.0), (120.0, 230.0)]),
                Stroke::Path(&[(70.0, 230.0), (70.0, 50.0), (170.0, 50.0)]),
            ],
            GallowsStage::Rope => &[Stroke::Path(&[(170.0, 50.0), (170.0, 90.0)])],
            GallowsStage::Head => &[Stroke::Circle {
                cx: 170.0,
                cy: 110.0,
                r: 20.0,
            }],
            GallowsStage::Body => &[Stroke::Path(&[(170.0, 130.0), (170.0, 180.0)])],
            GallowsStage::Arms => &[
                Stroke::Path(&[(170.0, 140.0), (140.0, 160.0)]),
                Stroke::Path(&[(170.0, 140.0), (200.0, 160.0)]),
            ],
            GallowsStage::Legs => &[
                Stroke::Path(&[(170.0, 180.0), (140.0, 210.0)]),
                Stroke::Path(&[(170.0, 180.0), (200.0, 210.0)]),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    /// Connected line segments through the points.
    Path(&'static [(f64, f64)]),
    Circle { cx: f64, cy: f64, r: f64 },
}

/// Stages visible after `wrong_guesses` misses; counts above the maximum show
/// everything.
pub fn visible_stages(wrong_guesses: u8) -> impl Iterator<Item = GallowsStage> {
    GallowsStage::ORDER
        .into_iter()
        .filter(move |s| s.threshold() <= wrong_guesses)
}

/// Stroke style applied before drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct Pen {
    pub color: String,
    pub width: f64,
}

/// Something gallows strokes can be painted on.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_pen(&mut self, pen: &Pen);
    fn stroke(&mut self, stroke: &Stroke);
}

/// Clears the surface and draws exactly the stages unlocked at `wrong_guesses`.
pub fn draw_gallows<S: Surface + ?Sized>(
    surface: &mut S,
    size: (f64, f64),
    pen: &Pen,
    wrong_guesses: u8,
) {
    surface.clear(size.0, size.1);
    surface.set_pen(pen);
    for stage in visible_stages(wrong_guesses) {
        for stroke in stage.strokes() {
            surface.stroke(stroke);
        }
    }
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn set_pen(&mut self, pen: &Pen) {
        self.set_stroke_style_str(&pen.color);
        self.set_line_width(pen.width);
        self.set_line_cap("round");
    }

    fn stroke(&mut self, stroke: &Stroke) {
        self.begin_path();
        match *stroke {
            Stroke::Path(points) => {
                if let Some((&(x0, y0), rest)) = points.split_first() {
                    self.move_to(x0, y0);
                    for &(x, y) in rest {
                        self.line_to(x, y);
                    }
                }
            }
            Stroke::Circle { cx, cy, r } => {
                if let Err(err) = self.arc(cx, cy, r, 0.0, std::f64::consts::TAU) {
                    tracing::warn!(?err, "arc failed");
                }
            }
        }
        CanvasRenderingContext2d::stroke(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records draw calls so tests can compare frames.
    #[derive(Debug, Default, PartialEq)]
    struct Recorder {
        clears: usize,
        strokes: Vec<Stroke>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.clears += 1;
            self.strokes.clear();
        }
        fn set_pen(&mut self, _pen: &Pen) {}
        fn stroke(&mut self, stroke: &Stroke) {
            self.strokes.push(*stroke);
        }
    }

    fn pen() -> Pen {
        Pen {
            color: "#fff".into(),
            width: 3.0,
        }
    }

    #[test]
    fn thresholds_follow_order() {
        let t: Vec<u8> = GallowsStage::ORDER.iter().map(|s| s.threshold()).collect();
        assert_eq!(t, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn zero_draws_nothing() {
        let mut rec = Recorder::default();
        draw_gallows(&mut rec, (250.0, 250.0), &pen(), 0);
        assert_eq!(rec.clears, 1);
        assert!(rec.strokes.is_empty());
    }

    #[test]
    fn each_count_adds_one_stage() {
        for n in 1..=MAX_WRONG_GUESSES {
            let prev: Vec<_> = visible_stages(n - 1).collect();
            let cur: Vec<_> = visible_stages(n).collect();
            assert_eq!(cur.len(), prev.len() + 1);
            assert!(prev.iter().all(|s| cur.contains(s)));
            assert_eq!(cur.last(), Some(&GallowsStage::ORDER[n as usize - 1]));
        }
    }

    #[test]
    fn redraw_is_identical() {
        let mut a = Recorder::default();
        draw_gallows(&mut a, (250.0, 250.0), &pen(), 4);
        let first = a.strokes.clone();
        draw_gallows(&mut a, (250.0, 250.0), &pen(), 4);
        assert_eq!(a.strokes, first);

        // going back down after a reset drops the higher stages
        draw_gallows(&mut a, (250.0, 250.0), &pen(), 1);
        assert_eq!(a.strokes, GallowsStage::Gallows.strokes().to_vec());
    }

    #[test]
    fn full_figure_at_max() {
        let mut rec = Recorder::default();
        draw_gallows(&mut rec, (250.0, 250.0), &pen(), MAX_WRONG_GUESSES);
        let expected: usize = GallowsStage::ORDER.iter().map(|s| s.strokes().len()).sum();
        assert_eq!(rec.strokes.len(), expected);
        assert!(rec.strokes.contains(&Stroke::Circle {
            cx: 170.0,
            cy: 110.0,
            r: 20.0
        }));
    }
}
