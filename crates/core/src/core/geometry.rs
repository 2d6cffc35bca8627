//! Tape pixel geometry: where units sit, where inputs go, and the arc shape.
//!
//! The canvas is two stacked bands of `height` pixels. The tape image fills
//! the lower band; arcs live in the upper one and land on the boundary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cubic-bezier circle constant, `4/3 * (sqrt(2) - 1)`.
pub const KAPPA: f64 = 0.5522848;

/// Pixel layout of the tape. Matches the stock `tape.png` asset by default.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TapeGeometry {
    /// Width of the tape image and of the canvas.
    pub width: f64,
    /// Height of one band; the canvas is two bands tall.
    pub height: f64,
    /// Pixel x of unit 0.
    pub margin_left: f64,
    /// Pixels between consecutive units.
    pub step: f64,
    /// Width of an input box; also its fixed top offset.
    pub input_size: f64,
    /// Length of each arrowhead stroke.
    pub head_len: f64,
}

impl Default for TapeGeometry {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 105.0,
            margin_left: 39.0,
            step: 41.0,
            input_size: 20.0,
            head_len: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One `bezierCurveTo` from the current point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// Two short strokes meeting at `tip`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ArrowHead {
    pub tip: Point,
    pub upper: Point,
    pub lower: Point,
}

/// A half-ellipse over a tape span plus its arrowhead, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ArcPath {
    pub start: Point,
    pub rise: CubicSegment,
    pub fall: CubicSegment,
    pub head: ArrowHead,
}

impl ArcPath {
    /// Horizontal extent `(left, right)`.
    pub fn x_span(&self) -> (f64, f64) {
        (self.start.x, self.fall.to.x)
    }
}

/// Where an input box goes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum InputPlacement {
    /// Absolute `left`/`top` offsets in pixels.
    At { left: f64, top: f64 },
    /// Pinned against the right edge, `right` pixels in from it.
    RightEdge { right: f64 },
}

impl TapeGeometry {
    /// Canvas size for both bands.
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.width, self.height * 2.0)
    }

    /// Pixel x of a tape unit.
    pub fn unit_x(&self, unit: u32) -> f64 {
        self.margin_left + self.step * unit as f64
    }

    /// Center an input over the span starting at `start` and `span` units long.
    pub fn input_placement(&self, start: u32, span: u32) -> InputPlacement {
        let mid = span as f64 / 2.0;
        InputPlacement::At {
            left: self.margin_left + self.step * start as f64 + self.step * mid
                - self.input_size / 2.0,
            top: self.input_size,
        }
    }

    /// Placement of the sum input, just past the right edge of the tape.
    pub fn sum_placement(&self) -> InputPlacement {
        InputPlacement::RightEdge { right: -5.0 }
    }

    /// Arc from `start_unit` to `end_unit`, baseline on the band boundary.
    ///
    /// `end_unit < start_unit` is treated as an empty span.
    pub fn arc(&self, start_unit: u32, end_unit: u32) -> ArcPath {
        let end_unit = end_unit.max(start_unit);
        let x = self.unit_x(start_unit);
        let xe = self.unit_x(end_unit);
        let w = xe - x;
        let h = self.height;
        let y = h / 2.0;
        let ym = y + h / 2.0;
        let xm = x + w / 2.0;
        let ox = (w / 2.0) * KAPPA;
        let oy = (h / 2.0) * KAPPA;

        let rise = CubicSegment {
            c1: Point::new(x, ym - oy),
            c2: Point::new(xm - ox, y),
            to: Point::new(xm, y),
        };
        let fall = CubicSegment {
            c1: Point::new(xm + ox, y),
            c2: Point::new(xe, ym - oy),
            to: Point::new(xe, ym),
        };

        let angle = 5f64.atan2(1.0);
        let sixth = std::f64::consts::PI / 6.0;
        let head = ArrowHead {
            tip: Point::new(xe, ym),
            upper: Point::new(
                xe - self.head_len * (angle - sixth).cos(),
                ym - self.head_len * (angle - sixth).sin(),
            ),
            lower: Point::new(
                xe - self.head_len * (angle + sixth).cos(),
                ym - self.head_len * (angle + sixth).sin(),
            ),
        };

        ArcPath {
            start: Point::new(x, ym),
            rise,
            fall,
            head,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn consecutive_arcs_are_contiguous() {
        let g = TapeGeometry::default();
        let (a, b) = (3, 4);
        let first = g.arc(0, a);
        let second = g.arc(a, a + b);

        let (l1, r1) = first.x_span();
        let (l2, r2) = second.x_span();
        assert!(close(r1, l2));
        assert!(l1 < r1 && l2 < r2);
        assert!(close(r1 - l1, g.step * a as f64));
        assert!(close(r2 - l2, g.step * b as f64));
    }

    #[test]
    fn arc_peaks_at_top_of_upper_half() {
        let g = TapeGeometry::default();
        let arc = g.arc(2, 6);
        assert!(close(arc.start.y, g.height));
        assert!(close(arc.rise.to.y, g.height / 2.0));
        assert!(close(arc.rise.to.x, g.unit_x(4)));
        assert!(close(arc.fall.to.y, g.height));
    }

    #[test]
    fn arrowhead_hangs_off_the_right_end() {
        let g = TapeGeometry::default();
        let arc = g.arc(0, 5);
        assert_eq!(arc.head.tip, arc.fall.to);
        assert!(arc.head.upper.y < arc.head.tip.y);
        assert!(arc.head.lower.y < arc.head.tip.y);
        let len = |p: Point| ((p.x - arc.head.tip.x).powi(2) + (p.y - arc.head.tip.y).powi(2)).sqrt();
        assert!(close(len(arc.head.upper), g.head_len));
        assert!(close(len(arc.head.lower), g.head_len));
    }

    #[test]
    fn reversed_span_collapses() {
        let g = TapeGeometry::default();
        let (l, r) = g.arc(5, 2).x_span();
        assert!(close(l, r));
    }

    #[test]
    fn input_is_centered_over_span() {
        let g = TapeGeometry::default();
        // 39 + 41*0 + 41*1.5 - 10
        assert_eq!(
            g.input_placement(0, 3),
            InputPlacement::At {
                left: 90.5,
                top: 20.0
            }
        );
        // 39 + 41*3 + 41*2 - 10
        assert_eq!(
            g.input_placement(3, 4),
            InputPlacement::At {
                left: 234.0,
                top: 20.0
            }
        );
    }

    #[test]
    fn canvas_is_two_bands() {
        assert_eq!(TapeGeometry::default().canvas_size(), (900.0, 210.0));
    }
}
