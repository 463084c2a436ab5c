//! Adaptive flattening of Bézier paths into polylines.
//!
//! The input is a raw command/point stream in the layout vector-graphics
//! engines use internally: parallel arrays where a quadratic is encoded as
//! one control command followed by an on-curve point, and a cubic as two
//! control commands followed by an on-curve point. Flattening walks the
//! stream once and subdivides curved segments at their parametric midpoint
//! until the flatness criterion meets the tolerance.

use kurbo::{BezPath, Point};

use crate::error::{RasterError, RasterResult};

/// Chord-distance tolerance used when the caller does not supply one.
pub const DEFAULT_TOLERANCE: f64 = 0.25;

/// Subdivision depth cap. Each midpoint split roughly quarters the flatness
/// error of a smooth curve, so well-formed inputs stay far below this; the
/// cap keeps degenerate control points (huge and nearly colinear) from
/// recursing without bound, emitting the best approximation so far instead.
const MAX_SUBDIV_DEPTH: u32 = 24;

/// Raw path commands. `Quad` must be followed by one `On` point; `Cubic`
/// comes in pairs followed by one `On` point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PathCmd {
    Move,
    On,
    Quad,
    Cubic,
    Close,
}

/// An ordered sequence of (command, point) pairs.
///
/// `Close` carries a placeholder point to keep the arrays parallel.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommandStream {
    cmds: Vec<PathCmd>,
    points: Vec<Point>,
}

impl CommandStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn move_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.push_raw(PathCmd::Move, p.into())
    }

    pub fn line_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.push_raw(PathCmd::On, p.into())
    }

    pub fn quad_to(&mut self, ctrl: impl Into<Point>, end: impl Into<Point>) -> &mut Self {
        self.push_raw(PathCmd::Quad, ctrl.into());
        self.push_raw(PathCmd::On, end.into())
    }

    pub fn cubic_to(
        &mut self,
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> &mut Self {
        self.push_raw(PathCmd::Cubic, ctrl1.into());
        self.push_raw(PathCmd::Cubic, ctrl2.into());
        self.push_raw(PathCmd::On, end.into())
    }

    pub fn close(&mut self) -> &mut Self {
        self.push_raw(PathCmd::Close, Point::ZERO)
    }

    /// Append a bare (command, point) pair without structural checking.
    /// The flattener validates structure, so this is how malformed streams
    /// are built in tests and how decoders append verbatim engine data.
    pub fn push_raw(&mut self, cmd: PathCmd, point: Point) -> &mut Self {
        self.cmds.push(cmd);
        self.points.push(point);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (PathCmd, Point)> + '_ {
        self.cmds.iter().copied().zip(self.points.iter().copied())
    }
}

/// Flatten with [`DEFAULT_TOLERANCE`].
pub fn flatten_default(src: &CommandStream) -> RasterResult<BezPath> {
    flatten(src, DEFAULT_TOLERANCE)
}

/// Convert `src` into an equivalent polyline path.
///
/// The result contains only `MoveTo`/`LineTo`/`ClosePath` elements and is
/// freshly allocated; `src` is left untouched. Curved segments are
/// subdivided until their flatness (perpendicular distance of the control
/// point(s) from the endpoint chord) is at most `tolerance`.
///
/// Drawing commands that arrive before any `Move` have no open subpath to
/// extend; they emit nothing but still advance the current point.
#[tracing::instrument(skip(src), fields(commands = src.len()))]
pub fn flatten(src: &CommandStream, tolerance: f64) -> RasterResult<BezPath> {
    let mut dst = BezPath::new();
    let cmds = &src.cmds;
    let points = &src.points;
    let n = cmds.len();

    let mut last_on = Point::ZERO;
    let mut sub_start = Point::ZERO;
    let mut has_sub = false;

    let mut i = 0;
    while i < n {
        match cmds[i] {
            PathCmd::Move => {
                dst.move_to(points[i]);
                last_on = points[i];
                sub_start = points[i];
                has_sub = true;
            }
            PathCmd::On => {
                // drawing before any Move has no open subpath to extend;
                // the point still becomes the current point
                if has_sub {
                    dst.line_to(points[i]);
                }
                last_on = points[i];
            }
            PathCmd::Quad => {
                if i + 1 >= n || cmds[i + 1] != PathCmd::On {
                    return Err(RasterError::malformed_curve(
                        "quad control must be followed by an on-curve point",
                    ));
                }
                let ctrl = points[i];
                let end = points[i + 1];
                if has_sub {
                    flatten_quad(&mut dst, last_on, ctrl, end, tolerance, MAX_SUBDIV_DEPTH);
                }
                last_on = end;
                i += 1;
            }
            PathCmd::Cubic => {
                if i + 2 >= n || cmds[i + 1] != PathCmd::Cubic || cmds[i + 2] != PathCmd::On {
                    return Err(RasterError::malformed_curve(
                        "cubic needs two control commands and an on-curve point",
                    ));
                }
                let c1 = points[i];
                let c2 = points[i + 1];
                let end = points[i + 2];
                if has_sub {
                    flatten_cubic(&mut dst, last_on, c1, c2, end, tolerance, MAX_SUBDIV_DEPTH);
                }
                last_on = end;
                i += 2;
            }
            PathCmd::Close => {
                if has_sub {
                    dst.close_path();
                    last_on = sub_start;
                }
            }
        }
        i += 1;
    }

    Ok(dst)
}

/// Perpendicular distance of the control point from the chord `p0..p2`.
/// A zero-length chord is already flat.
fn quad_flatness(p0: Point, p1: Point, p2: Point) -> f64 {
    let ux = p2.x - p0.x;
    let uy = p2.y - p0.y;
    let vx = p1.x - p0.x;
    let vy = p1.y - p0.y;

    let area2 = (ux * vy - uy * vx).abs();
    let len = (ux * ux + uy * uy).sqrt();
    if len > 0.0 { area2 / len } else { 0.0 }
}

/// Maximum of the two control points' distances from the chord `p0..p3`.
fn cubic_flatness(p0: Point, p1: Point, p2: Point, p3: Point) -> f64 {
    let ux = p3.x - p0.x;
    let uy = p3.y - p0.y;
    let len = (ux * ux + uy * uy).sqrt();
    if len == 0.0 {
        return 0.0;
    }

    let dist = |p: Point| {
        let vx = p.x - p0.x;
        let vy = p.y - p0.y;
        (ux * vy - uy * vx).abs() / len
    };

    dist(p1).max(dist(p2))
}

fn flatten_quad(dst: &mut BezPath, p0: Point, p1: Point, p2: Point, tol: f64, depth: u32) {
    let flatness = quad_flatness(p0, p1, p2);
    // Non-finite flatness means non-finite coordinates; subdividing cannot
    // improve those, so emit the endpoint and move on.
    if depth == 0 || !flatness.is_finite() || flatness <= tol {
        dst.line_to(p2);
        return;
    }

    let p01 = p0.lerp(p1, 0.5);
    let p12 = p1.lerp(p2, 0.5);
    let p012 = p01.lerp(p12, 0.5);

    flatten_quad(dst, p0, p01, p012, tol, depth - 1);
    flatten_quad(dst, p012, p12, p2, tol, depth - 1);
}

fn flatten_cubic(
    dst: &mut BezPath,
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    tol: f64,
    depth: u32,
) {
    let flatness = cubic_flatness(p0, p1, p2, p3);
    if depth == 0 || !flatness.is_finite() || flatness <= tol {
        dst.line_to(p3);
        return;
    }

    let p01 = p0.lerp(p1, 0.5);
    let p12 = p1.lerp(p2, 0.5);
    let p23 = p2.lerp(p3, 0.5);

    let p012 = p01.lerp(p12, 0.5);
    let p123 = p12.lerp(p23, 0.5);
    let p0123 = p012.lerp(p123, 0.5);

    flatten_cubic(dst, p0, p01, p012, p0123, tol, depth - 1);
    flatten_cubic(dst, p0123, p123, p23, p3, tol, depth - 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn polylines_pass_through_unchanged() {
        let mut src = CommandStream::new();
        src.move_to((10.0, 10.0))
            .line_to((54.0, 10.0))
            .line_to((54.0, 54.0))
            .close();

        for tol in [0.01, 0.25, 10.0] {
            let flat = flatten(&src, tol).unwrap();
            let els: Vec<PathEl> = flat.elements().to_vec();
            assert_eq!(
                els,
                vec![
                    PathEl::MoveTo(Point::new(10.0, 10.0)),
                    PathEl::LineTo(Point::new(54.0, 10.0)),
                    PathEl::LineTo(Point::new(54.0, 54.0)),
                    PathEl::ClosePath,
                ]
            );
        }
    }

    #[test]
    fn output_has_no_curves() {
        let mut src = CommandStream::new();
        src.move_to((0.0, 0.0))
            .quad_to((50.0, 100.0), (100.0, 0.0))
            .cubic_to((120.0, 50.0), (180.0, 50.0), (200.0, 0.0));
        let flat = flatten_default(&src).unwrap();
        for el in flat.elements() {
            assert!(matches!(
                el,
                PathEl::MoveTo(_) | PathEl::LineTo(_) | PathEl::ClosePath
            ));
        }
    }

    #[test]
    fn quad_without_on_point_is_malformed() {
        let mut src = CommandStream::new();
        src.move_to((0.0, 0.0));
        src.push_raw(PathCmd::Quad, Point::new(5.0, 5.0));
        let err = flatten_default(&src).unwrap_err();
        assert!(matches!(err, RasterError::MalformedCurve(_)));

        let mut src = CommandStream::new();
        src.move_to((0.0, 0.0));
        src.push_raw(PathCmd::Quad, Point::new(5.0, 5.0));
        src.push_raw(PathCmd::Close, Point::ZERO);
        assert!(flatten_default(&src).is_err());
    }

    #[test]
    fn lone_cubic_control_is_malformed() {
        let mut src = CommandStream::new();
        src.move_to((0.0, 0.0));
        src.push_raw(PathCmd::Cubic, Point::new(1.0, 1.0));
        src.push_raw(PathCmd::On, Point::new(2.0, 0.0));
        let err = flatten_default(&src).unwrap_err();
        assert!(matches!(err, RasterError::MalformedCurve(_)));
    }

    #[test]
    fn drawing_before_any_move_emits_nothing() {
        // leading line
        let mut src = CommandStream::new();
        src.line_to((5.0, 5.0));
        let flat = flatten_default(&src).unwrap();
        assert!(flat.elements().is_empty());

        // leading quad
        let mut src = CommandStream::new();
        src.quad_to((1.0, 2.0), (4.0, 0.0));
        let flat = flatten_default(&src).unwrap();
        assert!(flat.elements().is_empty());

        // leading cubic, then a Move opens a real subpath
        let mut src = CommandStream::new();
        src.cubic_to((1.0, 1.0), (2.0, 1.0), (3.0, 0.0));
        src.move_to((0.0, 0.0)).line_to((1.0, 0.0));
        let flat = flatten_default(&src).unwrap();
        assert_eq!(
            flat.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(1.0, 0.0)),
            ]
        );
    }

    #[test]
    fn close_without_move_is_a_no_op() {
        let mut src = CommandStream::new();
        src.close();
        let flat = flatten_default(&src).unwrap();
        assert!(flat.elements().is_empty());
    }

    #[test]
    fn close_resets_current_point_to_subpath_start() {
        // After a close, a curve continues from the subpath start.
        let mut src = CommandStream::new();
        src.move_to((0.0, 0.0)).line_to((10.0, 0.0)).close();
        src.quad_to((1.0, 1.0), (2.0, 0.0));
        let flat = flatten(&src, 1000.0).unwrap();
        // huge tolerance: the quad flattens to a single line to its endpoint
        let els = flat.elements();
        assert_eq!(els.last(), Some(&PathEl::LineTo(Point::new(2.0, 0.0))));
        assert_eq!(els.len(), 4);
    }

    #[test]
    fn degenerate_zero_length_chord_is_flat() {
        let mut src = CommandStream::new();
        src.move_to((3.0, 3.0)).quad_to((100.0, 100.0), (3.0, 3.0));
        let flat = flatten(&src, 0.001).unwrap();
        assert_eq!(
            flat.elements(),
            &[
                PathEl::MoveTo(Point::new(3.0, 3.0)),
                PathEl::LineTo(Point::new(3.0, 3.0)),
            ]
        );
    }

    #[test]
    fn pathological_controls_terminate() {
        // Control points a million units off a unit-length chord.
        let mut src = CommandStream::new();
        src.move_to((0.0, 0.0))
            .cubic_to((0.0, 1.0e6), (1.0, -1.0e6), (1.0, 0.0));
        let flat = flatten(&src, 0.01).unwrap();
        assert!(!flat.elements().is_empty());
    }

    #[test]
    fn non_finite_controls_do_not_hang() {
        let mut src = CommandStream::new();
        src.move_to((0.0, 0.0))
            .quad_to((f64::NAN, f64::INFINITY), (1.0, 0.0));
        let flat = flatten(&src, 0.25).unwrap();
        assert_eq!(flat.elements().len(), 2);
    }

    #[test]
    fn stream_roundtrips_through_serde() {
        let mut src = CommandStream::new();
        src.move_to((1.0, 2.0)).quad_to((3.0, 4.0), (5.0, 6.0)).close();
        let json = serde_json::to_string(&src).unwrap();
        let back: CommandStream = serde_json::from_str(&json).unwrap();
        assert_eq!(src, back);
    }
}
