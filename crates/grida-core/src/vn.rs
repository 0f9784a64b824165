//! Vector networks.
//!
//! A vector network is a graph of vertices joined by cubic segments. Segment
//! tangents are stored relative to their vertex, so a straight segment has zero
//! tangents on both ends.

use kurbo::{Affine, BezPath, CubicBez, ParamCurveExtrema, PathEl, Point, QuadBez, Rect, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vector network errors.
#[derive(Debug, Error)]
pub enum VectorNetworkError {
    #[error("Invalid path data: {0}")]
    InvalidPathData(#[from] kurbo::SvgParseError),
}

/// A segment between vertices `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorNetworkSegment {
    pub a: usize,
    pub b: usize,
    /// Tangent at `a`, relative to vertex `a`.
    #[serde(default)]
    pub ta: Vec2,
    /// Tangent at `b`, relative to vertex `b`.
    #[serde(default)]
    pub tb: Vec2,
}

impl VectorNetworkSegment {
    /// Straight segment.
    pub fn line(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            ta: Vec2::ZERO,
            tb: Vec2::ZERO,
        }
    }

    pub fn is_straight(&self) -> bool {
        self.ta == Vec2::ZERO && self.tb == Vec2::ZERO
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorNetwork {
    pub vertices: Vec<Point>,
    pub segments: Vec<VectorNetworkSegment>,
}

impl VectorNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Open polyline through `points`.
    pub fn polyline(points: &[Point]) -> Self {
        let segments = (1..points.len())
            .map(|i| VectorNetworkSegment::line(i - 1, i))
            .collect();
        Self {
            vertices: points.to_vec(),
            segments,
        }
    }

    /// Build a network from SVG path data (`d` attribute).
    ///
    /// Every command is accepted: relative commands are resolved, arcs and
    /// quadratic curves are raised to cubics. `Z` joins the current point back to
    /// the first vertex of its subpath.
    pub fn from_svg_path(d: &str) -> Result<Self, VectorNetworkError> {
        let path = BezPath::from_svg(d)?;
        Ok(Self::from_bez_path(&path))
    }

    pub fn from_bez_path(path: &BezPath) -> Self {
        let mut network = Self::new();
        // (index of current vertex, index of first vertex of the subpath)
        let mut cursor: Option<(usize, usize)> = None;

        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    let index = network.push_vertex(p);
                    cursor = Some((index, index));
                }
                PathEl::LineTo(p) => {
                    cursor = Some(network.extend_to(cursor, p, |_, _| (Vec2::ZERO, Vec2::ZERO)));
                }
                PathEl::QuadTo(c, p) => {
                    cursor = Some(network.extend_to(cursor, p, |from, to| {
                        let cubic = QuadBez::new(from, c, to).raise();
                        (cubic.p1 - from, cubic.p2 - to)
                    }));
                }
                PathEl::CurveTo(c1, c2, p) => {
                    cursor = Some(network.extend_to(cursor, p, |from, to| (c1 - from, c2 - to)));
                }
                PathEl::ClosePath => {
                    if let Some((current, start)) = cursor {
                        if current != start {
                            network.segments.push(VectorNetworkSegment::line(current, start));
                        }
                        cursor = Some((start, start));
                    }
                }
            }
        }

        network
    }

    fn push_vertex(&mut self, p: Point) -> usize {
        self.vertices.push(p);
        self.vertices.len() - 1
    }

    /// Append a vertex at `p` joined to the current vertex; a drawing command
    /// without a preceding move starts a new subpath at `p`.
    fn extend_to(
        &mut self,
        cursor: Option<(usize, usize)>,
        p: Point,
        tangents: impl FnOnce(Point, Point) -> (Vec2, Vec2),
    ) -> (usize, usize) {
        let Some((current, start)) = cursor else {
            let index = self.push_vertex(p);
            return (index, index);
        };
        let from = self.vertices[current];
        let (ta, tb) = tangents(from, p);
        let index = self.push_vertex(p);
        self.segments.push(VectorNetworkSegment {
            a: current,
            b: index,
            ta,
            tb,
        });
        (index, start)
    }

    /// Cubic curve of a segment in absolute coordinates.
    pub fn segment_curve(&self, segment: &VectorNetworkSegment) -> CubicBez {
        let a = self.vertices[segment.a];
        let b = self.vertices[segment.b];
        CubicBez::new(a, a + segment.ta, b + segment.tb, b)
    }

    /// Tight bounding box of all segments and vertices; [`Rect::ZERO`] when empty.
    pub fn bounding_box(&self) -> Rect {
        let mut vertices = self.vertices.iter();
        let Some(first) = vertices.next() else {
            return Rect::ZERO;
        };
        let mut bbox = Rect::from_points(*first, *first);
        for p in vertices {
            bbox = bbox.union_pt(*p);
        }
        for segment in &self.segments {
            bbox = bbox.union(self.segment_curve(segment).bounding_box());
        }
        bbox
    }

    /// Apply `affine` to every vertex. Tangents only take the linear part.
    pub fn transform(&mut self, affine: Affine) {
        let [a, b, c, d, _, _] = affine.as_coeffs();
        for p in &mut self.vertices {
            *p = affine * *p;
        }
        let linear = |v: Vec2| Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y);
        for segment in &mut self.segments {
            segment.ta = linear(segment.ta);
            segment.tb = linear(segment.tb);
        }
    }

    /// Convert back into a path, one subpath per chain of connected segments.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut current: Option<usize> = None;
        let mut start: Option<usize> = None;

        for segment in &self.segments {
            if current != Some(segment.a) {
                path.move_to(self.vertices[segment.a]);
                start = Some(segment.a);
            }
            if start == Some(segment.b) && segment.is_straight() {
                path.close_path();
                current = None;
                start = None;
                continue;
            }
            if segment.is_straight() {
                path.line_to(self.vertices[segment.b]);
            } else {
                let curve = self.segment_curve(segment);
                path.curve_to(curve.p1, curve.p2, curve.p3);
            }
            current = Some(segment.b);
        }

        path
    }

    /// SVG path data for this network.
    pub fn to_svg_path_data(&self) -> String {
        self.to_bez_path().to_svg()
    }
}
