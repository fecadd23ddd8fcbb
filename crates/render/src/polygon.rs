//! Polygon scan conversion.

use crate::canvas::{Canvas, Paint};
use crate::line::{lerp, unit_steps};
use crate::triangulate::{triangulate, Triangle};
use common::{Point, RasterResult};
use scene::PolygonElement;

impl Canvas<'_> {
    /// Fill and outline a polygon element.
    ///
    /// The outline is drawn after the fill, in the stroke color (black when
    /// none is given). A polygon that cannot be triangulated is not filled;
    /// its outline is still drawn unless the configuration says otherwise.
    pub fn draw_polygon(&mut self, element: &PolygonElement) {
        let style = &element.style;
        let fill = Paint::new(style.fill_color(), style.fill_alpha());
        let stroke = Paint::new(style.stroke_color(), style.stroke_alpha());

        if let Err(err) = self.fill_polygon(&element.points, fill) {
            tracing::warn!("Skipping polygon fill: {}", err);
            if !self.config().stroke_unsupported_polygons {
                return;
            }
        }
        self.stroke_polygon(&element.points, stroke);
    }

    /// Fill the interior of a polygon of at most four points.
    pub fn fill_polygon(&mut self, points: &[Point], paint: Paint) -> RasterResult<()> {
        for triangle in triangulate(points)? {
            self.fill_triangle(&triangle, paint);
        }
        Ok(())
    }

    /// Scan convert one triangle.
    ///
    /// Each row from the topmost vertex down to, but not including, the
    /// bottommost vertex is filled from the left boundary up to, but not
    /// including, the right boundary. Adjacent triangles sharing an edge
    /// therefore do not blend the same pixel twice.
    pub fn fill_triangle(&mut self, triangle: &Triangle, paint: Paint) {
        let [mut a, mut b, mut c] = *triangle;
        if b.y < a.y {
            std::mem::swap(&mut a, &mut b);
        }
        if c.y < a.y {
            std::mem::swap(&mut a, &mut c);
        }
        if c.y < b.y {
            std::mem::swap(&mut b, &mut c);
        }

        let top = self.mapper().map_point(a);
        let mid = self.mapper().map_point(b);
        let bottom = self.mapper().map_point(c);

        // The edge through the middle vertex, sampled once per row. Its first
        // half ends one row early so the middle row is not sampled twice.
        let upper_len = unit_steps(top.row, mid.row, true).count().saturating_sub(1);
        let bent = || {
            lerp(top.row, top.col, mid.row, mid.col)
                .take(upper_len)
                .chain(lerp(mid.row, mid.col, bottom.row, bottom.col))
        };
        let straight = || lerp(top.row, top.col, bottom.row, bottom.col);

        let half = straight().count() / 2;
        let straight_is_left = matches!(
            (straight().nth(half), bent().nth(half)),
            (Some(straight_col), Some(bent_col)) if straight_col < bent_col
        );

        let extent = self.extent();
        let rows = unit_steps(top.row, bottom.row, false).zip(straight().zip(bent()));
        for (row, (straight_col, bent_col)) in rows {
            if row >= extent.row {
                break;
            }
            let (start, end) = if straight_is_left {
                (straight_col, bent_col)
            } else {
                (bent_col, straight_col)
            };
            for col in unit_steps(start, end, false) {
                if col >= extent.col {
                    break;
                }
                self.plot(row, col, paint);
            }
        }
    }

    /// Draw the closed outline through `points`.
    pub fn stroke_polygon(&mut self, points: &[Point], paint: Paint) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], paint);
        }
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            self.draw_line(first, last, paint);
        }
    }
}
