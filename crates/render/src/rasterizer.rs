//! Rasterizer for converting scenes to pixels.

use crate::canvas::{Canvas, Paint};
use crate::config::RenderConfig;
use crate::mapper::CoordinateMapper;
use crate::pixel_buffer::PixelBuffer;
use common::{parse_color, Point, RasterResult};
use scene::{Element, Scene};

/// Draws scene elements into a pixel buffer in order.
#[derive(Clone, Debug, Default)]
pub struct Rasterizer {
    config: RenderConfig,
}

impl Rasterizer {
    pub fn new(config: RenderConfig) -> RasterResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Rasterize a scene into `buffer`.
    ///
    /// The buffer is cleared to the background color first. Elements are
    /// drawn in scene order, each compositing over what came before. A
    /// malformed element never stops the ones after it; only an invalid
    /// viewBox fails the render, and it does so before any pixel is written.
    pub fn render(&self, scene: &Scene, buffer: &mut PixelBuffer) -> RasterResult<()> {
        scene.view_box.validate()?;

        buffer.fill(self.config.background);
        let mapper = CoordinateMapper::new(scene.view_box, scene.width, scene.height);
        let mut canvas = Canvas::new(buffer, mapper, &self.config);

        tracing::debug!(
            "Rendering {} elements at {}x{}",
            scene.len(),
            scene.width,
            scene.height
        );
        for element in scene.elements() {
            canvas.draw_element(element);
        }
        Ok(())
    }
}

impl Canvas<'_> {
    /// Draw a single scene element.
    pub fn draw_element(&mut self, element: &Element) {
        tracing::trace!("Drawing {} element", element.kind());

        match element {
            Element::Point(point) => {
                let at = self.mapper().map_to_device(point.x, point.y);
                let color = parse_color(point.color.as_deref());
                self.plot(at.row, at.col, Paint::new(color, point.opacity.unwrap_or(1.0)));
            }
            Element::Line(line) => {
                let paint = Paint::new(line.style.stroke_color(), line.style.stroke_alpha());
                self.draw_line(Point::new(line.x1, line.y1), Point::new(line.x2, line.y2), paint);
            }
            Element::Polyline(polyline) => {
                let style = &polyline.style;
                let paint = Paint::new(style.stroke_color(), style.stroke_alpha());
                for pair in polyline.points.windows(2) {
                    self.draw_line(pair[0], pair[1], paint);
                }
            }
            Element::Polygon(polygon) => self.draw_polygon(polygon),
            Element::Circle(circle) => {
                let style = &circle.style;
                let fill = Paint::new(style.fill_color(), style.fill_alpha());
                self.fill_circle(circle.cx, circle.cy, circle.r, fill);
                if style.has_stroke() {
                    let stroke = Paint::new(style.stroke_color(), style.stroke_alpha());
                    self.stroke_circle(circle.cx, circle.cy, circle.r, stroke);
                }
            }
            Element::Path(path) => {
                let paint = Paint::new(path.style.stroke_color(), path.style.stroke_alpha());
                self.draw_path(&path.d, paint);
            }
            Element::Unknown => {
                tracing::debug!("Skipping element of unknown type");
            }
        }
    }
}

/// Render `scene` into `buffer` with the default configuration.
pub fn render_scene(scene: &Scene, buffer: &mut PixelBuffer) -> RasterResult<()> {
    Rasterizer::default().render(scene, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Color, RasterError, ViewBox};
    use scene::{parse_points, Style};

    fn scene_10x10() -> Scene {
        Scene::new("0 0 10 10".parse().unwrap(), 11, 11)
    }

    fn render(scene: &Scene) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(scene.width, scene.height);
        render_scene(scene, &mut buffer).unwrap();
        buffer
    }

    fn painted(buffer: &PixelBuffer) -> Vec<(u32, u32)> {
        let mut pixels = Vec::new();
        for row in 0..buffer.height() {
            for col in 0..buffer.width() {
                if buffer.get_pixel(row, col) != Some(Color::WHITE) {
                    pixels.push((row, col));
                }
            }
        }
        pixels
    }

    #[test]
    fn test_empty_scene_is_white_and_opaque() {
        let buffer = render(&scene_10x10());
        assert!(buffer.as_bytes().iter().all(|&byte| byte == 255));
    }

    #[test]
    fn test_diagonal_line() {
        let scene = scene_10x10().with_element(Element::line(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Style::new().with_stroke("rgb(255,0,0)"),
        ));
        let buffer = render(&scene);
        let expected: Vec<(u32, u32)> = (0..=10).map(|i| (i, i)).collect();
        assert_eq!(painted(&buffer), expected);
        for i in 0..=10 {
            assert_eq!(buffer.get_pixel(i, i), Some(Color::RED));
        }
    }

    #[test]
    fn test_filled_circle_without_stroke() {
        let scene = scene_10x10().with_element(Element::circle(
            Point::new(5.0, 5.0),
            3.0,
            Style::new().with_fill("rgb(0,255,0)"),
        ));
        let buffer = render(&scene);
        let pixels = painted(&buffer);
        assert_eq!(pixels.len(), 25);
        for (row, col) in pixels {
            assert!((3..=7).contains(&row) && (3..=7).contains(&col));
            assert_eq!(buffer.get_pixel(row, col), Some(Color::rgb(0, 255, 0)));
        }
    }

    #[test]
    fn test_alpha_is_always_opaque() {
        let scene = scene_10x10()
            .with_element(Element::circle(
                Point::new(5.0, 5.0),
                3.0,
                Style::new().with_fill("#00ff00").with_fill_opacity(0.3).with_stroke("#0000ff"),
            ))
            .with_element(Element::polygon(
                parse_points("1,1 8,2 9,8 2,7"),
                Style::new().with_fill("#ff0000").with_fill_opacity(0.2),
            ))
            .with_element(Element::path(
                "M 0 0 Q 10 0 10 10",
                Style::new().with_stroke_opacity(0.5),
            ));
        let buffer = render(&scene);
        for row in 0..buffer.height() {
            for col in 0..buffer.width() {
                assert_eq!(buffer.alpha_at(row, col), Some(255));
            }
        }
    }

    #[test]
    fn test_later_elements_paint_over_earlier_ones() {
        let from = Point::new(0.0, 5.0);
        let to = Point::new(10.0, 5.0);
        let scene = scene_10x10()
            .with_element(Element::line(from, to, Style::new().with_stroke("#ff0000")))
            .with_element(Element::line(
                from,
                to,
                Style::new().with_stroke("#0000ff").with_stroke_opacity(0.5),
            ));
        let buffer = render(&scene);
        assert_eq!(buffer.get_pixel(5, 3), Some(Color::rgb(128, 0, 128)));
    }

    #[test]
    fn test_bad_elements_do_not_stop_the_render() {
        let config = RenderConfig::default().with_unsupported_polygon_stroke(false);
        let rasterizer = Rasterizer::new(config).unwrap();
        let scene = scene_10x10()
            .with_element(Element::polygon(parse_points("1,1 5,1 7,4 5,7 1,7"), Style::new()))
            .with_element(Element::Unknown)
            .with_element(Element::path("M 1 Q 2", Style::new()))
            .with_element(Element::point(Point::new(2.5, 2.5), "rgb(0,0,0)"))
            .with_element(Element::point(Point::new(3.0, 4.0), "not a color"))
            .with_element(Element::point(Point::new(6.0, 7.0), "#0000ff"));

        let mut buffer = PixelBuffer::new(11, 11);
        rasterizer.render(&scene, &mut buffer).unwrap();
        assert_eq!(painted(&buffer), vec![(4, 3), (7, 6)]);
        assert_eq!(buffer.get_pixel(4, 3), Some(Color::BLACK));
        assert_eq!(buffer.get_pixel(7, 6), Some(Color::BLUE));
    }

    #[test]
    fn test_point_opacity() {
        let scene = scene_10x10().with_element(Element::Point(scene::PointElement {
            x: 1.0,
            y: 2.0,
            color: Some("#000000".to_string()),
            opacity: Some(0.5),
        }));
        let buffer = render(&scene);
        assert_eq!(buffer.get_pixel(2, 1), Some(Color::rgb(128, 128, 128)));
    }

    #[test]
    fn test_background_from_config() {
        let config = RenderConfig::default().with_background(Color::BLACK);
        let rasterizer = Rasterizer::new(config).unwrap();
        let mut buffer = PixelBuffer::new(4, 4);
        rasterizer
            .render(&Scene::new("0 0 3 3".parse().unwrap(), 4, 4), &mut buffer)
            .unwrap();
        assert_eq!(buffer.get_pixel(2, 2), Some(Color::BLACK));
        assert_eq!(buffer.alpha_at(2, 2), Some(255));
    }

    #[test]
    fn test_invalid_view_box_fails_before_drawing() {
        let view_box = ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 0.0,
            height: 10.0,
        };
        let scene = Scene::new(view_box, 11, 11);
        let mut buffer = PixelBuffer::new(11, 11);
        let result = render_scene(&scene, &mut buffer);
        assert!(matches!(result, Err(RasterError::InvalidViewBox(_))));
        assert!(buffer.as_bytes().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RenderConfig::default().with_bezier_step(0.0);
        assert!(matches!(Rasterizer::new(config), Err(RasterError::InvalidConfig(_))));
    }

    #[test]
    fn test_scene_from_json() {
        let scene: Scene = serde_json::from_str(
            r##"{
                "viewBox": "0 0 10 10",
                "width": "11",
                "height": 11,
                "elements": [
                    {"type": "rect", "x": 0, "y": 0},
                    {"type": "polyline", "points": "0,0 10,0 10,10", "stroke": "rgb(255, 0, 0)"},
                    {"type": "point", "x": "5", "y": "5", "color": "#0000ff"}
                ]
            }"##,
        )
        .unwrap();
        let buffer = render(&scene);

        let mut expected: Vec<(u32, u32)> = (0..=10).map(|col| (0, col)).collect();
        expected.extend((1..=10).map(|row| (row, 10)));
        expected.push((5, 5));
        expected.sort_unstable();
        assert_eq!(painted(&buffer), expected);
        assert_eq!(buffer.get_pixel(0, 10), Some(Color::RED));
        assert_eq!(buffer.get_pixel(5, 5), Some(Color::BLUE));
    }

    #[test]
    fn test_mistyped_fields_still_render_the_rest() {
        let scene: Scene = serde_json::from_str(
            r##"{
                "viewBox": "0 0 10 10",
                "width": 11,
                "height": 11,
                "elements": [
                    {"type": "line", "x1": 0, "y1": 0, "x2": 10, "y2": 0, "stroke": 0},
                    {"type": "point", "x": null, "y": 1, "color": "#0000ff"},
                    {"x": 3, "y": 3},
                    {"type": "line", "x1": 0, "y1": 5, "x2": 10, "y2": 5, "stroke": "#ff0000"}
                ]
            }"##,
        )
        .unwrap();
        let buffer = render(&scene);

        let mut expected: Vec<(u32, u32)> = (0..=10).map(|col| (0, col)).collect();
        expected.extend((0..=10).map(|col| (5, col)));
        assert_eq!(painted(&buffer), expected);
        assert_eq!(buffer.get_pixel(0, 4), Some(Color::BLACK));
        assert_eq!(buffer.get_pixel(5, 4), Some(Color::RED));
    }
}
