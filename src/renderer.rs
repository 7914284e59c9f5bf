use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Painter, Shape};

use crate::config::Palette;
use crate::game::GameState;
use crate::scene::{self, Point, Primitive, Scene};
use crate::ui::hud::render_hud;

/// Text at or above this size is drawn bold.
const TITLE_TEXT_SIZE: f64 = 30.0;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, palette: &Palette) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, palette);
    let canvas_area = square_canvas_area(play_area);
    if canvas_area.width == 0 || canvas_area.height == 0 {
        return;
    }

    let scene = scene::render(state, palette);
    let grid = PixelGrid::new(canvas_area, &scene);

    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(palette.background)
        .x_bounds([0.0, scene.width])
        .y_bounds([0.0, scene.height])
        .paint(|ctx| paint_scene(ctx, &scene, grid));

    frame.render_widget(canvas, canvas_area);
}

/// Largest centred area whose half-block pixels form a square.
///
/// Terminal cells are about twice as tall as wide, and a half-block cell
/// holds two pixels stacked vertically, so a square board needs twice as
/// many columns as rows.
#[must_use]
pub fn square_canvas_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Pixel raster of the canvas widget, used to sample filled shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PixelGrid {
    columns: usize,
    rows: usize,
    scene_width: f64,
    scene_height: f64,
}

impl PixelGrid {
    fn new(area: Rect, scene: &Scene) -> Self {
        Self {
            columns: usize::from(area.width),
            rows: usize::from(area.height) * 2,
            scene_width: scene.width,
            scene_height: scene.height,
        }
    }

    fn pixel_width(self) -> f64 {
        self.scene_width / self.columns as f64
    }

    fn pixel_height(self) -> f64 {
        self.scene_height / self.rows as f64
    }

    /// Pixel index range covering `[from, to]` on one axis.
    fn span(from: f64, to: f64, pixel: f64, count: usize) -> std::ops::Range<usize> {
        let first = (from / pixel).floor().max(0.0) as usize;
        let last = ((to / pixel).ceil().max(0.0) as usize).min(count);
        first.min(last)..last
    }

    /// Calls `visit` with the scene-space centre of every pixel whose centre
    /// lies inside the bounding box.
    fn for_each_center(self, min: Point, max: Point, mut visit: impl FnMut(Point)) {
        let (pw, ph) = (self.pixel_width(), self.pixel_height());
        for row in Self::span(min.y, max.y, ph, self.rows) {
            for column in Self::span(min.x, max.x, pw, self.columns) {
                visit(Point::new(
                    (column as f64 + 0.5) * pw,
                    (row as f64 + 0.5) * ph,
                ));
            }
        }
    }
}

/// Any filled primitive, sampled at pixel centres.
struct Fill<'a> {
    primitive: &'a Primitive,
    grid: PixelGrid,
}

impl Shape for Fill<'_> {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let Some((min, max, color)) = fill_bounds(self.primitive) else {
            return;
        };

        let mut painted = false;
        self.grid.for_each_center(min, max, |point| {
            if contains(self.primitive, point) {
                painted |= paint_scene_point(painter, point, self.grid, color);
            }
        });

        // Shapes smaller than one pixel still show up as a single dot.
        if !painted {
            let center = Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
            let _ = paint_scene_point(painter, center, self.grid, color);
        }
    }
}

fn paint_scene(ctx: &mut Context<'_>, scene: &Scene, grid: PixelGrid) {
    let mut labels = Vec::new();

    for primitive in &scene.primitives {
        match primitive {
            Primitive::FillRect { .. }
            | Primitive::FillCircle { .. }
            | Primitive::FillPolygon { .. } => ctx.draw(&Fill { primitive, grid }),
            Primitive::StrokeCircle {
                center,
                radius,
                color,
            } => ctx.draw(&Circle {
                x: center.x,
                y: flip_y(grid, center.y),
                radius: *radius,
                color: *color,
            }),
            Primitive::Text { .. } => labels.push(primitive),
        }
    }

    for label in labels {
        if let Primitive::Text {
            anchor,
            text,
            size,
            color,
        } = label
        {
            let mut style = Style::new().fg(*color);
            if *size >= TITLE_TEXT_SIZE {
                style = style.add_modifier(Modifier::BOLD);
            }

            let cell_width = grid.scene_width / grid.columns as f64;
            let text_width = text.chars().count() as f64 * cell_width;
            let x = (anchor.x - text_width / 2.0).max(0.0);
            ctx.print(x, flip_y(grid, anchor.y), Line::styled(text.clone(), style));
        }
    }
}

fn fill_bounds(primitive: &Primitive) -> Option<(Point, Point, Color)> {
    match primitive {
        Primitive::FillRect {
            origin,
            width,
            height,
            color,
        } => Some((
            *origin,
            Point::new(origin.x + width, origin.y + height),
            *color,
        )),
        Primitive::FillCircle {
            center,
            radius,
            color,
        } => Some((
            Point::new(center.x - radius, center.y - radius),
            Point::new(center.x + radius, center.y + radius),
            *color,
        )),
        Primitive::FillPolygon { points, color } => {
            let first = points.first()?;
            let (min, max) = points.iter().fold((*first, *first), |(min, max), point| {
                (
                    Point::new(min.x.min(point.x), min.y.min(point.y)),
                    Point::new(max.x.max(point.x), max.y.max(point.y)),
                )
            });
            Some((min, max, *color))
        }
        Primitive::StrokeCircle { .. } | Primitive::Text { .. } => None,
    }
}

fn contains(primitive: &Primitive, point: Point) -> bool {
    match primitive {
        Primitive::FillRect {
            origin,
            width,
            height,
            ..
        } => {
            point.x >= origin.x
                && point.y >= origin.y
                && point.x <= origin.x + width
                && point.y <= origin.y + height
        }
        Primitive::FillCircle { center, radius, .. } => {
            let (dx, dy) = (point.x - center.x, point.y - center.y);
            dx * dx + dy * dy <= radius * radius
        }
        Primitive::FillPolygon { points, .. } => convex_polygon_contains(points, point),
        Primitive::StrokeCircle { .. } | Primitive::Text { .. } => false,
    }
}

/// Point-in-polygon for convex polygons of either winding.
fn convex_polygon_contains(points: &[Point], point: Point) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut sign = 0.0_f64;
    for (index, start) in points.iter().enumerate() {
        let end = points[(index + 1) % points.len()];
        let cross =
            (end.x - start.x) * (point.y - start.y) - (end.y - start.y) * (point.x - start.x);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }

    true
}

fn paint_scene_point(
    painter: &mut Painter<'_, '_>,
    point: Point,
    grid: PixelGrid,
    color: Color,
) -> bool {
    match painter.get_point(point.x, flip_y(grid, point.y)) {
        Some((x, y)) => {
            painter.paint(x, y, color);
            true
        }
        None => false,
    }
}

/// Scene y grows downwards, canvas y grows upwards.
fn flip_y(grid: PixelGrid, y: f64) -> f64 {
    grid.scene_height - y
}
