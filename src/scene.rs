//! Frame description as a flat list of 2D drawing primitives.
//!
//! Geometry is expressed in canvas pixels: origin at the top-left corner,
//! y growing downwards, one tile being [`TILE_SIZE_PX`] wide. Building a
//! scene is pure, so what gets drawn can be tested without a terminal.

use ratatui::style::Color;

use crate::config::{CANVAS_SIZE_PX, Palette, SEGMENT_SCALE, TILE_SIZE_PX};
use crate::game::{GamePhase, GameState};
use crate::input::Direction;
use crate::snake::Position;

/// Gap between neighbouring segments, in pixels.
const SEGMENT_GAP_PX: f64 = 2.0;

/// Body segments never shrink below this radius.
pub const MIN_SEGMENT_RADIUS_PX: f64 = 1.5;

const TITLE_TEXT_SIZE: f64 = 30.0;
const BODY_TEXT_SIZE: f64 = 20.0;

pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const RESTART_HINT_TEXT: &str = "Press R to play again";
pub const START_HINT_TEXT: &str = "Press an arrow key to start";

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FillRect {
        origin: Point,
        width: f64,
        height: f64,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    /// Closed, convex polygon.
    FillPolygon { points: Vec<Point>, color: Color },
    /// Text centred horizontally on `anchor`.
    Text {
        anchor: Point,
        text: String,
        size: f64,
        color: Color,
    },
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    fn new() -> Self {
        Self {
            width: CANVAS_SIZE_PX,
            height: CANVAS_SIZE_PX,
            primitives: Vec::new(),
        }
    }

    fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}

/// Builds the frame for `state`: background, snake, food, then overlay text.
#[must_use]
pub fn render(state: &GameState, palette: &Palette) -> Scene {
    let mut scene = Scene::new();

    scene.push(Primitive::FillRect {
        origin: Point::new(0.0, 0.0),
        width: scene.width,
        height: scene.height,
        color: palette.background,
    });

    draw_snake(&mut scene, state, palette);

    if let Some(food) = state.food {
        draw_food(&mut scene, food.position, palette);
    }

    draw_overlay(&mut scene, state.phase, palette);

    scene
}

fn draw_snake(scene: &mut Scene, state: &GameState, palette: &Palette) {
    let size = TILE_SIZE_PX - SEGMENT_GAP_PX;

    for (index, segment) in state.snake.segments().enumerate() {
        let origin = cell_origin(*segment);
        let center = Point::new(origin.x + size / 2.0, origin.y + size / 2.0);

        if index == 0 {
            draw_head(scene, center, size / 2.0, state.snake.heading(), palette);
        } else {
            draw_segment(scene, center, index, palette);
        }
    }
}

fn draw_head(
    scene: &mut Scene,
    center: Point,
    radius: f64,
    heading: Option<Direction>,
    palette: &Palette,
) {
    scene.push(Primitive::FillCircle {
        center,
        radius,
        color: palette.snake_body,
    });
    scene.push(Primitive::StrokeCircle {
        center,
        radius,
        color: palette.snake_stroke,
    });

    let eye_radius = radius * 0.25;
    let pupil_radius = eye_radius * 0.6;
    for eye in eye_centers(center, radius, heading.unwrap_or(Direction::Right)) {
        scene.push(Primitive::FillCircle {
            center: eye,
            radius: eye_radius,
            color: palette.eye,
        });
        scene.push(Primitive::FillCircle {
            center: eye,
            radius: pupil_radius,
            color: palette.pupil,
        });
    }
}

/// Both eyes sit on the half of the head that faces `heading`.
#[must_use]
pub fn eye_centers(center: Point, radius: f64, heading: Direction) -> [Point; 2] {
    let offset = radius * 0.5;
    let (dx, dy) = heading.delta();

    if dx != 0 {
        let x = center.x + f64::from(dx) * offset;
        [
            Point::new(x, center.y - offset),
            Point::new(x, center.y + offset),
        ]
    } else {
        let y = center.y + f64::from(dy) * offset;
        [
            Point::new(center.x - offset, y),
            Point::new(center.x + offset, y),
        ]
    }
}

/// Half-size of body segment `index` before the outline inset.
#[must_use]
pub fn segment_half_size(index: usize) -> f64 {
    let size = TILE_SIZE_PX - SEGMENT_GAP_PX;
    let exponent = i32::try_from(index).unwrap_or(i32::MAX);
    size * SEGMENT_SCALE.powi(exponent) / 2.0
}

fn draw_segment(scene: &mut Scene, center: Point, index: usize, palette: &Palette) {
    let half = segment_half_size(index);
    let radius = (half - 1.0).max(MIN_SEGMENT_RADIUS_PX);

    scene.push(Primitive::FillCircle {
        center,
        radius,
        color: palette.snake_body,
    });
    scene.push(Primitive::StrokeCircle {
        center,
        radius,
        color: palette.snake_stroke,
    });

    let pattern_radius = half - 2.0;
    if index % 2 == 0 && pattern_radius > 0.0 {
        scene.push(Primitive::FillPolygon {
            points: diamond(center, pattern_radius * 0.6),
            color: palette.snake_pattern,
        });
    }
}

fn diamond(center: Point, reach: f64) -> Vec<Point> {
    vec![
        Point::new(center.x, center.y - reach),
        Point::new(center.x + reach, center.y),
        Point::new(center.x, center.y + reach),
        Point::new(center.x - reach, center.y),
    ]
}

fn draw_food(scene: &mut Scene, position: Position, palette: &Palette) {
    let half = (TILE_SIZE_PX - SEGMENT_GAP_PX) / 2.0;
    let origin = cell_origin(position);

    scene.push(Primitive::FillCircle {
        center: Point::new(origin.x + half, origin.y + half),
        radius: half,
        color: palette.food,
    });
    scene.push(Primitive::FillCircle {
        center: Point::new(origin.x + half * 0.7, origin.y + half * 0.7),
        radius: half * 0.4,
        color: palette.food_highlight,
    });
}

fn draw_overlay(scene: &mut Scene, phase: GamePhase, palette: &Palette) {
    let middle = Point::new(scene.width / 2.0, scene.height / 2.0);

    match phase {
        GamePhase::Over => {
            scene.push(text(middle, GAME_OVER_TEXT, TITLE_TEXT_SIZE, palette));
            scene.push(text(
                Point::new(middle.x, middle.y + 30.0),
                RESTART_HINT_TEXT,
                BODY_TEXT_SIZE,
                palette,
            ));
        }
        GamePhase::NotStarted => {
            scene.push(text(middle, START_HINT_TEXT, BODY_TEXT_SIZE, palette));
        }
        GamePhase::Running => {}
    }
}

fn text(anchor: Point, content: &str, size: f64, palette: &Palette) -> Primitive {
    Primitive::Text {
        anchor,
        text: content.to_owned(),
        size,
        color: palette.overlay_text,
    }
}

fn cell_origin(position: Position) -> Point {
    Point::new(
        f64::from(position.x) * TILE_SIZE_PX,
        f64::from(position.y) * TILE_SIZE_PX,
    )
}
