//! Direction classification and distance between pointer positions.

use superdrag_common::{Direction, Point};

/// Movement below this on both axes is not yet a gesture.
pub const DIRECTION_THRESHOLD: f64 = 4.0;

/// Classify the drag from `origin` to `current`.
///
/// Returns `None` while both axis deltas are under [`DIRECTION_THRESHOLD`].
/// Otherwise the axis with the larger magnitude wins; equal magnitudes
/// resolve to the vertical axis.
pub fn classify_direction(origin: Point, current: Point) -> Option<Direction> {
    let dx = current.x - origin.x;
    let dy = current.y - origin.y;

    if dx.abs() < DIRECTION_THRESHOLD && dy.abs() < DIRECTION_THRESHOLD {
        return None;
    }

    let direction = if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}
