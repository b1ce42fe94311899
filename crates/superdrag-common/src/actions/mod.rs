use serde::{Deserialize, Serialize};

mod action_enum;
mod labels;

pub use action_enum::*;

/// Cardinal direction of a drag. An ambiguous drag has no direction and is
/// represented as `Option::<Direction>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Whether a drop landed close to its origin or beyond the far threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagnitudeBand {
    Near,
    Far,
}
