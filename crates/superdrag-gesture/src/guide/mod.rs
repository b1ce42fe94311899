//! The guide overlay: labels around an anchor point naming the action each
//! drag direction will trigger.

mod controller;

pub use controller::{GuideController, GUIDE_DELAY};

use superdrag_common::{ActionId, Direction, MagnitudeBand, Point};
use superdrag_config::SuperdragConfig;

use crate::resolver::{resolve_action, settings_key};

/// Distance of near labels from the anchor.
pub const NEAR_OFFSET: f64 = 80.0;
/// Distance of far labels from the anchor.
pub const FAR_OFFSET: f64 = 160.0;
/// Close affordance position relative to the anchor.
pub const CLOSE_OFFSET: Point = Point::new(70.0, -80.0);
/// Stacking order that keeps the overlay above page content.
pub const OVERLAY_Z_INDEX: i32 = i32::MAX;

const CLOSE_HIT_RADIUS: f64 = 12.0;
const LABEL_HALF_WIDTH: f64 = 60.0;
const LABEL_HALF_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GuideLabel {
    pub direction: Direction,
    pub band: MagnitudeBand,
    pub action: ActionId,
    /// Offset from the anchor.
    pub offset: Point,
    /// Center of the label in viewport space.
    pub position: Point,
}

impl GuideLabel {
    pub fn is_far(&self) -> bool {
        self.band == MagnitudeBand::Far
    }

    pub fn text(&self) -> &'static str {
        self.action.label()
    }
}

/// Which part of a visible overlay a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideHit {
    Close,
    Label(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuideOverlay {
    pub anchor: Point,
    pub labels: Vec<GuideLabel>,
    pub close_position: Point,
}

fn unit(direction: Direction) -> Point {
    match direction {
        Direction::Up => Point::new(0.0, -1.0),
        Direction::Down => Point::new(0.0, 1.0),
        Direction::Left => Point::new(-1.0, 0.0),
        Direction::Right => Point::new(1.0, 0.0),
    }
}

impl GuideOverlay {
    /// Lay out one label per bound direction. Far labels are only included
    /// when far mode is on. Bindings that resolve to `none` get no label.
    pub fn build(anchor: Point, config: &SuperdragConfig) -> Self {
        let mut bands = vec![(MagnitudeBand::Near, NEAR_OFFSET)];
        if config.far_drag_enabled {
            bands.push((MagnitudeBand::Far, FAR_OFFSET));
        }

        let labels = bands
            .into_iter()
            .flat_map(|(band, radius)| {
                Direction::ALL.into_iter().filter_map(move |direction| {
                    let action = resolve_action(settings_key(direction, band), config);
                    if action == ActionId::None {
                        return None;
                    }
                    let u = unit(direction);
                    let offset = Point::new(u.x * radius, u.y * radius);
                    Some(GuideLabel {
                        direction,
                        band,
                        action,
                        offset,
                        position: anchor + offset,
                    })
                })
            })
            .collect();

        Self {
            anchor,
            labels,
            close_position: anchor + CLOSE_OFFSET,
        }
    }

    /// The overlay's interactive part at `point`, if any. Everything else
    /// passes through to the page.
    pub fn hit_test(&self, point: Point) -> Option<GuideHit> {
        let d = point - self.close_position;
        if d.x.hypot(d.y) <= CLOSE_HIT_RADIUS {
            return Some(GuideHit::Close);
        }
        // Near and far boxes on one axis overlap; the nearer center wins.
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, label)| {
                let d = point - label.position;
                let inside = d.x.abs() <= LABEL_HALF_WIDTH && d.y.abs() <= LABEL_HALF_HEIGHT;
                inside.then(|| (i, d.x.hypot(d.y)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| GuideHit::Label(i))
    }

    pub fn label(&self, index: usize) -> Option<&GuideLabel> {
        self.labels.get(index)
    }
}
