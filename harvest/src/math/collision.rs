use crate::math::{ground, Position, VectorMath};

pub trait Collider {
    fn position(&self) -> Position;
    fn radius(&self) -> f32;
}

/// Tests overlap of two circles on the ground plane, height is ignored.
#[inline]
pub fn test_circle_overlap(a: Position, a_radius: f32, b: Position, b_radius: f32) -> bool {
    ground(a).distance(ground(b)) <= a_radius + b_radius
}

pub fn detect_overlaps<'a, C: Collider + 'a>(
    position: Position,
    radius: f32,
    colliders: impl IntoIterator<Item = &'a C>,
) -> Vec<&'a C> {
    colliders
        .into_iter()
        .filter(|collider| {
            test_circle_overlap(position, radius, collider.position(), collider.radius())
        })
        .collect()
}
