//! Conversion of position-like inputs into rapier vectors.

use crate::nalgebra::Translation3;
use crate::rapier::math::{Point, Real, Vector};

/// A position with some of its components left out. Missing components are
/// treated as `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PartialPosition {
    pub x: Option<Real>,
    pub y: Option<Real>,
    pub z: Option<Real>,
}

impl PartialPosition {
    pub fn to_vector(&self) -> Vector<Real> {
        Vector::new(
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.z.unwrap_or(0.0),
        )
    }
}

/// Any of the shapes accepted where a position or direction is expected, such
/// as local anchors and joint axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Position {
    Vector(Vector<Real>),
    Partial(PartialPosition),
}

impl From<Vector<Real>> for Position {
    fn from(vector: Vector<Real>) -> Self {
        Position::Vector(vector)
    }
}

impl From<Point<Real>> for Position {
    fn from(point: Point<Real>) -> Self {
        Position::Vector(point.coords)
    }
}

impl From<Translation3<Real>> for Position {
    fn from(translation: Translation3<Real>) -> Self {
        Position::Vector(translation.vector)
    }
}

impl From<[Real; 3]> for Position {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Position::Vector(Vector::new(x, y, z))
    }
}

impl From<(Real, Real, Real)> for Position {
    fn from((x, y, z): (Real, Real, Real)) -> Self {
        Position::Vector(Vector::new(x, y, z))
    }
}

impl From<PartialPosition> for Position {
    fn from(partial: PartialPosition) -> Self {
        Position::Partial(partial)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::Vector(Vector::zeros())
    }
}

/// Converts anything position-like into a vector.
pub fn position_to_vector3<P: Into<Position>>(position: P) -> Vector<Real> {
    match position.into() {
        Position::Vector(vector) => vector,
        Position::Partial(partial) => partial.to_vector(),
    }
}

/// Sugar for `position_to_vector3` where a point is expected, e.g. for anchors.
pub fn position_to_point3<P: Into<Position>>(position: P) -> Point<Real> {
    Point::from(position_to_vector3(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;

    #[test]
    fn array_and_tuple_convert() {
        assert_eq!(position_to_vector3([1.0, 2.0, 3.0]), Vector::new(1.0, 2.0, 3.0));
        assert_eq!(position_to_vector3((4.0, 5.0, 6.0)), Vector::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn partial_defaults_to_zero() {
        let vector = position_to_vector3(PartialPosition {
            y: Some(2.5),
            ..Default::default()
        });
        assert_ulps_eq!(vector.x, 0.0);
        assert_ulps_eq!(vector.y, 2.5);
        assert_ulps_eq!(vector.z, 0.0);
    }

    #[test]
    fn point_keeps_coordinates() {
        let point = position_to_point3(Point::new(1.0, -1.0, 0.5));
        assert_eq!(point, Point::new(1.0, -1.0, 0.5));
    }
}
