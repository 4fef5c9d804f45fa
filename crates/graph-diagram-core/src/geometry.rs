//! Geometric primitives and utilities for graph diagrams.
//!
//! This module provides the value types and pure functions used to turn a
//! graph model into screen geometry.
//!
//! # Overview
//!
//! - [`Coordinates`] - Anything with `x()` / `y()` accessors (points and nodes)
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`distance`], [`midpoint`], [`angle_degrees`], [`is_left_of`] - Two-point measurements
//! - [`horizontal_arrow_outline`] - The outline of an arrow drawn along the x-axis
//!
//! # Coordinate System
//!
//! Coordinates follow the SVG convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are measured with `atan2`, so with Y pointing down a positive angle
//! turns clockwise on screen. This matches the SVG `rotate()` transform.

mod arrow;

pub use arrow::{ArrowOutline, PathCommand, horizontal_arrow_outline};

use std::f64::consts::PI;

/// Read access to a position in diagram space.
///
/// All two-point measurements in this module are generic over this trait so
/// that they work on plain [`Point`]s as well as on model nodes.
pub trait Coordinates {
    /// Returns the x-coordinate.
    fn x(&self) -> f64;

    /// Returns the y-coordinate.
    fn y(&self) -> f64;

    /// Copies the coordinates into a [`Point`].
    fn to_point(&self) -> Point {
        Point::new(self.x(), self.y())
    }
}

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use graph_diagram_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point whose coordinates are both NaN.
    ///
    /// Used for positions that have not been assigned yet.
    pub fn unset() -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the point halfway between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        midpoint(&self, &other)
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graph_diagram_core::geometry::Point;
    /// let point = Point::new(10.0, 20.0);
    ///
    /// let doubled = point.scale(2.0);
    /// assert_eq!(doubled.x(), 20.0);
    /// assert_eq!(doubled.y(), 40.0);
    /// ```
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Coordinates for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// A 2D size with width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size with the specified width and height
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Multiplies both dimensions by the given factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a new bounds from a top-left point, a width and a height
    pub fn new_from_top_left(top_left: Point, width: f64, height: f64) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + width,
            max_y: top_left.y + height,
        }
    }

    /// Creates the smallest bounds containing every point.
    ///
    /// Returns `None` when the iterator is empty, since the minimum and
    /// maximum of an empty set are undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graph_diagram_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_points([
    ///     Point::new(0.0, 10.0),
    ///     Point::new(200.0, -5.0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(bounds.min_x(), 0.0);
    /// assert_eq!(bounds.min_y(), -5.0);
    /// assert_eq!(bounds.width(), 200.0);
    /// assert_eq!(bounds.height(), 15.0);
    ///
    /// assert!(Bounds::from_points(Vec::<Point>::new()).is_none());
    /// ```
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let initial = Self::new_from_top_left(first, 0.0, 0.0);
        Some(points.fold(initial, |acc, point| {
            acc.merge(&Self::new_from_top_left(point, 0.0, 0.0))
        }))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Converts the bounds to a size
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Multiplies every coordinate by the given factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            min_x: self.min_x * factor,
            min_y: self.min_y * factor,
            max_x: self.max_x * factor,
            max_y: self.max_y * factor,
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows every edge outward by `amount`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graph_diagram_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), 200.0, 0.0).inflate(58.0);
    ///
    /// assert_eq!(bounds.min_x(), -58.0);
    /// assert_eq!(bounds.min_y(), -58.0);
    /// assert_eq!(bounds.width(), 316.0);
    /// assert_eq!(bounds.height(), 116.0);
    /// ```
    pub fn inflate(self, amount: f64) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    /// Formats the bounds as an SVG `viewBox` value: `"min_x min_y width height"`.
    pub fn to_view_box(self) -> String {
        format!(
            "{} {} {} {}",
            format_number(self.min_x),
            format_number(self.min_y),
            format_number(self.width()),
            format_number(self.height())
        )
    }
}

/// Calculates the Euclidean distance between two positions.
///
/// NaN coordinates propagate into the result.
pub fn distance(a: &impl Coordinates, b: &impl Coordinates) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    (dx * dx + dy * dy).sqrt()
}

/// Calculates the point halfway from `a` to `b`: `a + (b - a) / 2`.
pub fn midpoint(a: &impl Coordinates, b: &impl Coordinates) -> Point {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    Point::new(a.x() + dx / 2.0, a.y() + dy / 2.0)
}

/// Calculates the direction from `a` to `b` in degrees.
///
/// Uses the `atan2` convention, so the result lies in `(-180, 180]`.
///
/// # Examples
///
/// ```
/// # use graph_diagram_core::geometry::{Point, angle_degrees};
/// let origin = Point::new(0.0, 0.0);
///
/// assert_eq!(angle_degrees(&origin, &Point::new(10.0, 0.0)), 0.0);
/// assert_eq!(angle_degrees(&origin, &Point::new(0.0, 10.0)), 90.0);
/// assert_eq!(angle_degrees(&origin, &Point::new(-10.0, 0.0)), 180.0);
/// ```
pub fn angle_degrees(a: &impl Coordinates, b: &impl Coordinates) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    dy.atan2(dx) * 180.0 / PI
}

/// Returns `true` iff `a` lies strictly left of `b`.
///
/// Equal x-coordinates yield `false` in both directions, which gives
/// coincident or vertically stacked positions a deterministic orientation.
pub fn is_left_of(a: &impl Coordinates, b: &impl Coordinates) -> bool {
    a.x() < b.x()
}

/// Formats a number the way it appears in SVG attribute values.
///
/// Uses the shortest representation that round-trips, prints integral values
/// without a fractional part, and never emits a negative zero.
///
/// # Examples
///
/// ```
/// # use graph_diagram_core::geometry::format_number;
/// assert_eq!(format_number(65.0), "65");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.25);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.25);
    }

    #[test]
    fn test_point_unset_is_nan() {
        let point = Point::unset();
        assert!(point.x().is_nan());
        assert!(point.y().is_nan());
    }

    #[test]
    fn test_point_with_coordinates() {
        let point = Point::unset().with_x(1.0).with_y(2.0);
        assert_eq!(point, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_distance_three_four_five() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_approx_eq!(f64, distance(&a, &b), 5.0);
    }

    #[test]
    fn test_distance_propagates_nan() {
        let a = Point::unset();
        let b = Point::new(3.0, 4.0);
        assert!(distance(&a, &b).is_nan());
    }

    #[test]
    fn test_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(midpoint(&a, &b), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_angle_degrees_quadrants() {
        let origin = Point::new(0.0, 0.0);
        assert_approx_eq!(f64, angle_degrees(&origin, &Point::new(1.0, 1.0)), 45.0);
        assert_approx_eq!(f64, angle_degrees(&origin, &Point::new(0.0, -1.0)), -90.0);
        assert_approx_eq!(f64, angle_degrees(&origin, &Point::new(-1.0, -1.0)), -135.0);
    }

    #[test]
    fn test_is_left_of() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(is_left_of(&a, &b));
        assert!(!is_left_of(&b, &a));
    }

    #[test]
    fn test_is_left_of_equal_x_is_false_both_ways() {
        let a = Point::new(5.0, 0.0);
        let b = Point::new(5.0, 100.0);
        assert!(!is_left_of(&a, &b));
        assert!(!is_left_of(&b, &a));
    }

    #[test]
    fn test_bounds_from_points_single() {
        let bounds = Bounds::from_points([Point::new(3.0, 4.0)]).unwrap();
        assert_eq!(bounds.min_point(), Point::new(3.0, 4.0));
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn test_bounds_merge() {
        let b1 = Bounds::new_from_top_left(Point::new(0.0, 0.0), 100.0, 30.0);
        let b2 = Bounds::new_from_top_left(Point::new(10.0, 40.0), 120.0, 80.0);
        let merged = b1.merge(&b2);
        assert_eq!(merged.min_x(), 0.0);
        assert_eq!(merged.min_y(), 0.0);
        assert_eq!(merged.max_x(), 130.0);
        assert_eq!(merged.max_y(), 120.0);
    }

    #[test]
    fn test_bounds_scale_and_size() {
        let bounds = Bounds::new_from_top_left(Point::new(-10.0, 5.0), 20.0, 10.0).scale(2.0);
        assert_eq!(bounds.min_point(), Point::new(-20.0, 10.0));
        assert_eq!(bounds.to_size(), Size::new(40.0, 20.0));
        assert_eq!(bounds.to_size().scale(0.5), Size::new(20.0, 10.0));
        assert!(Bounds::default().to_size().is_zero());
    }

    #[test]
    fn test_bounds_to_view_box() {
        let bounds = Bounds::new_from_top_left(Point::new(-58.0, -58.0), 316.0, 116.0);
        assert_eq!(bounds.to_view_box(), "-58 -58 316 116");
    }

    #[test]
    fn test_format_number_infinity() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-12.5), "-12.5");
    }
}
