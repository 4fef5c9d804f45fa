//! Arrow outline construction.
//!
//! Relationship arrows are drawn in a local frame where the arrow runs along
//! the x-axis; the caller rotates and translates that frame into place. The
//! outline is a closed polygon made of a shaft and a triangular head:
//!
//! ```text
//!                      shoulder,15
//!                         │╲
//!   start,4 ──────────────┘  ╲
//!                              ● end,0
//!   start,-4 ─────────────┐  ╱
//!                         │╱
//!                      shoulder,-15
//! ```

use std::fmt;

use super::{Point, format_number};

const SHAFT_HALF_HEIGHT: f64 = 4.0;
const HEAD_HALF_HEIGHT: f64 = 15.0;
const HEAD_LENGTH: f64 = 30.0;

/// A single command of an SVG path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path at the given point (`M`).
    MoveTo(Point),
    /// Draw a straight line to the given point (`L`).
    LineTo(Point),
    /// Close the current sub-path (`Z`).
    Close,
}

impl PathCommand {
    /// Returns the point this command moves or draws to, if any.
    pub fn point(self) -> Option<Point> {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => Some(point),
            Self::Close => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {} {}", format_number(p.x()), format_number(p.y())),
            Self::LineTo(p) => write!(f, "L {} {}", format_number(p.x()), format_number(p.y())),
            Self::Close => write!(f, "Z"),
        }
    }
}

/// The closed outline of a horizontal arrow.
///
/// Always holds exactly eight commands: one move, six lines and a close.
/// The [`Display`](fmt::Display) form is a valid SVG path `d` value.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowOutline {
    commands: [PathCommand; 8],
}

impl ArrowOutline {
    /// Returns the path commands in drawing order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the seven polygon vertices in drawing order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|command| command.point())
    }
}

impl fmt::Display for ArrowOutline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Builds the outline of an arrow from `start` to `end` along the x-axis.
///
/// The head points at `end` and its base (the shoulder) sits 30 units back
/// towards `start`. When `start >= end` the arrow points in the negative x
/// direction.
///
/// # Examples
///
/// ```
/// # use graph_diagram_core::geometry::horizontal_arrow_outline;
/// let outline = horizontal_arrow_outline(65.0, 185.0);
///
/// assert_eq!(
///     outline.to_string(),
///     "M 65 4 L 155 4 L 155 15 L 185 0 L 155 -15 L 155 -4 L 65 -4 Z"
/// );
/// assert_eq!(outline.commands().len(), 8);
/// ```
pub fn horizontal_arrow_outline(start: f64, end: f64) -> ArrowOutline {
    let shoulder = if start < end {
        end - HEAD_LENGTH
    } else {
        end + HEAD_LENGTH
    };

    ArrowOutline {
        commands: [
            PathCommand::MoveTo(Point::new(start, SHAFT_HALF_HEIGHT)),
            PathCommand::LineTo(Point::new(shoulder, SHAFT_HALF_HEIGHT)),
            PathCommand::LineTo(Point::new(shoulder, HEAD_HALF_HEIGHT)),
            PathCommand::LineTo(Point::new(end, 0.0)),
            PathCommand::LineTo(Point::new(shoulder, -HEAD_HALF_HEIGHT)),
            PathCommand::LineTo(Point::new(shoulder, -SHAFT_HALF_HEIGHT)),
            PathCommand::LineTo(Point::new(start, -SHAFT_HALF_HEIGHT)),
            PathCommand::Close,
        ],
    }
}
