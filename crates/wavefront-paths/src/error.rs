use std::fmt;

use thiserror::Error;
use wavefront_core::{Point, Range};

/// Which endpoint a [`PathError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::Goal => "goal",
        })
    }
}

/// Errors raised by distance-field computation and path tracing.
///
/// An unreachable goal after [`compute`](crate::DistanceField::compute) is
/// not an error; only asking to trace towards it is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("{endpoint} {pos} lies outside {bounds}")]
    OutOfBounds {
        endpoint: Endpoint,
        pos: Point,
        bounds: Range,
    },
    #[error("{endpoint} {pos} is an obstacle")]
    Blocked { endpoint: Endpoint, pos: Point },
    #[error("distance field covers {field} but the map covers {map}")]
    BoundsMismatch { field: Range, map: Range },
    #[error("cannot trace path to unreachable cell {goal}")]
    Unreachable { goal: Point },
    #[error("distance field is inconsistent at {at} (distance {distance})")]
    Inconsistent { at: Point, distance: i32 },
    #[error("distance field over {bounds} holds {cells} cells, expected {}", .bounds.len())]
    FieldSize { bounds: Range, cells: usize },
}

impl PathError {
    /// Whether the caller passed bad coordinates or a mismatched field.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PathError::OutOfBounds { .. }
                | PathError::Blocked { .. }
                | PathError::BoundsMismatch { .. }
        )
    }
}
