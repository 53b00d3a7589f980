//! # Projecting the solution path
//!
//! The basic feasible solutions visited by the Simplex method are points in a space with one
//! dimension per variable. To draw them, two of those variables are picked as axes and the points
//! are scaled into a rectangular drawing region, with the origin in the bottom left corner.
use serde::Serialize;
use thiserror::Error;

/// The drawing region, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Viewport {
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
    /// Empty space kept free on every side.
    pub margin: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 600f64, height: 400f64, margin: 50f64, }
    }
}

/// The two selected axes can't be drawn against each other.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSelection {
    /// Both axes are the same variable.
    #[error("Please select two different variables, x{} was selected twice.", .0 + 1)]
    IdenticalAxes(usize),
    /// An axis doesn't exist in the points of the path.
    #[error("Variable x{} doesn't exist, the path has {dimension} variables.", .axis + 1)]
    AxisOutOfRange {
        /// The selected axis, 0-based.
        axis: usize,
        /// Number of coordinates of the points.
        dimension: usize,
    },
}

/// How a point is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Passed through on the way.
    Visited,
    /// The last solution, where the solver stopped.
    Terminal,
}

/// A point of the path in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ProjectedPoint {
    /// Position in the path.
    pub index: usize,
    #[allow(missing_docs)]
    pub x: f64,
    #[allow(missing_docs)]
    pub y: f64,
    #[allow(missing_docs)]
    pub marker: Marker,
}

/// The path as it should be drawn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Projection {
    /// Indices of the variables on the horizontal and the vertical axis.
    pub axes: (usize, usize),
    /// Names of the variables on the horizontal and the vertical axis.
    pub labels: (String, String),
    /// Points in path order.
    pub points: Vec<ProjectedPoint>,
}

/// Scale two coordinates of the path into a viewport.
///
/// Each axis is scaled such that its largest value lands at the far edge of the region inside the
/// margins. When that largest value is zero, the axis is scaled as if it were one.
///
/// # Arguments
///
/// * `trajectory`: The solutions visited by the solver, without the solution of the tableau before
/// cost reduction.
/// * `axes`: Indices of the variables to use as horizontal and vertical axis.
/// * `viewport`: Region to draw in.
///
/// # Errors
///
/// If both axes are the same variable, or if an axis doesn't exist in the points.
pub fn project(
    trajectory: &[Vec<f64>],
    axes: (usize, usize),
    viewport: &Viewport,
) -> Result<Projection, InvalidSelection> {
    let (horizontal, vertical) = axes;
    if horizontal == vertical {
        return Err(InvalidSelection::IdenticalAxes(horizontal));
    }
    let dimension = trajectory.iter().map(Vec::len).min();
    if let Some(dimension) = dimension {
        if let Some(&axis) = [horizontal, vertical].iter().find(|&&axis| axis >= dimension) {
            return Err(InvalidSelection::AxisOutOfRange { axis, dimension });
        }
    }

    let max_x = scale_limit(trajectory.iter().map(|point| point[horizontal]));
    let max_y = scale_limit(trajectory.iter().map(|point| point[vertical]));
    let scale_x = (viewport.width - 2f64 * viewport.margin) / max_x;
    let scale_y = (viewport.height - 2f64 * viewport.margin) / max_y;

    let last = trajectory.len().saturating_sub(1);
    let points = trajectory.iter()
        .enumerate()
        .map(|(index, point)| ProjectedPoint {
            index,
            x: viewport.margin + point[horizontal] * scale_x,
            y: viewport.height - (viewport.margin + point[vertical] * scale_y),
            marker: if index == last { Marker::Terminal } else { Marker::Visited },
        })
        .collect();

    Ok(Projection {
        axes,
        labels: (format!("x{}", horizontal + 1), format!("x{}", vertical + 1)),
        points,
    })
}

/// The largest value, or one if that is zero or there are no values.
fn scale_limit(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(f64::NEG_INFINITY, f64::max);

    if max == 0f64 || !max.is_finite() {
        1f64
    } else {
        max
    }
}
