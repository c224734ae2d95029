//! Cubic Bezier sampling.

use config::constants::MIN_BEZIER_POINTS;
use tracing::{debug, warn};

use crate::error::{KernelError, KernelResult};
use crate::Point;

/// Samples `npoints` points along the cubic Bezier curve from `start` to
/// `end`.
///
/// The curve leaves `start` heading towards `ctrl0` and approaches `end` from
/// the direction of `ctrl1`. Samples are evenly spaced in the curve parameter
/// and always include both endpoints exactly.
///
/// # Errors
/// [`KernelError::InvalidParameter`] when `npoints < 2`.
///
/// # Examples
/// ```
/// use cad_kernel::primitives::bezier;
/// use cad_kernel::Point;
///
/// let start = Point::new(0.0, 0.0, 0.0);
/// let end = Point::new(3.0, 0.0, 0.0);
/// let curve = bezier(4, start, Point::new(1.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0), end).unwrap();
/// assert_eq!(curve.len(), 4);
/// assert_eq!(curve[0], start);
/// assert_eq!(curve[3], end);
/// ```
pub fn bezier(
    npoints: usize,
    start: Point,
    ctrl0: Point,
    ctrl1: Point,
    end: Point,
) -> KernelResult<Vec<Point>> {
    if npoints < MIN_BEZIER_POINTS {
        warn!(npoints, "rejected bezier sample count");
        return Err(KernelError::invalid_parameter(format!(
            "bezier needs at least {MIN_BEZIER_POINTS} points, got {npoints}"
        )));
    }

    let last = (npoints - 1) as f64;
    let points: Vec<Point> = (0..npoints)
        .map(|idx| {
            let t = idx as f64 / last;
            let nt = 1.0 - t;
            start * (nt * nt * nt)
                + ctrl0 * (3.0 * nt * nt * t)
                + ctrl1 * (3.0 * nt * t * t)
                + end * (t * t * t)
        })
        .collect();

    debug!(npoints, %start, %end, "sampled bezier");
    Ok(points)
}

#[cfg(test)]
mod tests;
