/// An affine function `y = slope * x + intercept` on the real line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine1 {
    pub slope: f64,
    pub intercept: f64,
}

impl Affine1 {
    /// Creates an affine function from its slope and intercept.
    #[must_use]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Returns the line through `(x0, y0)` and `(x1, y1)`.
    ///
    /// Returns `None` when `x0 == x1`, where slope and intercept are undefined.
    #[must_use]
    pub fn through(x0: f64, y0: f64, x1: f64, y1: f64) -> Option<Self> {
        let width = x1 - x0;
        if width == 0.0 {
            return None;
        }
        let slope = (y1 - y0) / width;
        let intercept = (x1 * y0 - x0 * y1) / width;
        Some(Self { slope, intercept })
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Returns `self - other`.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            slope: self.slope - other.slope,
            intercept: self.intercept - other.intercept,
        }
    }

    /// Abscissa where the function is zero, or `None` for a constant function.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        if self.slope == 0.0 {
            None
        } else {
            Some(-self.intercept / self.slope)
        }
    }
}

/// Integral of `max(upper(x) - lower(x), 0)` over `[left, right)`.
///
/// The difference of two affine functions is affine, so the midpoint rule is
/// exact on every sub-interval where its sign does not change. The interval is
/// split at the zero crossing when it lies strictly inside.
#[must_use]
pub fn positive_excess(upper: &Affine1, lower: &Affine1, left: f64, right: f64) -> f64 {
    let diff = upper.minus(lower);

    let Some(crossing) = diff.root() else {
        if diff.intercept > 0.0 {
            return (right - left) * diff.intercept;
        }
        return 0.0;
    };

    if crossing <= left || crossing >= right {
        let mid = diff.at((left + right) / 2.0);
        if mid > 0.0 {
            return (right - left) * mid;
        }
        return 0.0;
    }

    let (from, to) = if diff.at((left + crossing) / 2.0) > 0.0 {
        (left, crossing)
    } else {
        (crossing, right)
    };
    (to - from) * diff.at((from + to) / 2.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn through_two_points() {
        let line = Affine1::through(2.0, 1.0, 4.0, 5.0).unwrap();
        assert_abs_diff_eq!(line.slope, 2.0);
        assert_abs_diff_eq!(line.intercept, -3.0);
        assert_abs_diff_eq!(line.at(3.0), 3.0);
    }

    #[test]
    fn through_vertical_is_none() {
        assert!(Affine1::through(1.0, 0.0, 1.0, 5.0).is_none());
    }

    #[test]
    fn constant_positive_gap() {
        let upper = Affine1::new(0.0, 3.0);
        let lower = Affine1::new(0.0, 1.0);
        assert_abs_diff_eq!(positive_excess(&upper, &lower, 0.0, 4.0), 8.0);
        assert_abs_diff_eq!(positive_excess(&lower, &upper, 0.0, 4.0), 0.0);
    }

    #[test]
    fn parallel_equal_lines_contribute_nothing() {
        let line = Affine1::new(0.5, 1.0);
        assert_abs_diff_eq!(positive_excess(&line, &line, 0.0, 10.0), 0.0);
    }

    #[test]
    fn crossing_at_left_boundary() {
        let upper = Affine1::new(0.2, 0.0);
        let lower = Affine1::new(0.0, 0.0);
        assert_abs_diff_eq!(positive_excess(&upper, &lower, 0.0, 10.0), 10.0);
        assert_abs_diff_eq!(positive_excess(&lower, &upper, 0.0, 10.0), 0.0);
    }

    #[test]
    fn crossing_outside_interval() {
        // Difference is x - 20, negative over the whole interval.
        let upper = Affine1::new(1.0, -20.0);
        let lower = Affine1::new(0.0, 0.0);
        assert_abs_diff_eq!(positive_excess(&upper, &lower, 0.0, 10.0), 0.0);
        // Difference is 20 - x, positive over the whole interval: area 150.
        assert_abs_diff_eq!(positive_excess(&lower, &upper, 0.0, 10.0), 150.0);
    }

    #[test]
    fn crossing_inside_interval_keeps_positive_part() {
        let rising = Affine1::through(0.0, 0.0, 10.0, 2.0).unwrap();
        let falling = Affine1::through(0.0, 2.0, 10.0, 0.0).unwrap();
        // Each side of the crossing at x = 5 is a triangle of area 5.
        assert_abs_diff_eq!(
            positive_excess(&rising, &falling, 0.0, 10.0),
            5.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            positive_excess(&falling, &rising, 0.0, 10.0),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn crossing_off_center() {
        // Difference 2x - 2 on [0, 4): negative on [0, 1), positive on [1, 4).
        let upper = Affine1::new(2.0, -2.0);
        let lower = Affine1::new(0.0, 0.0);
        assert_abs_diff_eq!(positive_excess(&upper, &lower, 0.0, 4.0), 9.0);
        assert_abs_diff_eq!(positive_excess(&lower, &upper, 0.0, 4.0), 1.0);
    }
}
