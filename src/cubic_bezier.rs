use super::*;

/// A cubic Bezier curve in the unit square: the start point is fixed at (0, 0),
/// the end point at (1, 1), and only the two control points are free.
/// Each axis is defined by the equation:
/// ```∀ t ∈ [0..1],  P(t) = 3 * (1 - t)² * t * ctrl1 + 3 * (1 - t) * t² * ctrl2 + t³```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<F> {
    pub(crate) x1: F,
    pub(crate) y1: F,
    pub(crate) x2: F,
    pub(crate) y2: F,
}

impl<F> CubicBezier<F>
where
    F: Scalar,
{
    pub fn new(x1: F, y1: F, x2: F, y2: F) -> Self {
        CubicBezier { x1, y1, x2, y2 }
    }

    /// Returns the x coordinate of the curve evaluated at t
    pub fn x(&self, t: F) -> F {
        Self::axis(t, self.x1, self.x2)
    }

    /// Returns the y coordinate of the curve evaluated at t
    pub fn y(&self, t: F) -> F {
        Self::axis(t, self.y1, self.y2)
    }

    /// Direct Derivative - the slope dx/dt of the x axis at t.
    /// Written in the Bernstein form of the quadratic derivative curve whose
    /// control values are 3 * ctrl1, 3 * (ctrl2 - ctrl1) and 3 * (1 - ctrl2).
    pub fn dx(&self, t: F) -> F {
        let three: F = 3.0f32.into();
        let six: F = 6.0f32.into();
        let one_t = F::one() - t;

        three * one_t * one_t * self.x1
            + six * one_t * t * (self.x2 - self.x1)
            + three * t * t * (F::one() - self.x2)
    }

    /// Both control points on the diagonal make the curve the identity y = x.
    pub fn is_linear(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    fn axis(t: F, ctrl1: F, ctrl2: F) -> F {
        let three: F = 3.0f32.into();
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = F::one() - t;

        one_t * one_t * t * ctrl1 * three + one_t * t2 * ctrl2 * three + t3
    }
}
