use core::fmt;

use super::*;
use crate::roots::{root_bisection, root_newton_raphson};

/// Maps linear progress `x` to eased progress.
pub trait Easing<F> {
    fn ease(&self, x: F) -> F;
}

impl<F, E> Easing<F> for &E
where
    E: Easing<F> + ?Sized,
{
    fn ease(&self, x: F) -> F {
        (**self).ease(x)
    }
}

/// The two free control points of a timing function, (x1, y1) and (x2, y2).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoints<F> {
    pub x1: F,
    pub y1: F,
    pub x2: F,
    pub y2: F,
}

/// A cubic Bezier timing function, as in CSS `cubic-bezier(x1, y1, x2, y2)`.
///
/// The curve runs from (0, 0) to (1, 1). Both x coordinates must lie in [0, 1] so
/// that x(t) is monotonic and every progress value has exactly one parameter t;
/// the y coordinates are free, which allows overshooting or bouncing easings.
///
/// Construction samples x(t) once. Afterwards the curve is immutable and
/// [`solve`](Self::solve) may be called from any number of threads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezierEasing<F>
where
    F: Scalar,
{
    bezier: CubicBezier<F>,
    samples: SampleTable<F>,
}

impl<F> CubicBezierEasing<F>
where
    F: Scalar,
{
    /// Create a timing function from its two control points.
    ///
    /// # Errors
    /// `EasingError::InvalidControlPoint` if `x1` or `x2` is outside [0, 1] (or NaN).
    pub fn new(x1: F, y1: F, x2: F, y2: F) -> Result<Self, EasingError> {
        let unit = F::zero()..=F::one();
        if !unit.contains(&x1) {
            return Err(EasingError::InvalidControlPoint { index: 1 });
        }
        if !unit.contains(&x2) {
            return Err(EasingError::InvalidControlPoint { index: 2 });
        }

        let bezier = CubicBezier::new(x1, y1, x2, y2);
        Ok(CubicBezierEasing {
            bezier,
            samples: SampleTable::new(&bezier),
        })
    }

    /// CSS `linear`: the identity.
    pub fn linear() -> Self {
        Self::preset(0, 0, 100, 100)
    }

    /// CSS `ease`, the default timing function of transitions.
    pub fn ease() -> Self {
        Self::preset(25, 10, 25, 100)
    }

    /// CSS `ease-in`.
    pub fn ease_in() -> Self {
        Self::preset(42, 0, 100, 100)
    }

    /// CSS `ease-out`.
    pub fn ease_out() -> Self {
        Self::preset(0, 0, 58, 100)
    }

    /// CSS `ease-in-out`.
    pub fn ease_in_out() -> Self {
        Self::preset(42, 0, 58, 100)
    }

    // Control points given in hundredths; dividing in F keeps values like 0.1 exact to F's precision.
    fn preset(x1: u8, y1: u8, x2: u8, y2: u8) -> Self {
        let hundred: F = 100.0f32.into();
        let hundredths = |value: u8| -> F {
            let value: F = f32::from(value).into();
            value / hundred
        };
        let bezier = CubicBezier::new(hundredths(x1), hundredths(y1), hundredths(x2), hundredths(y2));
        CubicBezierEasing {
            bezier,
            samples: SampleTable::new(&bezier),
        }
    }

    pub fn control_points(&self) -> ControlPoints<F> {
        ControlPoints {
            x1: self.bezier.x1,
            y1: self.bezier.y1,
            x2: self.bezier.x2,
            y2: self.bezier.y2,
        }
    }

    /// Whether the curve is the identity, in which case `solve(x) == x`.
    pub fn is_linear(&self) -> bool {
        self.bezier.is_linear()
    }

    /// Evaluate the timing function: the y coordinate of the curve point whose x
    /// coordinate is `x`.
    /// `solve(0.0)` and `solve(1.0)` return exactly 0 and 1. Arguments outside [0, 1]
    /// are extrapolated along the same cubic as long as Newton-Raphson converges from
    /// the end of the sample table; arguments too far outside (e.g. `1e6`) are clamped
    /// to the nearest end bracket, so the result approaches `solve(0.0)` or `solve(1.0)`.
    pub fn solve(&self, x: F) -> F {
        if self.bezier.is_linear() || x == F::zero() || x == F::one() {
            return x;
        }
        self.bezier.y(self.solve_t(x))
    }

    /// Invert x(t): seed from the sample table, refine with Newton-Raphson and fall
    /// back to bisecting the sampled bracket where the slope is too flat to trust.
    fn solve_t(&self, x: F) -> F {
        let bezier = &self.bezier;
        let (bracket, guess) = self.samples.bracket(x);

        root_newton_raphson(
            guess,
            |t| bezier.x(t) - x,
            |t| bezier.dx(t),
            NEWTON_TOLERANCE.into(),
            NEWTON_MIN_SLOPE.into(),
            NEWTON_ITERATIONS,
        )
        .unwrap_or_else(|err| {
            log::trace!("newton-raphson failed with {:?} for x = {:?}, bisecting {:?}", err, x, bracket);
            root_bisection(
                bracket,
                |t| bezier.x(t) - x,
                SUBDIVISION_PRECISION.into(),
                SUBDIVISION_MAX_ITERATIONS,
            )
        })
    }
}

impl<F> Easing<F> for CubicBezierEasing<F>
where
    F: Scalar,
{
    fn ease(&self, x: F) -> F {
        self.solve(x)
    }
}

impl<F> TryFrom<ControlPoints<F>> for CubicBezierEasing<F>
where
    F: Scalar,
{
    type Error = EasingError;

    fn try_from(points: ControlPoints<F>) -> Result<Self, Self::Error> {
        Self::new(points.x1, points.y1, points.x2, points.y2)
    }
}

/// Formats the curve in CSS notation, e.g. `cubic-bezier(0.25, 0.1, 0.25, 1)`.
impl<F> fmt::Display for CubicBezierEasing<F>
where
    F: Scalar + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CubicBezier { x1, y1, x2, y2 } = self.bezier;
        write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }
}

#[cfg(feature = "serde")]
impl<F> serde::Serialize for CubicBezierEasing<F>
where
    F: Scalar + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.control_points().serialize(serializer)
    }
}

// The sample table is derived data, so only the control points travel and are validated again.
#[cfg(feature = "serde")]
impl<'de, F> serde::Deserialize<'de> for CubicBezierEasing<F>
where
    F: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = ControlPoints::deserialize(deserializer)?;
        Self::try_from(points).map_err(serde::de::Error::custom)
    }
}
