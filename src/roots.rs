//! Scalar root finding for the curve inversion x(t) = x.
//!
//! Available functions:
//! - `root_newton_raphson()`
//! - `root_bisection()`
use num_traits::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootFindingError {
    FailedToConverge,
    MaxIterationsReached,
    ZeroDerivative,
}

/// Find a root of f(x) = 0 starting from `start`, given f and its derivative f'.
/// Newton-Raphson converges quadratically from a good start value, so a handful of
/// iterations suffice when `start` already lies close to the root.
/// Stops early once f(x) or the Newton step vanishes to rounding error, and otherwise
/// accepts the last iterate if |f| is within `eps`.
/// Gives up with `ZeroDerivative` as soon as |f'(x)| drops below `min_slope`.
pub(crate) fn root_newton_raphson<F, Func, Deriv>(
    start: F,
    f: Func,
    d: Deriv,
    eps: F,
    min_slope: F,
    max_iter: usize,
) -> Result<F, RootFindingError>
where
    F: Float,
    Func: Fn(F) -> F,
    Deriv: Fn(F) -> F,
{
    let mut x = start;
    for _ in 0..max_iter {
        let fx = f(x);
        if fx.abs() <= F::epsilon() {
            return Ok(x);
        }
        let dx = d(x);
        if dx.abs() < min_slope {
            return Err(RootFindingError::ZeroDerivative);
        }
        let x1 = x - fx / dx;
        if x1.is_nan() {
            return Err(RootFindingError::FailedToConverge);
        }
        // the residual of a far root never reaches epsilon, so stop once the step is at rounding level
        if (x1 - x).abs() <= F::epsilon() * x.abs().max(F::one()) {
            return Ok(x1);
        }
        x = x1;
    }
    if f(x).abs() <= eps {
        Ok(x)
    } else {
        Err(RootFindingError::MaxIterationsReached)
    }
}

/// Find a root of the increasing function f inside `[lo, hi]` by halving the interval.
/// Stops early once |f| is below `eps`; otherwise returns the midpoint of the
/// interval left after `max_iter` halvings.
pub(crate) fn root_bisection<F, Func>((mut lo, mut hi): (F, F), f: Func, eps: F, max_iter: usize) -> F
where
    F: Float,
    Func: Fn(F) -> F,
{
    let two = F::one() + F::one();
    let mut mid = lo + (hi - lo) / two;
    for _ in 0..max_iter {
        let fx = f(mid);
        if fx.abs() < eps {
            break;
        }
        if fx > F::zero() {
            hi = mid;
        } else {
            lo = mid;
        }
        mid = lo + (hi - lo) / two;
    }
    mid
}
