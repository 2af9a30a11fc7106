use super::*;
use tinyvec::ArrayVec;

/// Evenly spaced samples of x(t) over t ∈ [0, 1], used to seed the inversion of a curve.
/// Sample `i` holds `x(i / (SAMPLE_TABLE_SIZE - 1))`. Since x(t) is non-decreasing for
/// control points inside the unit square, the table is sorted and can be binary searched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SampleTable<F>
where
    F: Scalar,
{
    samples: ArrayVec<[F; SAMPLE_TABLE_SIZE]>,
}

impl<F> SampleTable<F>
where
    F: Scalar,
{
    pub fn new(bezier: &CubicBezier<F>) -> Self {
        let step = Self::step();
        let mut samples = ArrayVec::new();
        samples.extend((0..SAMPLE_TABLE_SIZE).map(|i| bezier.x(step * (i as f32).into())));
        SampleTable { samples }
    }

    /// Distance in t between two neighbouring samples.
    pub fn step() -> F {
        F::one() / ((SAMPLE_TABLE_SIZE - 1) as f32).into()
    }

    pub fn samples(&self) -> &[F] {
        &self.samples
    }

    /// Find the interval `[t_start, t_end]` whose sampled x values enclose `x` and an
    /// initial guess for t obtained by linear interpolation within it.
    /// Values of `x` beyond the table land in the first or last interval, where the
    /// interpolated guess is extrapolated past [0, 1].
    pub fn bracket(&self, x: F) -> ((F, F), F) {
        let step = Self::step();
        let last = SAMPLE_TABLE_SIZE - 1;
        // number of interior samples not greater than x is the index of the interval start
        let span = self.samples[1..last].partition_point(|&sample| sample <= x);

        let t_start = step * (span as f32).into();
        let (lo, hi) = (self.samples[span], self.samples[span + 1]);
        let dist = if hi > lo { (x - lo) / (hi - lo) } else { F::zero() };

        ((t_start, t_start + step), t_start + dist * step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_follow_curve() {
        let bezier = CubicBezier::new(0.25f64, 0.1, 0.25, 1.0);
        let table = SampleTable::new(&bezier);

        assert_eq!(table.samples().len(), SAMPLE_TABLE_SIZE);
        assert_eq!(table.samples()[0], 0.0);
        assert_eq!(table.samples()[SAMPLE_TABLE_SIZE - 1], 1.0);
        for (i, sample) in table.samples().iter().enumerate() {
            assert_eq!(*sample, bezier.x(i as f64 * 0.1));
        }
        assert!(table.samples().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn bracket_encloses_target() {
        let bezier = CubicBezier::new(0.42f64, 0.0, 0.58, 1.0);
        let table = SampleTable::new(&bezier);

        let nsteps: usize = 100;
        for x in 0..=nsteps {
            let x = x as f64 / nsteps as f64;
            let ((t_start, t_end), guess) = table.bracket(x);
            assert!((t_end - t_start - 0.1).abs() < 1e-12);
            assert!(bezier.x(t_start) <= x + 1e-12);
            assert!(bezier.x(t_end) >= x - 1e-12);
            assert!(guess >= t_start - 1e-12 && guess <= t_end + 1e-12);
        }
    }

    #[test]
    fn bracket_at_origin_starts_at_zero() {
        let table = SampleTable::new(&CubicBezier::new(0.0f64, 0.0, 1.0, 1.0));
        let ((t_start, _), guess) = table.bracket(0.0);
        assert_eq!(t_start, 0.0);
        assert_eq!(guess, 0.0);
    }

    #[test]
    fn bracket_extrapolates_outside_unit_range() {
        let table = SampleTable::new(&CubicBezier::new(0.3f32, 0.0, 0.7, 1.0));

        let ((t_start, _), guess) = table.bracket(-0.5);
        assert_eq!(t_start, 0.0);
        assert!(guess < 0.0);

        let ((_, t_end), guess) = table.bracket(1.5);
        assert!((t_end - 1.0).abs() < 1e-6);
        assert!(guess > 1.0);
    }
}
