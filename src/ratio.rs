//! Linear and logarithmic views on the frequency ratio of a tuned interval.

/// The frequency ratio a [`crate::tuning::TuningMap`] assigns to an interval.
///
/// The same distance reads as a factor in linear frequency space or as cents / octaves in logarithmic frequency space.
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use meantonal::ratio::Ratio;
/// assert_approx_eq!(Ratio::from_float(1.5).as_cents(), 701.955);
/// assert_approx_eq!(Ratio::from_cents(600.0).as_octaves(), 0.5);
/// assert_approx_eq!(Ratio::from_octaves(-1.0).as_float(), 0.5);
/// ```
///
/// # Panics
///
/// Panics if the linear factor is not a finite positive number.
///
/// ```should_panic
/// # use meantonal::ratio::Ratio;
/// Ratio::from_float(0.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ratio {
    factor: f64,
}

impl Ratio {
    pub fn from_float(factor: f64) -> Self {
        assert!(
            factor.is_finite() && factor > 0.0,
            "Frequency ratio must be a finite positive factor, got {factor}"
        );
        Self { factor }
    }

    pub fn from_cents(cents: f64) -> Self {
        Self::from_octaves(cents / 1200.0)
    }

    pub fn from_octaves(octaves: f64) -> Self {
        Self::from_float(octaves.exp2())
    }

    pub fn octave() -> Self {
        Self::from_float(2.0)
    }

    /// One step of the equal division of `self` into `num_steps` parts.
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use meantonal::ratio::Ratio;
    /// assert_approx_eq!(Ratio::octave().divided_into_equal_steps(31).as_cents(), 38.709677);
    /// ```
    pub fn divided_into_equal_steps(self, num_steps: impl Into<f64>) -> Ratio {
        Ratio::from_octaves(self.as_octaves() / num_steps.into())
    }

    /// How many steps of size `step` make up `self`. The result is not rounded.
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use meantonal::ratio::Ratio;
    /// let step_of_19_edo = Ratio::octave().divided_into_equal_steps(19);
    /// assert_approx_eq!(Ratio::from_float(1.5).num_equal_steps_of_size(step_of_19_edo), 11.1142875);
    /// ```
    pub fn num_equal_steps_of_size(self, step: Ratio) -> f64 {
        self.as_octaves() / step.as_octaves()
    }

    pub fn as_float(self) -> f64 {
        self.factor
    }

    pub fn as_cents(self) -> f64 {
        1200.0 * self.as_octaves()
    }

    pub fn as_octaves(self) -> f64 {
        self.factor.log2()
    }
}
