//! Rendering lattice vectors as cents, frequency ratios and frequencies.

use crate::{
    interval::Interval,
    map::{Map1D, GENERATORS_TO},
    pitch::Pitch,
    ratio::Ratio,
};

/// Frequency of C4 in 12-EDO with A4 = 440 Hz.
pub const C4_HZ: f64 = 261.6255653;

const C4: Pitch = Pitch { w: 25, h: 10 };

/// A tuning of the lattice specified by the width of its perfect fifth and a reference frequency.
///
/// The octave is always pure, i.e. 1200 cents wide.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use meantonal::interval::Interval;
/// # use meantonal::pitch::Pitch;
/// # use meantonal::tuning::TuningMap;
/// let quarter_comma_meantone = TuningMap::new(696.578);
/// let major_third: Interval = "M3".parse().unwrap();
///
/// assert_approx_eq!(quarter_comma_meantone.to_cents(major_third), 386.312);
/// assert_approx_eq!(quarter_comma_meantone.to_ratio(major_third).as_float(), 1.25, 1e-5);
///
/// let a4: Pitch = "A4".parse().unwrap();
/// let concert_pitch = TuningMap::from_edo(12).with_reference(a4, 432.0);
/// assert_approx_eq!(concert_pitch.to_hz("C5".parse().unwrap()), 513.737, 1e-3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TuningMap {
    fifth: f64,
    reference: Pitch,
    reference_hz: f64,
    cent_map: Map1D<f64>,
    step_map: Option<Map1D>,
}

impl TuningMap {
    /// Creates a tuning with a perfect fifth of `fifth` cents, C4 being tuned to 261.6255653 Hz.
    pub fn new(fifth: f64) -> Self {
        Self {
            fifth,
            reference: C4,
            reference_hz: C4_HZ,
            cent_map: Map1D::new(fifth, 1200.0).compose(&GENERATORS_TO),
            step_map: None,
        }
    }

    /// Creates the equal division of the octave into `num_steps_per_octave` steps, using the best approximation of the 3/2 as the fifth.
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use meantonal::tuning::TuningMap;
    /// assert_approx_eq!(TuningMap::from_edo(12).fifth(), 700.0);
    /// assert_approx_eq!(TuningMap::from_edo(19).fifth(), 694.737, 1e-3);
    /// assert_approx_eq!(TuningMap::from_edo(31).fifth(), 696.774, 1e-3);
    /// assert_approx_eq!(TuningMap::from_edo(53).fifth(), 701.887, 1e-3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `num_steps_per_octave` is 0.
    ///
    /// ```should_panic
    /// # use meantonal::tuning::TuningMap;
    /// TuningMap::from_edo(0);
    /// ```
    pub fn from_edo(num_steps_per_octave: u16) -> Self {
        assert!(
            num_steps_per_octave > 0,
            "Number of steps per octave must be positive"
        );

        let num_steps = i32::from(num_steps_per_octave);
        let step = Ratio::octave().divided_into_equal_steps(num_steps);
        let fifth_in_steps = Ratio::from_float(1.5)
            .num_equal_steps_of_size(step)
            .round() as i32;
        let fifth = f64::from(fifth_in_steps) * 1200.0 / f64::from(num_steps);

        Self {
            step_map: Some(Map1D::new(
                2 * fifth_in_steps - num_steps,
                3 * num_steps - 5 * fifth_in_steps,
            )),
            ..Self::new(fifth)
        }
    }

    /// Moves the reference so that `pitch` sounds at `hz`.
    pub fn with_reference(self, pitch: Pitch, hz: f64) -> Self {
        Self {
            reference: pitch,
            reference_hz: hz,
            ..self
        }
    }

    pub fn fifth(&self) -> f64 {
        self.fifth
    }

    pub fn reference(&self) -> Pitch {
        self.reference
    }

    pub fn reference_hz(&self) -> f64 {
        self.reference_hz
    }

    /// The number of steps per octave if the tuning was created by [`TuningMap::from_edo`].
    pub fn num_steps_per_octave(&self) -> Option<u16> {
        self.step_map
            .and_then(|step_map| u16::try_from(step_map.map(Interval::new(5, 2))).ok())
    }

    pub fn to_cents(&self, interval: Interval) -> f64 {
        self.cent_map.map(interval)
    }

    pub fn to_ratio(&self, interval: Interval) -> Ratio {
        Ratio::from_cents(self.to_cents(interval))
    }

    pub fn to_hz(&self, pitch: Pitch) -> f64 {
        self.reference_hz * self.to_ratio(self.reference.interval_to(pitch)).as_float()
    }

    /// The number of EDO steps from C-1 to `pitch`. In 12-EDO this is the MIDI number.
    ///
    /// Returns [`None`] if the tuning is not an equal division of the octave.
    ///
    /// ```
    /// # use meantonal::tuning::TuningMap;
    /// let c4 = "C4".parse().unwrap();
    ///
    /// assert_eq!(TuningMap::from_edo(12).to_midi(c4), Some(60));
    /// assert_eq!(TuningMap::from_edo(31).to_midi(c4), Some(155));
    /// assert_eq!(TuningMap::new(696.0).to_midi(c4), None);
    /// ```
    pub fn to_midi(&self, pitch: Pitch) -> Option<i32> {
        self.step_map.map(|step_map| step_map.map(pitch))
    }
}

/// The default [`TuningMap`] is 12-EDO.
impl Default for TuningMap {
    fn default() -> Self {
        Self::from_edo(12)
    }
}
