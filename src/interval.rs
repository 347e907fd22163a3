//! Displacements between pitches, named the conventional way (P5, m3, AA4, -M3, …).

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::{
    letter::LETTER_COORDS,
    map::Vector,
    notation::{spn, ParseError, ParseErrorKind},
    pitch::Pitch,
};

/// The displacement between two [`Pitch`]es, counted in whole steps `w` and diatonic half steps `h`.
///
/// Intervals form a group under addition. Enharmonic spellings like A4 and d5 are distinct vectors.
///
/// # Examples
///
/// ```
/// # use meantonal::interval::Interval;
/// let major_third: Interval = "M3".parse().unwrap();
/// let minor_third: Interval = "m3".parse().unwrap();
///
/// assert_eq!(major_third, Interval::new(2, 0));
/// assert_eq!(major_third + minor_third, "P5".parse().unwrap());
/// assert_eq!((minor_third - major_third).to_string(), "d1");
/// assert_eq!((major_third - minor_third).to_string(), "A1");
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Interval {
    pub w: i32,
    pub h: i32,
}

impl Interval {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// The interval leading from `p` to `q`.
    pub fn between(p: Pitch, q: Pitch) -> Self {
        Self::new(q.w - p.w, q.h - p.h)
    }

    /// The interval between two pitches given in Scientific Pitch Notation.
    ///
    /// ```
    /// # use meantonal::interval::Interval;
    /// assert_eq!(Interval::from_spn("C4", "E4").unwrap(), Interval::new(2, 0));
    /// assert_eq!(Interval::from_spn("E4", "C4").unwrap(), Interval::new(-2, 0));
    /// assert!(Interval::from_spn("C4", "H4").is_err());
    /// ```
    pub fn from_spn(from: &str, to: &str) -> Result<Self, ParseError> {
        Ok(Self::between(spn::to_pitch(from)?, spn::to_pitch(to)?))
    }

    /// Parses names of the form `[-][quality letters][size]`.
    ///
    /// `A`, `a` and `#` augment by one chromatic step, `m` and `b` lower by one.
    /// `P`, `p` and `M` keep the major or perfect form. `d` and `D` diminish a perfect interval by one step per letter, but an imperfect (major) interval by two steps for the first letter, since there is no minor prime, fourth or fifth, and by one step for every further letter.
    ///
    /// Sizes above 7 describe compound intervals. A leading `-` negates the whole interval.
    ///
    /// # Examples
    ///
    /// ```
    /// # use meantonal::interval::Interval;
    /// assert_eq!(Interval::from_name("P5").unwrap(), Interval::new(3, 1));
    /// assert_eq!(Interval::from_name("5").unwrap(), Interval::new(3, 1));
    /// assert_eq!(Interval::from_name("b5").unwrap(), Interval::new(2, 2));
    /// assert_eq!(Interval::from_name("#5").unwrap(), Interval::new(4, 0));
    /// assert_eq!(Interval::from_name("d3").unwrap(), Interval::new(0, 2));
    /// assert_eq!(Interval::from_name("M10").unwrap(), Interval::new(7, 2));
    /// assert_eq!(Interval::from_name("-m3").unwrap(), Interval::new(-1, -1));
    ///
    /// assert!(Interval::from_name("P0").is_err());
    /// assert!(Interval::from_name("X5").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        let error = || ParseError::new(name, ParseErrorKind::IntervalName);

        let (sign, unsigned) = match name.strip_prefix('-') {
            Some(unsigned) => (-1, unsigned),
            None => (1, name),
        };

        let size_start = unsigned
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(error)?;
        let (quality_letters, size) = unsigned.split_at(size_start);

        if !size.chars().all(|c| c.is_ascii_digit()) {
            return Err(error());
        }
        let generic_size = size.parse::<i32>().map_err(|_| error())?;
        if generic_size < 1 {
            return Err(error());
        }

        let simple_index = (generic_size - 1) % 7;
        let num_octaves = (generic_size - 1) / 7;
        let is_perfect_class = matches!(simple_index, 0 | 3 | 4);

        let mut adjustment = 0;
        let mut diminished = false;
        for letter in quality_letters.chars() {
            match letter {
                'A' | 'a' | '#' => adjustment += 1,
                'm' | 'b' => adjustment -= 1,
                'P' | 'p' | 'M' => {}
                'D' | 'd' if is_perfect_class || diminished => adjustment -= 1,
                'D' | 'd' => {
                    diminished = true;
                    adjustment -= 2;
                }
                _ => return Err(error()),
            }
        }

        let (w, h) = LETTER_COORDS[simple_index as usize];
        let w = w + 5 * num_octaves + adjustment;
        let h = h + 2 * num_octaves - adjustment;

        Ok(Self::new(sign * w, sign * h))
    }

    /// The signed number of perfect fifths separating the interval from the unison.
    pub fn chroma(self) -> i32 {
        2 * self.w - 5 * self.h
    }

    /// The signed number of diatonic steps, e.g. 2 for any kind of third and -7 for a descending octave.
    pub fn stepspan(self) -> i32 {
        self.w + self.h
    }

    /// The signed size in 12-EDO semitones.
    pub fn semitones(self) -> i32 {
        2 * self.w + self.h
    }

    /// The generic size reduced to `0..7`.
    pub fn pc7(self) -> i32 {
        self.stepspan().rem_euclid(7)
    }

    /// The size in 12-EDO semitones reduced to `0..12`.
    ///
    /// ```
    /// # use meantonal::interval::Interval;
    /// let pc12 = |name: &str| Interval::from_name(name).unwrap().pc12();
    ///
    /// assert_eq!(pc12("A4"), 6);
    /// assert_eq!(pc12("M9"), 2);
    /// assert_eq!(pc12("-m2"), 11);
    /// ```
    pub fn pc12(self) -> i32 {
        self.semitones().rem_euclid(12)
    }

    /// Diatonic intervals are the ones found between two notes of the same major scale.
    pub fn is_diatonic(self) -> bool {
        self.chroma().abs() < 7
    }

    /// The quality as a signed number.
    ///
    /// 0 is perfect, 1 / -1 is major / minor, 2 / -2 is augmented / diminished, 3 / -3 is doubly augmented / diminished and so on.
    /// Descending intervals share the quality of their ascending counterpart.
    ///
    /// # Examples
    ///
    /// ```
    /// # use meantonal::interval::Interval;
    /// let quality = |name: &str| Interval::from_name(name).unwrap().quality();
    ///
    /// assert_eq!(quality("P8"), 0);
    /// assert_eq!(quality("M7"), 1);
    /// assert_eq!(quality("m2"), -1);
    /// assert_eq!(quality("A4"), 2);
    /// assert_eq!(quality("d5"), -2);
    /// assert_eq!(quality("dd6"), -3);
    /// assert_eq!(quality("-m3"), -1);
    /// ```
    pub fn quality(self) -> i32 {
        let band = quality_band(self.chroma());
        if self.stepspan() < 0 {
            -band
        } else {
            band
        }
    }

    /// Reduces a compound interval to a simple one, keeping its direction.
    ///
    /// ```
    /// # use meantonal::interval::Interval;
    /// let m17 = Interval::from_name("M17").unwrap();
    /// let m3 = Interval::from_name("M3").unwrap();
    ///
    /// assert_eq!(m17.simple(), m3);
    /// assert_eq!((-m17).simple(), -m3);
    /// ```
    pub fn simple(self) -> Self {
        let num_octaves = self.stepspan() / 7;
        Self::new(self.w - 5 * num_octaves, self.h - 2 * num_octaves)
    }

    pub fn negative(self) -> Self {
        Self::new(-self.w, -self.h)
    }

    /// Renders the conventional name, e.g. `"P5"`, `"AA4"` or `"-M3"`.
    pub fn name(self) -> String {
        if self.stepspan() < 0 {
            return format!("-{}", self.negative().name());
        }

        let quality = self.quality();
        let quality_letters = match quality {
            0 => "P".to_owned(),
            1 => "M".to_owned(),
            -1 => "m".to_owned(),
            2.. => "A".repeat((quality - 1) as usize),
            _ => "d".repeat((-quality - 1) as usize),
        };

        format!("{}{}", quality_letters, self.stepspan() + 1)
    }

    /// Checks whether both intervals are tuned identically in 12-EDO.
    pub fn is_enharmonic(self, other: Interval) -> bool {
        self.is_enharmonic_in(other, 12)
    }

    /// Checks whether both intervals are tuned identically in the equal division of the octave into `edo` parts.
    ///
    /// ```
    /// # use meantonal::interval::Interval;
    /// let m7 = Interval::from_name("m7").unwrap();
    /// let a6 = Interval::from_name("A6").unwrap();
    ///
    /// assert!(m7.is_enharmonic(a6));
    /// assert!(!m7.is_enharmonic_in(a6, 31));
    /// ```
    pub fn is_enharmonic_in(self, other: Interval, edo: i32) -> bool {
        self.chroma().rem_euclid(edo) == other.chroma().rem_euclid(edo)
    }

    /// All diatonic intervals from `from` up to `to`, ordered by diatonic size first and semitone size second.
    ///
    /// ```
    /// # use meantonal::interval::Interval;
    /// let names: Vec<_> = Interval::diatonic_range("M3".parse().unwrap(), "P5".parse().unwrap())
    ///     .map(|interval| interval.name())
    ///     .collect();
    ///
    /// assert_eq!(names, ["M3", "P4", "A4", "d5", "P5"]);
    /// ```
    pub fn diatonic_range(from: Interval, to: Interval) -> DiatonicIntervals {
        DiatonicIntervals {
            stepspan: from.stepspan(),
            h: max_diatonic_h(from.stepspan()),
            from,
            to,
        }
    }

    /// The simple intervals a singer would typically be asked to sing in a melody.
    ///
    /// ```
    /// # use meantonal::interval::Interval;
    /// let names: Vec<_> = Interval::melodic_range().map(Interval::name).collect();
    ///
    /// assert_eq!(names, ["P1", "m2", "M2", "m3", "M3", "P4", "P5", "m6", "M6", "P8"]);
    /// ```
    pub fn melodic_range() -> impl Iterator<Item = Interval> {
        (0..=5)
            .flat_map(|w| (0..=2).map(move |h| Interval::new(w, h)))
            .filter(|interval| interval.chroma().abs() < 6 && interval.stepspan() != 6)
    }
}

fn quality_band(chroma: i32) -> i32 {
    match chroma {
        -1..=1 => 0,
        2..=5 => (chroma + 5).div_euclid(7),
        -5..=-2 => -(5 - chroma).div_euclid(7),
        6.. => (chroma + 8).div_euclid(7),
        _ => (chroma - 2).div_euclid(7),
    }
}

// A diatonic interval spanning `stepspan` steps has chroma 2 * stepspan - 7 * h within -6..=6.
fn max_diatonic_h(stepspan: i32) -> i32 {
    (2 * stepspan + 6).div_euclid(7)
}

fn min_diatonic_h(stepspan: i32) -> i32 {
    (2 * stepspan - 7).div_euclid(7) + 1
}

/// Iterator returned by [`Interval::diatonic_range`].
#[derive(Clone, Debug)]
pub struct DiatonicIntervals {
    stepspan: i32,
    h: i32,
    from: Interval,
    to: Interval,
}

impl Iterator for DiatonicIntervals {
    type Item = Interval;

    fn next(&mut self) -> Option<Self::Item> {
        let sort_key = |interval: Interval| (interval.stepspan(), interval.semitones());

        loop {
            if self.stepspan > self.to.stepspan() {
                return None;
            }
            if self.h < min_diatonic_h(self.stepspan) {
                self.stepspan += 1;
                self.h = max_diatonic_h(self.stepspan);
                continue;
            }

            let candidate = Interval::new(self.stepspan - self.h, self.h);
            self.h -= 1;

            if sort_key(candidate) < sort_key(self.from) {
                continue;
            }
            if sort_key(candidate) > sort_key(self.to) {
                self.stepspan = self.to.stepspan() + 1;
                return None;
            }
            return Some(candidate);
        }
    }
}

impl Vector for Interval {
    fn components(self) -> (i32, i32) {
        (self.w, self.h)
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Self::Output {
        Interval::new(self.w + rhs.w, self.h + rhs.h)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Self::Output {
        Interval::new(self.w - rhs.w, self.h - rhs.h)
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Self::Output {
        self.negative()
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(&self.name())
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn interval(name: &str) -> Interval {
        Interval::from_name(name).unwrap()
    }

    #[test]
    fn parse_quality_letters() {
        let test_cases = [
            ("P5", (3, 1)),
            ("5", (3, 1)),
            ("d5", (2, 2)),
            ("b5", (2, 2)),
            ("A5", (4, 0)),
            ("#5", (4, 0)),
            ("a5", (4, 0)),
            ("M3", (2, 0)),
            ("3", (2, 0)),
            ("m3", (1, 1)),
            ("b3", (1, 1)),
            ("D3", (0, 2)),
            ("dd6", (1, 4)),
            ("AAAA6", (8, -3)),
            ("P8", (5, 2)),
            ("m13", (8, 4)),
            ("-M3", (-2, 0)),
        ];

        for (name, (w, h)) in test_cases {
            assert_eq!(interval(name), Interval::new(w, h), "{name}");
        }
    }

    #[test]
    fn parse_errors() {
        for name in ["", "-", "M", "P0", "M3M", "3.5", "X3", "--M3", "M 3"] {
            let error = Interval::from_name(name).unwrap_err();
            assert_eq!(error.kind, ParseErrorKind::IntervalName);
            assert_eq!(error.input, name);
        }
    }

    #[test]
    fn chroma_and_stepspan() {
        assert_eq!(interval("M3").chroma(), 4);
        assert_eq!(interval("m3").chroma(), -3);
        assert_eq!(interval("A6").chroma(), 10);

        for name in ["A6", "M6", "m6", "d6"] {
            assert_eq!(interval(name).stepspan(), 5);
        }
        assert_eq!(interval("m13").stepspan(), 12);
        assert_eq!(interval("m13").pc7(), 5);
        assert_eq!(interval("P8").pc7(), 0);
    }

    #[test]
    fn pc12() {
        let pc12s = ["M3", "A4", "M7", "M9", "P8"].map(|name| interval(name).pc12());
        assert_eq!(pc12s, [4, 6, 11, 2, 0]);
    }

    #[test]
    fn diatonic_intervals() {
        let diatonic = [
            "P1", "m2", "M2", "m3", "M3", "P4", "A4", "d5", "P5", "m6", "M6", "m7", "M7", "P8",
        ];
        for name in diatonic {
            assert!(interval(name).is_diatonic(), "{name}");
        }
        for name in ["d3", "A6", "A5"] {
            assert!(!interval(name).is_diatonic(), "{name}");
        }
    }

    #[test]
    fn qualities() {
        let test_cases = [
            (["P1", "P8", "P5", "P4"].as_slice(), 0),
            (&["M2", "M6", "M3", "M7"], 1),
            (&["m7", "m3", "m6", "m2"], -1),
            (&["A4", "A1", "A5", "A2", "A6", "A3", "A7"], 2),
            (&["d4", "d1", "d5", "d2", "d6", "d3", "d7"], -2),
            (&["AA4"], 3),
            (&["dd4", "dd6"], -3),
        ];

        for (names, expected) in test_cases {
            for name in names {
                assert_eq!(interval(name).quality(), expected, "{name}");
            }
        }
    }

    #[test]
    fn names_round_trip() {
        for name in [
            "AA5", "A5", "P5", "d5", "dd5", "A6", "M6", "m6", "d6", "dd6", "-M3", "-d4", "P1",
            "m9", "AAA11",
        ] {
            assert_eq!(interval(name).name(), name);
        }
    }

    #[test]
    fn names_are_normalized() {
        assert_eq!(interval("5").to_string(), "P5");
        assert_eq!(interval("#4").to_string(), "A4");
        assert_eq!(interval("b3").to_string(), "m3");
        assert_eq!(format!("{:>4}", interval("M3")), "  M3");
    }

    #[test]
    fn enharmonic_intervals() {
        let m7 = interval("m7");
        let a6 = interval("A6");
        assert!(m7.is_enharmonic(a6));
        assert!(!m7.is_enharmonic_in(a6, 31));

        let p8 = interval("P8");
        let aaaa6 = interval("AAAA6");
        assert!(p8.is_enharmonic_in(aaaa6, 31));
        assert!(!p8.is_enharmonic(aaaa6));
    }

    #[test]
    fn group_operations() {
        assert_eq!(Interval::new(3, 4).negative(), Interval::new(-3, -4));
        assert_eq!(interval("M3") + interval("m3"), interval("P5"));
        assert_eq!(interval("P5") - interval("m3"), interval("M3"));
        assert_eq!(-interval("P5") + interval("P5"), Interval::default());
    }

    #[test]
    fn between_is_antisymmetric() {
        let c4 = Pitch::new(25, 10);
        let e4 = Pitch::new(27, 10);

        assert_eq!(Interval::between(c4, e4), interval("M3"));
        assert_eq!(Interval::between(e4, c4), interval("M3").negative());
        assert_eq!(Interval::from_spn("C4", "E4").unwrap(), interval("M3"));
    }

    #[test]
    fn simple_intervals() {
        assert_eq!(interval("M17").simple(), interval("M3"));
        assert_eq!(interval("-M17").simple(), interval("-M3"));
        assert_eq!(interval("P8").simple(), interval("P1"));
        assert_eq!(interval("M7").simple(), interval("M7"));
    }

    #[test]
    fn diatonic_range_over_an_octave() {
        let names: Vec<_> = Interval::diatonic_range(interval("P1"), interval("P8"))
            .map(Interval::name)
            .collect();

        assert_eq!(
            names,
            [
                "P1", "m2", "M2", "m3", "M3", "P4", "A4", "d5", "P5", "m6", "M6", "m7", "M7",
                "P8"
            ]
        );
    }

    #[test]
    fn diatonic_range_clips_bounds_within_a_size() {
        let names: Vec<_> = Interval::diatonic_range(interval("M2"), interval("m3"))
            .map(Interval::name)
            .collect();
        assert_eq!(names, ["M2", "m3"]);

        let names: Vec<_> = Interval::diatonic_range(interval("-M2"), interval("m2"))
            .map(Interval::name)
            .collect();
        assert_eq!(names, ["-M2", "-m2", "P1", "m2"]);

        assert_eq!(
            Interval::diatonic_range(interval("P5"), interval("P4")).count(),
            0
        );
    }

    #[test]
    fn melodic_range_excludes_sevenths_and_tritones() {
        let melodic: Vec<_> = Interval::melodic_range().collect();

        assert_eq!(melodic.len(), 10);
        assert!(melodic
            .iter()
            .all(|interval| interval.is_diatonic() && interval.quality().abs() < 2));
        assert!(!melodic.contains(&interval("m7")));
        assert!(!melodic.contains(&interval("A4")));
    }
}
