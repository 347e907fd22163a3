//! Absolute positions in the whole-step/half-step lattice.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::{
    chroma,
    interval::Interval,
    letter::Letter,
    map::Vector,
    notation::{spn, ParseError},
    tonality::TonalContext,
    tuning::TuningMap,
};

/// Frequencies closer than this are considered equal when comparing pitches.
const CENTS_TOLERANCE: f64 = 1e-6;

/// A spelled pitch, counted in whole steps `w` and diatonic half steps `h` from C-1 (MIDI number 0).
///
/// Enharmonic spellings like C#4 and Db4 are different lattice points sharing the same MIDI number.
///
/// # Examples
///
/// ```
/// # use meantonal::pitch::Pitch;
/// # use meantonal::letter::Letter;
/// let c4 = Pitch::new(25, 10);
///
/// assert_eq!(c4.midi().unwrap(), 60);
/// assert_eq!(c4.chroma(), 0);
/// assert_eq!(c4.letter(), Letter::C);
/// assert_eq!(c4.octave(), 4);
/// assert_eq!(c4.to_string(), "C4");
///
/// let e_flat_4: Pitch = "Eb4".parse().unwrap();
/// assert_eq!(e_flat_4, Pitch::new(26, 11));
/// assert_eq!(e_flat_4.accidental(), -1);
/// assert_eq!(e_flat_4.pc12(), 3);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Pitch {
    pub w: i32,
    pub h: i32,
}

impl Pitch {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Creates the pitch with the given chroma (signed distance from C in perfect fifths) in the given SPN octave.
    ///
    /// ```
    /// # use meantonal::pitch::Pitch;
    /// assert_eq!(Pitch::from_chroma(0, 4).to_string(), "C4");
    /// assert_eq!(Pitch::from_chroma(6, 4).to_string(), "F#4");
    /// assert_eq!(Pitch::from_chroma(-3, 2).to_string(), "Eb2");
    /// assert_eq!(Pitch::from_chroma(5, -1).to_string(), "B-1");
    /// ```
    pub fn from_chroma(chroma: i32, octave: i32) -> Self {
        let lower_bound = 7 * (octave + 1);
        let mut pitch = Pitch::new(3 * chroma, chroma);
        while pitch.steps() > lower_bound {
            pitch = Pitch::new(pitch.w - 5, pitch.h - 2);
        }
        while pitch.steps() < lower_bound {
            pitch = Pitch::new(pitch.w + 5, pitch.h + 2);
        }
        pitch
    }

    /// Parses Scientific Pitch Notation, e.g. `"C4"`, `"F#3"` or `"Bbb-1"`.
    pub fn from_spn(spn: &str) -> Result<Self, ParseError> {
        spn::to_pitch(spn)
    }

    /// The MIDI number, provided it lies within the standard range `0..128`.
    ///
    /// ```
    /// # use meantonal::pitch::Pitch;
    /// assert_eq!(Pitch::new(0, 0).midi().unwrap(), 0);
    /// assert_eq!(Pitch::new(54, 19).midi().unwrap(), 127);
    /// assert_eq!(Pitch::new(54, 20).midi().unwrap_err().midi_number, 128);
    /// assert_eq!(Pitch::new(0, -1).midi().unwrap_err().midi_number, -1);
    /// ```
    pub fn midi(self) -> Result<i32, MidiRangeError> {
        let midi_number = 2 * self.w + self.h;
        if (0..128).contains(&midi_number) {
            Ok(midi_number)
        } else {
            Err(MidiRangeError { midi_number })
        }
    }

    /// The signed distance from C in perfect fifths.
    pub fn chroma(self) -> i32 {
        2 * self.w - 5 * self.h
    }

    /// The 7-tone pitch class, i.e. the index of the letter with C being 0.
    pub fn pc7(self) -> i32 {
        self.steps().rem_euclid(7)
    }

    /// The 12-tone pitch class with C being 0.
    pub fn pc12(self) -> i32 {
        (2 * self.w + self.h).rem_euclid(12)
    }

    pub fn letter(self) -> Letter {
        Letter::from_index(self.pc7())
    }

    /// 0 is natural, +1 / -1 is sharp / flat, +2 / -2 is double sharp / double flat and so on.
    pub fn accidental(self) -> i32 {
        chroma::to_accidental(self.chroma())
    }

    /// The octave number in SPN numbering.
    pub fn octave(self) -> i32 {
        self.steps().div_euclid(7) - 1
    }

    /// The signed number of diatonic steps needed to reach `other`.
    pub fn steps_to(self, other: Pitch) -> i32 {
        other.steps() - self.steps()
    }

    fn steps(self) -> i32 {
        self.w + self.h
    }

    /// Checks whether both pitches sound identical in 12-EDO.
    ///
    /// Use `==` to compare spellings.
    pub fn is_enharmonic(self, other: Pitch) -> bool {
        self.is_enharmonic_in(other, 12)
    }

    /// Checks whether both pitch classes sound identical in the equal division of the octave into `edo` parts.
    ///
    /// ```
    /// # use meantonal::pitch::Pitch;
    /// let c_sharp: Pitch = "C#4".parse().unwrap();
    /// let d_flat: Pitch = "Db4".parse().unwrap();
    ///
    /// assert_ne!(c_sharp, d_flat);
    /// assert!(c_sharp.is_enharmonic(d_flat));
    /// assert!(!c_sharp.is_enharmonic_in(d_flat, 31));
    /// ```
    pub fn is_enharmonic_in(self, other: Pitch, edo: i32) -> bool {
        self.chroma().rem_euclid(edo) == other.chroma().rem_euclid(edo)
    }

    pub fn interval_to(self, other: Pitch) -> Interval {
        Interval::between(self, other)
    }

    /// Transposes by the exact interval given, without regard to any key.
    pub fn transpose_real(self, interval: Interval) -> Pitch {
        Pitch::new(self.w + interval.w, self.h + interval.h)
    }

    /// Mirrors the pitch at the given [`Axis`].
    ///
    /// ```
    /// # use meantonal::pitch::{Axis, Pitch};
    /// let axis = Axis::from_spn("C4", "G4").unwrap();
    ///
    /// assert_eq!(Pitch::from_spn("E4").unwrap().invert(axis).to_string(), "Eb4");
    /// assert_eq!(Pitch::from_spn("C4").unwrap().invert(axis).to_string(), "G4");
    /// ```
    pub fn invert(self, axis: Axis) -> Pitch {
        Pitch::new(axis.w - self.w, axis.h - self.h)
    }

    /// The 0-indexed scale degree within the given context.
    pub fn degree_in(self, context: &TonalContext) -> i32 {
        context.degree_number(self)
    }

    /// The alteration with respect to the diatonic note of the same scale degree, see [`TonalContext::degree_alteration`].
    pub fn alteration_in(self, context: &TonalContext) -> i32 {
        context.degree_alteration(self)
    }

    /// Replaces the accidental by the one the letter carries within the given context.
    pub fn snap_to(self, context: &TonalContext) -> Pitch {
        context.snap_diatonic(self)
    }

    /// Transposes by the given number of diatonic steps, picking the accidental that fits the context.
    ///
    /// ```
    /// # use meantonal::pitch::Pitch;
    /// # use meantonal::tonality::TonalContext;
    /// let d_major = TonalContext::from_strings("D", "major").unwrap();
    /// let d_sharp: Pitch = "D#4".parse().unwrap();
    ///
    /// assert_eq!(d_sharp.transpose_diatonic(1, &d_major).to_string(), "E4");
    /// assert_eq!(d_sharp.transpose_diatonic(-3, &d_major).to_string(), "A3");
    /// assert_eq!(d_sharp.transpose_diatonic(4, &d_major).to_string(), "A4");
    /// ```
    pub fn transpose_diatonic(self, steps: i32, context: &TonalContext) -> Pitch {
        self.transpose_real(Interval::new(steps, 0))
            .snap_to(context)
    }

    /// The highest of the given pitches when tuned with `tuning`.
    ///
    /// If several pitches sound identical the one spanning the fewest diatonic steps from C-1 wins, i.e. C#4 beats Db4 in 12-EDO.
    ///
    /// ```
    /// # use meantonal::pitch::Pitch;
    /// # use meantonal::tuning::TuningMap;
    /// let pitches = ["C#4", "Db4", "B3"].map(|spn| spn.parse::<Pitch>().unwrap());
    ///
    /// let twelve_edo = TuningMap::default();
    /// assert_eq!(Pitch::highest(pitches, &twelve_edo).unwrap().to_string(), "C#4");
    ///
    /// let meantone = TuningMap::from_edo(31);
    /// assert_eq!(Pitch::highest(pitches, &meantone).unwrap().to_string(), "Db4");
    /// assert_eq!(Pitch::lowest(pitches, &meantone).unwrap().to_string(), "B3");
    ///
    /// assert_eq!(Pitch::highest([], &meantone), None);
    /// ```
    pub fn highest(pitches: impl IntoIterator<Item = Pitch>, tuning: &TuningMap) -> Option<Pitch> {
        pitches.into_iter().reduce(|best, candidate| {
            let ordering = compare_height(tuning, candidate, best)
                .then_with(|| best.steps().cmp(&candidate.steps()));
            match ordering {
                Ordering::Greater => candidate,
                Ordering::Less | Ordering::Equal => best,
            }
        })
    }

    /// The lowest of the given pitches when tuned with `tuning`.
    ///
    /// If several pitches sound identical the one spanning the fewest diatonic steps from C-1 wins.
    pub fn lowest(pitches: impl IntoIterator<Item = Pitch>, tuning: &TuningMap) -> Option<Pitch> {
        pitches.into_iter().reduce(|best, candidate| {
            let ordering = compare_height(tuning, best, candidate)
                .then_with(|| best.steps().cmp(&candidate.steps()));
            match ordering {
                Ordering::Greater => candidate,
                Ordering::Less | Ordering::Equal => best,
            }
        })
    }

    /// The pitch closest to `self` when tuned with `tuning`, regardless of direction.
    ///
    /// If several pitches are equally close the one fewest diatonic steps away wins.
    ///
    /// ```
    /// # use meantonal::pitch::Pitch;
    /// # use meantonal::tuning::TuningMap;
    /// let a4: Pitch = "A4".parse().unwrap();
    /// let candidates = ["F4", "C5", "Bbb4"].map(|spn| spn.parse::<Pitch>().unwrap());
    ///
    /// // Bbb4 is A4 in 12-EDO but a diesis above A4 in 31-EDO
    /// assert_eq!(a4.nearest(candidates, &TuningMap::default()).unwrap().to_string(), "Bbb4");
    /// assert_eq!(a4.nearest(candidates[..2].iter().copied(), &TuningMap::default()).unwrap().to_string(), "C5");
    /// ```
    pub fn nearest(
        self,
        pitches: impl IntoIterator<Item = Pitch>,
        tuning: &TuningMap,
    ) -> Option<Pitch> {
        let distance = |pitch: Pitch| tuning.to_cents(self.interval_to(pitch)).abs();

        pitches.into_iter().reduce(|best, candidate| {
            let ordering = compare_cents(distance(candidate), distance(best)).then_with(|| {
                self.steps_to(candidate)
                    .abs()
                    .cmp(&self.steps_to(best).abs())
            });
            match ordering {
                Ordering::Less => candidate,
                Ordering::Greater | Ordering::Equal => best,
            }
        })
    }

    /// All diatonic pitches of `context` from `from` (snapped to the context) up to `to`.
    ///
    /// ```
    /// # use meantonal::pitch::Pitch;
    /// # use meantonal::tonality::TonalContext;
    /// let f_major = TonalContext::from_strings("F", "major").unwrap();
    /// let scale: Vec<_> = Pitch::diatonic_range("F4".parse().unwrap(), "F5".parse().unwrap(), &f_major)
    ///     .map(|pitch| pitch.to_string())
    ///     .collect();
    ///
    /// assert_eq!(scale, ["F4", "G4", "A4", "Bb4", "C5", "D5", "E5", "F5"]);
    /// ```
    pub fn diatonic_range(from: Pitch, to: Pitch, context: &TonalContext) -> DiatonicPitches {
        DiatonicPitches {
            current: from,
            to,
            context: *context,
            started: false,
        }
    }

    /// Every diatonic pitch of `context` from `from` up to `to` together with its chromatic neighbors.
    ///
    /// Each chromatic pitch is yielded twice, spelled as an altered version of the note below and of the note above.
    /// The iteration ends at the first candidate with more diatonic steps than `to`, so a `to` spelled as a sharp
    /// (e.g. `D#4` in C major) is not part of the range.
    ///
    /// ```
    /// # use meantonal::pitch::Pitch;
    /// # use meantonal::tonality::TonalContext;
    /// let c_major = TonalContext::from_strings("C", "major").unwrap();
    /// let range: Vec<_> = Pitch::chromatic_range("C4".parse().unwrap(), "E4".parse().unwrap(), &c_major)
    ///     .map(|pitch| pitch.to_string())
    ///     .collect();
    ///
    /// assert_eq!(range, ["C4", "Db4", "C#4", "D4", "Eb4", "D#4", "E4"]);
    /// ```
    pub fn chromatic_range(from: Pitch, to: Pitch, context: &TonalContext) -> ChromaticPitches {
        let mi_below = context.nearest_mi_below(from);
        ChromaticPitches {
            cursor: from,
            from,
            to,
            floor: mi_below.h,
            middle: context.next_mi_above(mi_below),
            context: *context,
            phase: RangePhase::Windows,
        }
    }
}

fn compare_cents(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < CENTS_TOLERANCE {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

fn compare_height(tuning: &TuningMap, a: Pitch, b: Pitch) -> Ordering {
    compare_cents(0.0, tuning.to_cents(a.interval_to(b)))
}

impl Vector for Pitch {
    fn components(self) -> (i32, i32) {
        (self.w, self.h)
    }
}

impl Add<Interval> for Pitch {
    type Output = Pitch;

    fn add(self, rhs: Interval) -> Self::Output {
        self.transpose_real(rhs)
    }
}

impl Sub<Interval> for Pitch {
    type Output = Pitch;

    fn sub(self, rhs: Interval) -> Self::Output {
        self.transpose_real(rhs.negative())
    }
}

/// The interval leading from `rhs` to `self`.
impl Sub for Pitch {
    type Output = Interval;

    fn sub(self, rhs: Pitch) -> Self::Output {
        Interval::between(rhs, self)
    }
}

/// [`Pitch`]es are rendered in Scientific Pitch Notation.
impl Display for Pitch {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(&spn::from_pitch(*self))
    }
}

impl FromStr for Pitch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        spn::to_pitch(s)
    }
}

/// Returned by [`Pitch::midi`] if the MIDI number is outside of `0..128`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MidiRangeError {
    pub midi_number: i32,
}

impl Display for MidiRangeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Outside of standard MIDI range: {}", self.midi_number)
    }
}

impl Error for MidiRangeError {}

/// The sum of two pitches that mirror each other.
///
/// Inverting a pitch at an axis maps each of the two defining pitches onto the other one.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Axis {
    pub w: i32,
    pub h: i32,
}

impl Axis {
    pub fn new(p: Pitch, q: Pitch) -> Self {
        Self {
            w: p.w + q.w,
            h: p.h + q.h,
        }
    }

    pub fn from_spn(p: &str, q: &str) -> Result<Self, ParseError> {
        Ok(Self::new(spn::to_pitch(p)?, spn::to_pitch(q)?))
    }
}

impl Vector for Axis {
    fn components(self) -> (i32, i32) {
        (self.w, self.h)
    }
}

/// Iterator returned by [`Pitch::diatonic_range`].
#[derive(Clone, Debug)]
pub struct DiatonicPitches {
    current: Pitch,
    to: Pitch,
    context: TonalContext,
    started: bool,
}

impl Iterator for DiatonicPitches {
    type Item = Pitch;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.current.snap_to(&self.context));
        }
        if self.current.steps_to(self.to) <= 0 {
            return None;
        }
        self.current = self.current.transpose_diatonic(1, &self.context);
        Some(self.current)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum RangePhase {
    Windows,
    LastWindow,
    Finished,
}

/// Iterator returned by [`Pitch::chromatic_range`].
///
/// The lattice is scanned in windows reaching from one mi (the lower note of a diatonic half step) to the next one.
/// Each row of a window holds a fixed `w` and covers the `h` values from the floor of the window up to one above the upper mi.
#[derive(Clone, Debug)]
pub struct ChromaticPitches {
    cursor: Pitch,
    from: Pitch,
    to: Pitch,
    floor: i32,
    middle: Pitch,
    context: TonalContext,
    phase: RangePhase,
}

impl Iterator for ChromaticPitches {
    type Item = Pitch;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                RangePhase::Windows => {
                    if self.middle.steps_to(self.to) <= 0 {
                        self.phase = RangePhase::LastWindow;
                        continue;
                    }
                    if self.cursor.w > self.middle.w - 1 {
                        self.floor = self.middle.h;
                        self.middle = self.context.next_mi_above(self.middle);
                        continue;
                    }
                    if self.cursor.h > self.middle.h + 1 {
                        self.next_row();
                        continue;
                    }

                    let candidate = self.cursor;
                    self.cursor.h += 1;
                    if candidate.steps_to(self.from) > 0 {
                        continue;
                    }
                    return Some(candidate);
                }
                RangePhase::LastWindow => {
                    if self.cursor.w > self.to.w {
                        self.phase = RangePhase::Finished;
                        continue;
                    }
                    if self.cursor.h > self.middle.h + 1 {
                        self.next_row();
                        continue;
                    }

                    let candidate = self.cursor;
                    if candidate.steps_to(self.to) < 0 {
                        self.phase = RangePhase::Finished;
                        continue;
                    }
                    self.cursor.h += 1;
                    return Some(candidate);
                }
                RangePhase::Finished => return None,
            }
        }
    }
}

impl ChromaticPitches {
    fn next_row(&mut self) {
        self.cursor.h = self.floor;
        self.cursor.w += 1;
    }
}
