//! Keys and modes, and how pitches relate to them.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::{
    chroma,
    letter::Letter,
    notation::{self, ParseError, ParseErrorKind},
    pitch::Pitch,
};

/// The seven diatonic modes, numbered in ascending fifths.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    Lydian = 0,
    Ionian = 1,
    Mixolydian = 2,
    Dorian = 3,
    Aeolian = 4,
    Phrygian = 5,
    Locrian = 6,
}

/// Accepted mode names, matched case-insensitively.
pub const MODES: [(&str, Mode); 9] = [
    ("lydian", Mode::Lydian),
    ("ionian", Mode::Ionian),
    ("mixolydian", Mode::Mixolydian),
    ("dorian", Mode::Dorian),
    ("aeolian", Mode::Aeolian),
    ("phrygian", Mode::Phrygian),
    ("locrian", Mode::Locrian),
    ("major", Mode::Ionian),
    ("minor", Mode::Aeolian),
];

impl Mode {
    pub fn number(self) -> i32 {
        self as i32
    }

    /// ```
    /// # use meantonal::tonality::Mode;
    /// assert_eq!(Mode::from_number(4), Some(Mode::Aeolian));
    /// assert_eq!(Mode::from_number(7), None);
    /// ```
    pub fn from_number(number: i32) -> Option<Self> {
        MODES
            .iter()
            .map(|&(_, mode)| mode)
            .find(|mode| mode.number() == number)
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Lydian => "Lydian",
            Mode::Ionian => "Ionian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Dorian => "Dorian",
            Mode::Aeolian => "Aeolian",
            Mode::Phrygian => "Phrygian",
            Mode::Locrian => "Locrian",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// ```
/// # use meantonal::tonality::Mode;
/// assert_eq!("Dorian".parse::<Mode>().unwrap(), Mode::Dorian);
/// assert_eq!("MAJOR".parse::<Mode>().unwrap(), Mode::Ionian);
/// assert_eq!("minor".parse::<Mode>().unwrap(), Mode::Aeolian);
/// assert_eq!(
///     "Hypodorian".parse::<Mode>().unwrap_err().to_string(),
///     "Invalid mode 'Hypodorian': Must be one of lydian, ionian, mixolydian, dorian, aeolian, phrygian, locrian, major, minor"
/// );
/// ```
impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MODES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, mode)| mode)
            .ok_or_else(|| ParseError::new(s, ParseErrorKind::Mode))
    }
}

/// The tonic of a [`TonalContext`], described by its letter and accidental.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tonic {
    pub letter: Letter,
    pub accidental: i32,
    pub chroma: i32,
}

impl Tonic {
    pub fn from_chroma(chroma: i32) -> Self {
        Self {
            letter: chroma::to_letter(chroma),
            accidental: chroma::to_accidental(chroma),
            chroma,
        }
    }
}

/// Parses a letter followed by any number of `#` (sharp), `x` (double sharp), `b` (flat) or `w` (double flat).
///
/// ```
/// # use meantonal::tonality::Tonic;
/// # use meantonal::letter::Letter;
/// let tonic: Tonic = "Eb".parse().unwrap();
/// assert_eq!(tonic.letter, Letter::E);
/// assert_eq!(tonic.accidental, -1);
/// assert_eq!(tonic.chroma, -3);
///
/// assert_eq!("fx".parse::<Tonic>().unwrap().chroma, 13);
/// assert!("H".parse::<Tonic>().is_err());
/// assert!("C4".parse::<Tonic>().is_err());
/// ```
impl FromStr for Tonic {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseError::new(s, ParseErrorKind::Tonic);

        let mut chars = s.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(error)?;
        let mut accidental = 0;
        for c in chars {
            accidental += notation::accidental_value(c).ok_or_else(error)?;
        }

        let (w, h) = letter.coords();
        Ok(Tonic::from_chroma(2 * w - 5 * h + 7 * accidental))
    }
}

impl Display for Tonic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.letter,
            notation::accidental_symbols(self.accidental)
        )
    }
}

/// The governing key or mode, used to spell, snap and enumerate pitches.
///
/// # Examples
///
/// ```
/// # use meantonal::pitch::Pitch;
/// # use meantonal::tonality::{Mode, TonalContext};
/// let d_major = TonalContext::new(2, Mode::Ionian);
/// let f4: Pitch = "F4".parse().unwrap();
///
/// assert_eq!(f4.degree_in(&d_major), 2);
/// assert_eq!(f4.alteration_in(&d_major), -1);
/// assert_eq!(f4.snap_to(&d_major).to_string(), "F#4");
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct TonalContext {
    tonic: Tonic,
    mode: Mode,
    chroma_offset: i32,
}

impl TonalContext {
    /// Creates a context from the chroma of its tonic (signed distance from C in perfect fifths) and its mode.
    pub fn new(chroma: i32, mode: Mode) -> Self {
        Self {
            tonic: Tonic::from_chroma(chroma),
            mode,
            chroma_offset: mode.number() - chroma,
        }
    }

    /// ```
    /// # use meantonal::tonality::{Mode, TonalContext};
    /// # use meantonal::letter::Letter;
    /// let context = TonalContext::from_strings("Eb", "Phrygian").unwrap();
    ///
    /// assert_eq!(context.mode(), Mode::Phrygian);
    /// assert_eq!(context.tonic().letter, Letter::E);
    /// assert_eq!(context.tonic().accidental, -1);
    /// assert_eq!(context.tonic().chroma, -3);
    /// assert_eq!(context.to_string(), "Eb Phrygian");
    /// ```
    pub fn from_strings(tonic: &str, mode: &str) -> Result<Self, ParseError> {
        let tonic = tonic.parse::<Tonic>()?;
        let mode = mode.parse::<Mode>()?;
        Ok(Self::new(tonic.chroma, mode))
    }

    pub fn tonic(&self) -> Tonic {
        self.tonic
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The chroma to add to a pitch so that the diatonic notes of the context land in `0..7`.
    pub fn chroma_offset(&self) -> i32 {
        self.chroma_offset
    }

    /// The 0-indexed scale degree of `pitch`, ignoring its accidental.
    pub fn degree_number(&self, pitch: Pitch) -> i32 {
        (pitch.w + pitch.h - self.tonic.letter.index()).rem_euclid(7)
    }

    /// How far `pitch` departs from the diatonic note of the same letter.
    ///
    /// 0 is diatonic, +1 / -1 is raised / lowered. +2 / -2 marks pitches too remote to belong to the context.
    pub fn degree_alteration(&self, pitch: Pitch) -> i32 {
        match pitch.chroma() + self.chroma_offset {
            0..=6 => 0,
            7..=11 => 1,
            -5..=-1 => -1,
            ..=-6 => -2,
            _ => 2,
        }
    }

    /// The chroma of the diatonic note at the 0-indexed scale degree `degree`.
    pub fn degree_chroma(&self, degree: i32) -> i32 {
        (degree * 2 + self.mode.number()).rem_euclid(7) - self.chroma_offset
    }

    /// Moves `pitch` to the diatonic note of the same letter and octave.
    pub fn snap_diatonic(&self, pitch: Pitch) -> Pitch {
        let mut result = pitch;
        while self.degree_alteration(result) > 0 {
            result = Pitch::new(result.w - 1, result.h + 1);
        }
        while self.degree_alteration(result) < 0 {
            result = Pitch::new(result.w + 1, result.h - 1);
        }
        result
    }

    /// The closest diatonic mi at or below `pitch`.
    ///
    /// A mi is the lower note of a diatonic half step, like E and B in C major or A minor.
    pub fn nearest_mi_below(&self, pitch: Pitch) -> Pitch {
        let distance = |mi: i32| {
            let steps_above = ((pitch.chroma() - mi) * 3).rem_euclid(7);
            if steps_above == 0 {
                0
            } else {
                steps_above - 7
            }
        };
        let steps = distance(self.natural_mi()).max(distance(self.hard_mi()));
        pitch.transpose_diatonic(steps, self)
    }

    /// The mi following the mi `pitch`, e.g. B4 for E4 in C major.
    ///
    /// For pitches other than a mi the farther of the two candidates within the next octave is returned.
    pub fn next_mi_above(&self, pitch: Pitch) -> Pitch {
        let distance = |mi: i32| ((pitch.chroma() - mi) * 3).rem_euclid(7);
        let steps = distance(self.natural_mi()).max(distance(self.hard_mi()));
        pitch.transpose_diatonic(steps, self)
    }

    fn natural_mi(&self) -> i32 {
        5 - self.chroma_offset
    }

    fn hard_mi(&self) -> i32 {
        6 - self.chroma_offset
    }
}

impl Display for TonalContext {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode)
    }
}
