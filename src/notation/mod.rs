//! Conversions between [`Pitch`]es and textual note names.
//!
//! Each submodule provides a `to_pitch` parser and a `from_pitch` renderer for one notation.
//!
//! # Examples
//!
//! ```
//! # use meantonal::notation::{abc, helmholtz, lilypond, spn};
//! let pitch = spn::to_pitch("Eb4").unwrap();
//!
//! assert_eq!(lilypond::from_pitch(pitch), "ees'");
//! assert_eq!(helmholtz::from_pitch(pitch), "eb'");
//! assert_eq!(abc::from_pitch(pitch), "_E");
//! ```

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::{letter::Letter, pitch::Pitch, tonality::MODES};

pub mod abc;
pub mod helmholtz;
pub mod lilypond;
pub mod spn;

/// Returned when a note name, interval name, tonic or mode cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub input: String,
    pub kind: ParseErrorKind,
}

/// Specifies which kind of text was expected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// Scientific Pitch Notation, e.g. `C#4`.
    Spn,

    /// Absolute LilyPond note name, e.g. `cis'`.
    LilyPond,

    /// Helmholtz note name, e.g. `c#'`.
    Helmholtz,

    /// ABC note name, e.g. `^c`.
    Abc,

    /// Interval name, e.g. `M3`.
    IntervalName,

    /// Letter plus accidentals, e.g. `Eb`.
    Tonic,

    /// Mode name, e.g. `Dorian`.
    Mode,
}

impl ParseError {
    pub fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let input = &self.input;
        match self.kind {
            ParseErrorKind::Spn => {
                write!(f, "Invalid SPN '{input}': Must match [A-Ga-g][#bxw]*-?[0-9]+")
            }
            ParseErrorKind::LilyPond => write!(
                f,
                "Invalid LilyPond note name '{input}': Must match [a-g](is|es)*('|,)*"
            ),
            ParseErrorKind::Helmholtz => write!(
                f,
                "Invalid Helmholtz note name '{input}': Must match [A-Ga-g][#bxw]*('|,)*"
            ),
            ParseErrorKind::Abc => write!(
                f,
                "Invalid ABC note name '{input}': Must match [_=^]*[A-Ga-g]('|,)*"
            ),
            ParseErrorKind::IntervalName => write!(
                f,
                "Invalid interval name '{input}': Must match -?[PpMmAaDd#b]*[0-9]+ with a size of at least 1"
            ),
            ParseErrorKind::Tonic => {
                write!(f, "Invalid tonic '{input}': Must match [A-Ga-g][#bxw]*")
            }
            ParseErrorKind::Mode => {
                let mode_names: Vec<_> = MODES.iter().map(|&(name, _)| name).collect();
                write!(
                    f,
                    "Invalid mode '{input}': Must be one of {}",
                    mode_names.join(", ")
                )
            }
        }
    }
}

impl Error for ParseError {}

/// The value of a single SPN-style accidental symbol: `#`, `x`, `b` or `w`.
pub(crate) fn accidental_value(symbol: char) -> Option<i32> {
    match symbol {
        '#' => Some(1),
        'x' => Some(2),
        'b' => Some(-1),
        'w' => Some(-2),
        _ => None,
    }
}

/// Renders a double sharp as `x` and everything else as a run of `#` or `b`.
pub(crate) fn accidental_symbols(accidental: i32) -> String {
    match accidental {
        2 => "x".to_owned(),
        1.. => "#".repeat(accidental as usize),
        _ => "b".repeat(accidental.unsigned_abs() as usize),
    }
}

/// Sums up a run of accidental symbols, returning the number of chars consumed.
fn leading_accidentals(s: &str) -> (i32, usize) {
    let mut accidental = 0;
    let mut len = 0;
    for symbol in s.chars() {
        match accidental_value(symbol) {
            Some(value) => {
                accidental += value;
                len += symbol.len_utf8();
            }
            None => break,
        }
    }
    (accidental, len)
}

/// Places the natural `letter`, altered by `accidental`, into the octave with the given index (0 being SPN octave -1).
///
/// Returns [`None`] if the coordinates do not fit into an `i32`.
fn pitch_from_parts(letter: Letter, accidental: i32, octave_index: i32) -> Option<Pitch> {
    let (w, h) = letter.coords();
    let w = w
        .checked_add(accidental)?
        .checked_add(octave_index.checked_mul(5)?)?;
    let h = h
        .checked_sub(accidental)?
        .checked_add(octave_index.checked_mul(2)?)?;
    Some(Pitch::new(w, h))
}

/// Counts the octave marks of a Helmholtz or ABC suffix as `(apostrophes, commas)`.
fn octave_marks(marks: &str) -> Option<(i32, i32)> {
    marks.chars().try_fold((0i32, 0i32), |(up, down), mark| match mark {
        '\'' => Some((up.checked_add(1)?, down)),
        ',' => Some((up, down.checked_add(1)?)),
        _ => None,
    })
}
