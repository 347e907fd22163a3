//! Helmholtz note names, e.g. `c'` (middle C), `C` or `f#''`.
//!
//! Uppercase letters denote the great octave (SPN octave 2) and are lowered further by commas.
//! Lowercase letters denote the small octave (SPN octave 3) and are raised further by apostrophes.
//! Marks of the other kind are ignored.

use super::{ParseError, ParseErrorKind};
use crate::{letter::Letter, pitch::Pitch};

/// ```
/// # use meantonal::notation::helmholtz;
/// # use meantonal::pitch::Pitch;
/// assert_eq!(helmholtz::to_pitch("c'").unwrap(), Pitch::new(25, 10));
/// assert_eq!(helmholtz::to_pitch("c").unwrap(), Pitch::new(20, 8));
/// assert_eq!(helmholtz::to_pitch("C").unwrap(), Pitch::new(15, 6));
/// assert_eq!(helmholtz::to_pitch("C,").unwrap(), Pitch::new(10, 4));
/// assert_eq!(helmholtz::to_pitch("f#''").unwrap(), Pitch::new(33, 12));
/// ```
pub fn to_pitch(name: &str) -> Result<Pitch, ParseError> {
    let error = || ParseError::new(name, ParseErrorKind::Helmholtz);

    let mut chars = name.chars();
    let first = chars.next().ok_or_else(error)?;
    let letter = Letter::from_char(first).ok_or_else(error)?;
    let rest = chars.as_str();

    let (accidental, accidental_len) = super::leading_accidentals(rest);
    let (up, down) = super::octave_marks(&rest[accidental_len..]).ok_or_else(error)?;

    let octave_index = if first.is_ascii_uppercase() {
        3_i32.checked_sub(down)
    } else {
        4_i32.checked_add(up)
    };

    octave_index
        .and_then(|index| super::pitch_from_parts(letter, accidental, index))
        .ok_or_else(error)
}

/// ```
/// # use meantonal::notation::helmholtz;
/// # use meantonal::pitch::Pitch;
/// assert_eq!(helmholtz::from_pitch(Pitch::new(25, 10)), "c'");
/// assert_eq!(helmholtz::from_pitch(Pitch::new(15, 6)), "C");
/// assert_eq!(helmholtz::from_pitch(Pitch::new(0, 0)), "C,,,");
/// ```
pub fn from_pitch(pitch: Pitch) -> String {
    let octave = pitch.octave();
    let accidental = super::accidental_symbols(pitch.accidental());
    let letter = pitch.letter().as_char();

    if octave > 2 {
        format!(
            "{}{}{}",
            letter.to_ascii_lowercase(),
            accidental,
            "'".repeat((octave - 3) as usize)
        )
    } else {
        format!("{}{}{}", letter, accidental, ",".repeat((2 - octave) as usize))
    }
}
