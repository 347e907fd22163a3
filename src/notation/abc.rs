//! ABC note names, e.g. `C` (middle C), `^f` or `_B,`.
//!
//! Accidentals precede the letter: `^` is sharp, `_` is flat and `=` is natural.
//! Uppercase letters denote the octave starting at middle C, lowercase letters the octave above.
//! Commas lower and apostrophes raise by an octave, marks of the other kind are ignored.

use super::{ParseError, ParseErrorKind};
use crate::{letter::Letter, pitch::Pitch};

/// ```
/// # use meantonal::notation::abc;
/// # use meantonal::pitch::Pitch;
/// assert_eq!(abc::to_pitch("C").unwrap(), Pitch::new(25, 10));
/// assert_eq!(abc::to_pitch("c").unwrap(), Pitch::new(30, 12));
/// assert_eq!(abc::to_pitch("c'").unwrap(), Pitch::new(35, 14));
/// assert_eq!(abc::to_pitch("C,").unwrap(), Pitch::new(20, 8));
/// assert_eq!(abc::to_pitch("^f").unwrap(), Pitch::new(33, 12));
/// assert_eq!(abc::to_pitch("=F").unwrap(), Pitch::new(27, 11));
/// ```
pub fn to_pitch(name: &str) -> Result<Pitch, ParseError> {
    let error = || ParseError::new(name, ParseErrorKind::Abc);

    let letter_start = name
        .find(|c: char| !matches!(c, '^' | '_' | '='))
        .ok_or_else(error)?;
    let (accidentals, rest) = name.split_at(letter_start);

    let accidental: i32 = accidentals
        .chars()
        .map(|symbol| match symbol {
            '^' => 1,
            '_' => -1,
            _ => 0,
        })
        .sum();

    let mut chars = rest.chars();
    let first = chars.next().ok_or_else(error)?;
    let letter = Letter::from_char(first).ok_or_else(error)?;
    let (up, down) = super::octave_marks(chars.as_str()).ok_or_else(error)?;

    let octave_index = if first.is_ascii_uppercase() {
        5_i32.checked_sub(down)
    } else {
        6_i32.checked_add(up)
    };

    octave_index
        .and_then(|index| super::pitch_from_parts(letter, accidental, index))
        .ok_or_else(error)
}

/// ```
/// # use meantonal::notation::abc;
/// # use meantonal::pitch::Pitch;
/// assert_eq!(abc::from_pitch(Pitch::new(25, 10)), "C");
/// assert_eq!(abc::from_pitch(Pitch::new(33, 12)), "^f");
/// assert_eq!(abc::from_pitch(Pitch::new(0, 0)), "C,,,,,");
/// ```
pub fn from_pitch(pitch: Pitch) -> String {
    let accidental = pitch.accidental();
    let accidental_symbol = if accidental < 0 { "_" } else { "^" };
    let accidentals = accidental_symbol.repeat(accidental.unsigned_abs() as usize);

    let octave = pitch.octave();
    let letter = pitch.letter().as_char();

    if octave > 4 {
        format!(
            "{}{}{}",
            accidentals,
            letter.to_ascii_lowercase(),
            "'".repeat((octave - 5) as usize)
        )
    } else {
        format!("{}{}{}", accidentals, letter, ",".repeat((4 - octave) as usize))
    }
}
