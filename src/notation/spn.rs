//! Scientific Pitch Notation, e.g. `C4` (middle C), `F#3` or `Bbb-1`.
//!
//! Besides `#` and `b`, the accidentals `x` (double sharp) and `w` (double flat) are understood.

use super::{ParseError, ParseErrorKind};
use crate::{letter::Letter, pitch::Pitch};

/// ```
/// # use meantonal::notation::spn;
/// # use meantonal::pitch::Pitch;
/// assert_eq!(spn::to_pitch("C4").unwrap(), Pitch::new(25, 10));
/// assert_eq!(spn::to_pitch("C-1").unwrap(), Pitch::new(0, 0));
/// assert_eq!(spn::to_pitch("F##4").unwrap(), Pitch::new(29, 9));
/// assert_eq!(spn::to_pitch("Fx4").unwrap(), Pitch::new(29, 9));
/// assert_eq!(spn::to_pitch("Eb4").unwrap(), Pitch::new(26, 11));
/// assert_eq!(spn::to_pitch("Ew4").unwrap(), Pitch::new(25, 12));
/// ```
pub fn to_pitch(spn: &str) -> Result<Pitch, ParseError> {
    let error = || ParseError::new(spn, ParseErrorKind::Spn);

    let mut chars = spn.chars();
    let letter = chars.next().and_then(Letter::from_char).ok_or_else(error)?;
    let rest = chars.as_str();

    let (accidental, accidental_len) = super::leading_accidentals(rest);
    let octave = &rest[accidental_len..];

    let digits = octave.strip_prefix('-').unwrap_or(octave);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(error());
    }
    let octave = octave.parse::<i32>().map_err(|_| error())?;

    let octave_index = octave.checked_add(1).ok_or_else(error)?;

    super::pitch_from_parts(letter, accidental, octave_index).ok_or_else(error)
}

/// ```
/// # use meantonal::notation::spn;
/// # use meantonal::pitch::Pitch;
/// assert_eq!(spn::from_pitch(Pitch::new(25, 10)), "C4");
/// assert_eq!(spn::from_pitch(Pitch::new(2, -2)), "Cx-1");
/// assert_eq!(spn::from_pitch(Pitch::new(2, -1)), "D#-1");
/// ```
pub fn from_pitch(pitch: Pitch) -> String {
    format!(
        "{}{}{}",
        pitch.letter(),
        super::accidental_symbols(pitch.accidental()),
        pitch.octave()
    )
}
