//! Absolute LilyPond note names, e.g. `c'` (middle C), `fis` or `bes,,`.
//!
//! Sharps are written as `is` and flats as `es` suffixes. Each `'` raises and each `,` lowers by an octave, starting from the octave below middle C.

use super::{ParseError, ParseErrorKind};
use crate::{letter::Letter, pitch::Pitch};

/// ```
/// # use meantonal::notation::lilypond;
/// # use meantonal::pitch::Pitch;
/// assert_eq!(lilypond::to_pitch("c'").unwrap(), Pitch::new(25, 10));
/// assert_eq!(lilypond::to_pitch("c,,,,").unwrap(), Pitch::new(0, 0));
/// assert_eq!(lilypond::to_pitch("fisis'").unwrap(), Pitch::new(29, 9));
/// assert_eq!(lilypond::to_pitch("ees'").unwrap(), Pitch::new(26, 11));
/// assert_eq!(lilypond::to_pitch("eeses'").unwrap(), Pitch::new(25, 12));
/// ```
pub fn to_pitch(name: &str) -> Result<Pitch, ParseError> {
    let error = || ParseError::new(name, ParseErrorKind::LilyPond);

    let mut chars = name.chars();
    let letter = chars
        .next()
        .filter(char::is_ascii_lowercase)
        .and_then(Letter::from_char)
        .ok_or_else(error)?;
    let mut rest = chars.as_str();

    let mut accidental = 0;
    loop {
        if let Some(remainder) = rest.strip_prefix("is") {
            accidental += 1;
            rest = remainder;
        } else if let Some(remainder) = rest.strip_prefix("es") {
            accidental -= 1;
            rest = remainder;
        } else {
            break;
        }
    }

    let (up, down) = super::octave_marks(rest).ok_or_else(error)?;

    let octave_index = up.checked_add(4).and_then(|index| index.checked_sub(down));

    octave_index
        .and_then(|index| super::pitch_from_parts(letter, accidental, index))
        .ok_or_else(error)
}

/// ```
/// # use meantonal::notation::lilypond;
/// # use meantonal::pitch::Pitch;
/// assert_eq!(lilypond::from_pitch(Pitch::new(25, 10)), "c'");
/// assert_eq!(lilypond::from_pitch(Pitch::new(20, 8)), "c");
/// assert_eq!(lilypond::from_pitch(Pitch::new(33, 12)), "fis''");
/// ```
pub fn from_pitch(pitch: Pitch) -> String {
    let accidental = pitch.accidental();
    let accidental_suffix = if accidental < 0 { "es" } else { "is" };

    let octave = pitch.octave() - 3;
    let octave_mark = if octave < 0 { "," } else { "'" };

    format!(
        "{}{}{}",
        pitch.letter().as_char().to_ascii_lowercase(),
        accidental_suffix.repeat(accidental.unsigned_abs() as usize),
        octave_mark.repeat(octave.unsigned_abs() as usize)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for name in ["c'", "aes", "gisis'''", "eeses,,,,", "b,", "fisisis"] {
            assert_eq!(from_pitch(to_pitch(name).unwrap()), name);
        }
    }

    #[test]
    fn mixed_marks_cancel_out() {
        assert_eq!(to_pitch("c',").unwrap(), to_pitch("c").unwrap());
        assert_eq!(to_pitch("cises").unwrap(), to_pitch("c").unwrap());
    }

    #[test]
    fn invalid_names() {
        for name in ["", "C'", "h", "cis4", "cs", "ceis", "c#", "c''x"] {
            assert_eq!(
                to_pitch(name),
                Err(ParseError::new(name, ParseErrorKind::LilyPond)),
                "{name}"
            );
        }
    }
}
