//! Letter and accidental lookup by chroma.
//!
//! The chroma of a pitch is its signed distance from C measured in perfect fifths, e.g. G has chroma 1 and Bb has chroma -2.
//! The chroma of an interval is measured from the unison in the same way.

use crate::letter::Letter;

/// Returns the letter of the note name with the given chroma.
///
/// # Examples
///
/// ```
/// # use meantonal::chroma;
/// # use meantonal::letter::Letter;
/// assert_eq!(chroma::to_letter(0), Letter::C);
/// assert_eq!(chroma::to_letter(1), Letter::G);
/// assert_eq!(chroma::to_letter(6), Letter::F); // F#
/// assert_eq!(chroma::to_letter(-3), Letter::E); // Eb
/// ```
pub fn to_letter(chroma: i32) -> Letter {
    Letter::from_index(chroma * 4)
}

/// Returns the accidental of the note name with the given chroma.
///
/// 0 is natural, +1 / -1 is sharp / flat, +2 / -2 is double sharp / double flat and so on.
///
/// # Examples
///
/// ```
/// # use meantonal::chroma;
/// assert_eq!(chroma::to_accidental(5), 0); // B
/// assert_eq!(chroma::to_accidental(6), 1); // F#
/// assert_eq!(chroma::to_accidental(-1), 0); // F
/// assert_eq!(chroma::to_accidental(-2), -1); // Bb
/// assert_eq!(chroma::to_accidental(-9), -2); // Ebb
/// ```
pub fn to_accidental(chroma: i32) -> i32 {
    (chroma + 1).div_euclid(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_of_fifths() {
        let names: Vec<_> = (-8..=8)
            .map(|chroma| {
                let accidental = to_accidental(chroma);
                let sign = if accidental < 0 { "b" } else { "#" };
                format!(
                    "{}{}",
                    to_letter(chroma),
                    sign.repeat(accidental.unsigned_abs() as usize)
                )
            })
            .collect();

        assert_eq!(
            names.join(" "),
            "Fb Cb Gb Db Ab Eb Bb F C G D A E B F# C# G#"
        );
    }
}
