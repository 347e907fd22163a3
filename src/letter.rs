//! The seven diatonic letters and their base coordinates in the lattice.

use std::fmt::{self, Display, Formatter};

/// Base `(w, h)` coordinates of the natural notes C, D, E, F, G, A and B within octave -1.
///
/// The sum `w + h` of each entry equals the letter index, so C-D-E are reached by whole steps and F sits one half step above E.
pub const LETTER_COORDS: [(i32, i32); 7] = [(0, 0), (1, 0), (2, 0), (2, 1), (3, 1), (4, 1), (5, 1)];

/// A letter name without any accidentals.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

const LETTERS: [Letter; 7] = [
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::A,
    Letter::B,
];

impl Letter {
    /// Returns the [`Letter`] with the given 7-tone pitch class, wrapping around for values outside of `0..7`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use meantonal::letter::Letter;
    /// assert_eq!(Letter::from_index(0), Letter::C);
    /// assert_eq!(Letter::from_index(6), Letter::B);
    /// assert_eq!(Letter::from_index(7), Letter::C);
    /// assert_eq!(Letter::from_index(-1), Letter::B);
    /// ```
    pub fn from_index(index: i32) -> Self {
        LETTERS[index.rem_euclid(7) as usize]
    }

    /// Parses a single letter, ignoring its case.
    ///
    /// ```
    /// # use meantonal::letter::Letter;
    /// assert_eq!(Letter::from_char('f'), Some(Letter::F));
    /// assert_eq!(Letter::from_char('G'), Some(Letter::G));
    /// assert_eq!(Letter::from_char('H'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        "CDEFGAB"
            .find(c.to_ascii_uppercase())
            .map(|index| LETTERS[index])
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// The natural note of this letter in octave -1, given as `(w, h)`.
    pub fn coords(self) -> (i32, i32) {
        LETTER_COORDS[self as usize]
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
