//! Exact pitch, interval and key arithmetic on a lattice of whole steps and diatonic half steps.
//!
//! Every [`pitch::Pitch`] and [`interval::Interval`] is a pair of integers `(w, h)` counting whole steps and diatonic half steps.
//! Spellings are preserved, i.e. C#4 and Db4 are different lattice points.
//! Frequencies only come into play when a [`tuning::TuningMap`] is applied.
//!
//! # Examples
//!
//! ```
//! # use assert_approx_eq::assert_approx_eq;
//! # use meantonal::interval::Interval;
//! # use meantonal::pitch::Pitch;
//! # use meantonal::tonality::TonalContext;
//! # use meantonal::tuning::TuningMap;
//! let c4: Pitch = "C4".parse().unwrap();
//! let major_third: Interval = "M3".parse().unwrap();
//!
//! let e4 = c4 + major_third;
//! assert_eq!(e4.to_string(), "E4");
//! assert_eq!((e4 - c4).to_string(), "M3");
//!
//! let e_flat_major = TonalContext::from_strings("Eb", "major").unwrap();
//! assert_eq!(e4.snap_to(&e_flat_major).to_string(), "Eb4");
//!
//! let meantone = TuningMap::from_edo(31);
//! assert_approx_eq!(meantone.to_cents(major_third), 387.097, 1e-3);
//! ```

pub mod chroma;
pub mod interval;
pub mod letter;
pub mod map;
pub mod notation;
pub mod pitch;
pub mod ratio;
pub mod tonality;
pub mod tuning;
