use meantonal::{
    interval::Interval,
    map,
    notation::{abc, helmholtz, lilypond, spn},
    pitch::Pitch,
    tonality::{Mode, TonalContext},
    tuning::TuningMap,
};
use pretty_assertions::assert_eq;

fn pitch(spn: &str) -> Pitch {
    spn.parse().unwrap()
}

fn interval(name: &str) -> Interval {
    name.parse().unwrap()
}

fn sample_pitches() -> Vec<Pitch> {
    (-3..=3)
        .flat_map(|octave| (-10..=10).map(move |chroma| Pitch::from_chroma(chroma, octave)))
        .collect()
}

#[test]
fn intervals_between_pitches_are_antisymmetric() {
    let pitches = sample_pitches();

    for &p in pitches.iter().step_by(5) {
        for &q in pitches.iter().step_by(7) {
            assert_eq!(Interval::between(p, q).negative(), Interval::between(q, p));
            assert_eq!(p.transpose_real(p.interval_to(q)), q);
        }
    }
}

#[test]
fn transposition_can_be_undone() {
    let intervals: Vec<_> = Interval::diatonic_range(interval("-P15"), interval("P15")).collect();

    for p in sample_pitches() {
        for &m in &intervals {
            assert_eq!(p.transpose_real(m).transpose_real(m.negative()), p);
        }
    }
}

#[test]
fn enharmonic_equivalence_is_an_equivalence_relation() {
    let pitches = sample_pitches();

    for edo in [12, 19, 31, 53] {
        for &p in &pitches {
            assert!(p.is_enharmonic_in(p, edo));
            for &q in pitches.iter().step_by(3) {
                assert_eq!(p.is_enharmonic_in(q, edo), q.is_enharmonic_in(p, edo));
                for &r in pitches.iter().step_by(11) {
                    if p.is_enharmonic_in(q, edo) && q.is_enharmonic_in(r, edo) {
                        assert!(p.is_enharmonic_in(r, edo));
                    }
                }
            }
        }
    }
}

#[test]
fn enharmonic_pitches_differ_by_whole_octaves_of_edo_steps() {
    let pitches = sample_pitches();

    for edo in [12, 19, 31] {
        let tuning = TuningMap::from_edo(edo);
        let edo = i32::from(edo);

        for &p in &pitches {
            for &q in pitches.iter().step_by(2) {
                let steps_apart = tuning.to_midi(q).unwrap() - tuning.to_midi(p).unwrap();
                assert_eq!(
                    p.is_enharmonic_in(q, edo),
                    steps_apart.rem_euclid(edo) == 0,
                    "{p} {q} {edo}"
                );
            }
        }
    }
}

#[test]
fn reference_coordinates() {
    let c4 = pitch("C4");
    assert_eq!((c4.w, c4.h), (25, 10));
    assert_eq!(c4.midi(), Ok(60));
    assert_eq!(c4.chroma(), 0);

    let c_minus_1 = pitch("C-1");
    assert_eq!((c_minus_1.w, c_minus_1.h), (0, 0));
    assert_eq!(c_minus_1.midi(), Ok(0));

    assert_eq!(interval("P5"), Interval::new(3, 1));
    assert_eq!(interval("M3").chroma(), 4);
    assert_eq!(interval("m3").chroma(), -3);
    assert_eq!(interval("M17").simple(), interval("M3"));
}

#[test]
fn spn_round_trip() {
    for name in ["C4", "Cx-1", "Gbbbb7"] {
        assert_eq!(spn::from_pitch(spn::to_pitch(name).unwrap()), name);
    }
}

#[test]
fn all_notations_agree() {
    let test_cases = [
        ("C4", "c'", "c'", "C"),
        ("C3", "c", "c", "C,"),
        ("F#5", "fis''", "f#''", "^f"),
        ("Bb2", "bes,", "Bb", "_B,,"),
        ("Ebb6", "eeses'''", "ebb'''", "__e'"),
    ];

    for (spn_name, lilypond_name, helmholtz_name, abc_name) in test_cases {
        let expected = pitch(spn_name);
        assert_eq!(lilypond::to_pitch(lilypond_name).unwrap(), expected);
        assert_eq!(helmholtz::to_pitch(helmholtz_name).unwrap(), expected);
        assert_eq!(abc::to_pitch(abc_name).unwrap(), expected);

        assert_eq!(lilypond::from_pitch(expected), lilypond_name);
        assert_eq!(helmholtz::from_pitch(expected), helmholtz_name);
        assert_eq!(abc::from_pitch(expected), abc_name);
    }
}

#[test]
fn notations_round_trip_over_the_lattice() {
    for p in sample_pitches() {
        assert_eq!(spn::to_pitch(&spn::from_pitch(p)).unwrap(), p);
        assert_eq!(lilypond::to_pitch(&lilypond::from_pitch(p)).unwrap(), p);
        assert_eq!(helmholtz::to_pitch(&helmholtz::from_pitch(p)).unwrap(), p);
        assert_eq!(abc::to_pitch(&abc::from_pitch(p)).unwrap(), p);
    }
}

#[test]
fn interval_names_round_trip() {
    for m in Interval::diatonic_range(interval("-P22"), interval("P22")) {
        assert_eq!(interval(&m.name()), m);
    }
    for w in -8..=8 {
        for h in -8..=8 {
            let m = Interval::new(w, h);
            assert_eq!(interval(&m.name()), m, "{m:?}");
        }
    }
}

#[test]
fn eb_phrygian_from_strings() {
    let context = TonalContext::from_strings("Eb", "Phrygian").unwrap();

    assert_eq!(context.mode(), Mode::Phrygian);
    assert_eq!(context.mode().number(), 5);
    assert_eq!(context.tonic().letter.as_char(), 'E');
    assert_eq!(context.tonic().accidental, -1);
    assert_eq!(context.tonic().chroma, -3);
}

#[test]
fn c_major_ranges() {
    let c_major = TonalContext::new(0, Mode::Ionian);

    let diatonic: Vec<_> = Pitch::diatonic_range(pitch("C4"), pitch("C5"), &c_major)
        .map(|p| p.to_string())
        .collect();
    assert_eq!(diatonic, ["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"]);

    let chromatic: Vec<_> = Pitch::chromatic_range(pitch("C4"), pitch("E5"), &c_major)
        .map(|p| p.to_string())
        .collect();
    for expected in ["C#4", "Db4"] {
        assert!(chromatic.iter().any(|name| name == expected));
    }
    for unexpected in ["E#4", "Fb4", "B3", "F5"] {
        assert!(!chromatic.iter().any(|name| name == unexpected));
    }
}

#[test]
fn chromatic_ranges_in_other_keys() {
    let d_major = TonalContext::from_strings("D", "major").unwrap();
    let chromatic: Vec<_> = Pitch::chromatic_range(pitch("D4"), pitch("A4"), &d_major)
        .map(|p| p.to_string())
        .collect();

    assert_eq!(
        chromatic,
        ["D4", "Eb4", "D#4", "E4", "F4", "E#4", "F#4", "G4", "Ab4", "G#4", "A4"]
    );
}

#[test]
fn snapping_in_c_major() {
    let c_major = TonalContext::new(0, Mode::Ionian);

    assert_eq!(pitch("Eb4").snap_to(&c_major), pitch("E4"));
    assert_eq!(pitch("E#4").snap_to(&c_major), pitch("E4"));
    assert_eq!(pitch("Bb4").snap_to(&c_major), pitch("B4"));

    for p in Pitch::diatonic_range(pitch("C2"), pitch("C6"), &c_major) {
        assert_eq!(p.snap_to(&c_major), p);
    }
}

#[test]
fn maps_agree_with_tunings() {
    let edo_maps = [(12, map::EDO12), (19, map::EDO19), (31, map::EDO31), (53, map::EDO53)];

    for (num_steps, edo_map) in edo_maps {
        let tuning = TuningMap::from_edo(num_steps);
        let cents_per_step = 1200.0 / f64::from(num_steps);

        for p in sample_pitches() {
            assert_eq!(tuning.to_midi(p), Some(edo_map.map(p)));

            let steps = f64::from(edo_map.map(p) - edo_map.map(tuning.reference()));
            let cents = tuning.to_cents(tuning.reference().interval_to(p));
            assert!((cents - cents_per_step * steps).abs() < 1e-6);
        }
    }
}
