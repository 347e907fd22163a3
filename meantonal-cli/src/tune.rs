use clap::Args;
use meantonal::{
    pitch::Pitch,
    tuning::{TuningMap, C4_HZ},
};

use crate::{dto::MeantonalDto, App, CliResult};

#[derive(Debug, Args)]
pub(crate) struct TuneOptions {
    /// Notes to tune (SPN)
    notes: Vec<Pitch>,

    /// Divide the octave into the given number of equal steps
    #[arg(long = "edo", value_parser = clap::value_parser!(u16).range(1..), conflicts_with = "fifth")]
    edo: Option<u16>,

    /// Size of the perfect fifth in cents [default: 12-EDO]
    #[arg(long = "fifth")]
    fifth: Option<f64>,

    /// Note the reference frequency applies to (SPN)
    #[arg(long = "ref-note", default_value = "C4")]
    ref_note: Pitch,

    /// Reference frequency in Hz
    #[arg(long = "ref-hz", default_value_t = C4_HZ)]
    ref_hz: f64,
}

impl TuneOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let tuning = self.tuning();
        log::debug!("Using {tuning:?}");

        let notes = if self.notes.is_empty() {
            let MeantonalDto::Notes(notes) = MeantonalDto::read(app.read())?;
            notes.items.iter().map(|item| item.pitch()).collect()
        } else {
            self.notes.clone()
        };

        for note in notes {
            let cents = tuning.to_cents(tuning.reference().interval_to(note));
            let hz = tuning.to_hz(note);

            match tuning.to_midi(note) {
                Some(step) => app.writeln(format_args!(
                    "{note:<6} {cents:>10.3}c {hz:>10.3} Hz  step {step}"
                ))?,
                None => app.writeln(format_args!("{note:<6} {cents:>10.3}c {hz:>10.3} Hz"))?,
            }
        }

        Ok(())
    }

    fn tuning(&self) -> TuningMap {
        let tuning = match (self.edo, self.fifth) {
            (Some(edo), _) => TuningMap::from_edo(edo),
            (None, Some(fifth)) => TuningMap::new(fifth),
            (None, None) => TuningMap::default(),
        };
        tuning.with_reference(self.ref_note, self.ref_hz)
    }
}
