use clap::{Args, ValueEnum};
use meantonal::{
    notation::{abc, helmholtz, lilypond, spn, ParseError},
    pitch::Pitch,
};

use crate::{App, CliResult};

#[derive(Debug, Args)]
pub(crate) struct ConvertOptions {
    /// Note name to convert
    note: String,

    /// Notation of the given note name
    #[arg(long = "from", value_enum, default_value_t = Notation::Spn)]
    from: Notation,

    /// Notation to convert to
    #[arg(long = "to", value_enum)]
    to: Notation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum Notation {
    /// Scientific Pitch Notation, e.g. C#4
    Spn,
    /// Absolute LilyPond, e.g. cis'
    #[value(name = "lily")]
    LilyPond,
    /// Helmholtz, e.g. c#'
    Helmholtz,
    /// ABC, e.g. ^C
    Abc,
}

impl Notation {
    pub fn parse(self, name: &str) -> Result<Pitch, ParseError> {
        match self {
            Notation::Spn => spn::to_pitch(name),
            Notation::LilyPond => lilypond::to_pitch(name),
            Notation::Helmholtz => helmholtz::to_pitch(name),
            Notation::Abc => abc::to_pitch(name),
        }
    }

    pub fn render(self, pitch: Pitch) -> String {
        match self {
            Notation::Spn => spn::from_pitch(pitch),
            Notation::LilyPond => lilypond::from_pitch(pitch),
            Notation::Helmholtz => helmholtz::from_pitch(pitch),
            Notation::Abc => abc::from_pitch(pitch),
        }
    }
}

impl ConvertOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let pitch = self.from.parse(&self.note)?;
        app.writeln(self.to.render(pitch))?;
        Ok(())
    }
}
