use clap::Args;
use meantonal::{interval::Interval, pitch::Pitch};

use crate::{App, CliResult};

#[derive(Debug, Args)]
pub(crate) struct IntervalOptions {
    /// Note the interval starts at (SPN), e.g. C4
    from: Pitch,

    /// Note the interval ends at (SPN), e.g. E4
    to: Pitch,
}

impl IntervalOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let interval = Interval::between(self.from, self.to);

        app.writeln(format_args!("Name: {interval}"))?;
        app.writeln(format_args!("Vector: ({}, {})", interval.w, interval.h))?;
        app.writeln(format_args!("Quality: {}", interval.quality()))?;
        app.writeln(format_args!("Stepspan: {}", interval.stepspan()))?;
        app.writeln(format_args!("Chroma: {}", interval.chroma()))?;
        app.writeln(format_args!("Semitones: {}", interval.semitones()))?;
        app.writeln(format_args!("Simple: {}", interval.simple()))?;
        app.writeln(format_args!("Diatonic: {}", interval.is_diatonic()))?;

        Ok(())
    }
}
