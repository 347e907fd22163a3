use clap::{Args, Subcommand};
use meantonal::pitch::Pitch;

use crate::{convert::Notation, App, CliResult, ContextOptions};

#[derive(Debug, Subcommand)]
pub(crate) enum RangeCommand {
    /// Notes of the key
    Diatonic(RangeOptions),

    /// Notes of the key together with their chromatic neighbors
    Chromatic(RangeOptions),
}

#[derive(Debug, Args)]
pub(crate) struct RangeOptions {
    /// Lowest note of the range (SPN)
    from: Pitch,

    /// Highest note of the range (SPN)
    to: Pitch,

    #[command(flatten)]
    context: ContextOptions,

    /// Notation of the printed notes
    #[arg(long = "notation", value_enum, default_value_t = Notation::Spn)]
    notation: Notation,
}

impl RangeCommand {
    pub fn run(&self, app: &mut App) -> CliResult {
        let (options, chromatic) = match self {
            RangeCommand::Diatonic(options) => (options, false),
            RangeCommand::Chromatic(options) => (options, true),
        };

        if options.from.steps_to(options.to) < 0 {
            app.errln(format_args!(
                "{} lies below {}, nothing to list",
                options.to, options.from
            ))?;
            return Ok(());
        }

        let context = options.context.to_context()?;
        let pitches: Vec<_> = if chromatic {
            Pitch::chromatic_range(options.from, options.to, &context).collect()
        } else {
            Pitch::diatonic_range(options.from, options.to, &context).collect()
        };
        log::debug!("Listing {} notes", pitches.len());

        for pitch in pitches {
            app.writeln(options.notation.render(pitch))?;
        }

        Ok(())
    }
}
