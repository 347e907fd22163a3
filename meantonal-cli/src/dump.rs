use clap::Args;
use meantonal::pitch::Pitch;

use crate::{
    dto::{MeantonalDto, NoteDto, NotesDto},
    App, CliResult, ContextOptions,
};

#[derive(Debug, Args)]
pub(crate) struct DumpOptions {
    /// Notes to dump (SPN)
    #[arg(required = true)]
    notes: Vec<Pitch>,

    #[command(flatten)]
    context: ContextOptions,
}

impl DumpOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let context = self.context.to_context()?;

        let dto = MeantonalDto::Notes(NotesDto {
            key: context.to_string(),
            items: self
                .notes
                .iter()
                .map(|&pitch| NoteDto::new(pitch, &context))
                .collect(),
        });

        app.write(dto.to_yaml()?)?;
        Ok(())
    }
}
