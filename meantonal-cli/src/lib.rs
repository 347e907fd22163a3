mod convert;
mod dto;
mod dump;
mod error;
mod interval;
mod range;
mod tune;

use std::{
    fmt::{self, Debug, Display},
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};
use convert::ConvertOptions;
use dump::DumpOptions;
use interval::IntervalOptions;
use meantonal::{notation::ParseError, tonality::TonalContext};
use range::RangeCommand;
use tune::TuneOptions;

#[derive(Debug, Parser)]
#[command(
    name = "meantonal",
    version,
    about = "Explore pitches, intervals, keys and meantone tunings"
)]
struct MainOptions {
    /// Write output to a file instead of stdout
    #[arg(long = "of")]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Debug, Subcommand)]
enum MainCommand {
    /// Translate a note name into another notation
    Convert(ConvertOptions),

    /// Analyze the interval between two notes
    Interval(IntervalOptions),

    /// List the notes of a key between two notes
    #[command(subcommand)]
    Range(RangeCommand),

    /// Print the cents and frequencies of notes in a meantone tuning.
    /// If no notes are given a YAML dump is read from stdin.
    Tune(TuneOptions),

    /// Display the lattice data of notes as YAML
    Dump(DumpOptions),
}

impl MainOptions {
    fn run(self) -> CliResult {
        let stdin = io::stdin();
        let input = Box::new(stdin.lock());

        let stdout = io::stdout();
        let output: Box<dyn Write> = match self.output_file {
            Some(output_file) => Box::new(File::create(output_file)?),
            None => Box::new(stdout.lock()),
        };

        let stderr = io::stderr();
        let error = Box::new(stderr.lock());

        let mut app = App {
            input,
            output,
            error,
        };

        self.command.run(&mut app)
    }
}

impl MainCommand {
    fn run(self, app: &mut App) -> CliResult {
        log::debug!("Running {self:?}");

        match self {
            MainCommand::Convert(options) => options.run(app),
            MainCommand::Interval(options) => options.run(app),
            MainCommand::Range(command) => command.run(app),
            MainCommand::Tune(options) => options.run(app),
            MainCommand::Dump(options) => options.run(app),
        }
    }
}

pub fn run_in_shell_env(args: impl IntoIterator<Item = String>) -> CliResult {
    let options = match MainOptions::try_parse_from(args) {
        Err(err) => {
            return if err.use_stderr() {
                Err(CliError::CommandError(err.to_string()))
            } else {
                err.print()?;
                Ok(())
            };
        }
        Ok(options) => options,
    };

    options.run()
}

#[derive(Debug, Args)]
struct ContextOptions {
    /// Tonic of the key, e.g. C, F# or Bb
    #[arg(long = "tonic", default_value = "C")]
    tonic: String,

    /// Mode of the key, e.g. major, minor or dorian
    #[arg(long = "mode", default_value = "major")]
    mode: String,
}

impl ContextOptions {
    fn to_context(&self) -> CliResult<TonalContext> {
        let context = TonalContext::from_strings(&self.tonic, &self.mode)?;
        log::debug!("Using key of {context}");
        Ok(context)
    }
}

struct App<'a> {
    input: Box<dyn 'a + Read>,
    output: Box<dyn 'a + Write>,
    error: Box<dyn 'a + Write>,
}

impl App<'_> {
    pub fn write(&mut self, message: impl Display) -> io::Result<()> {
        write!(&mut self.output, "{message}")
    }

    pub fn writeln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.output, "{message}")
    }

    pub fn errln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.error, "{message}")
    }

    pub fn read(&mut self) -> &mut dyn Read {
        &mut self.input
    }
}

pub type CliResult<T = ()> = Result<T, CliError>;

pub enum CliError {
    IoError(io::Error),
    CommandError(String),
}

impl Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError(err) => write!(f, "IO error / {err}"),
            CliError::CommandError(err) => write!(f, "The command failed / {err}"),
        }
    }
}

impl From<String> for CliError {
    fn from(v: String) -> Self {
        CliError::CommandError(v)
    }
}

impl From<ParseError> for CliError {
    fn from(v: ParseError) -> Self {
        CliError::CommandError(v.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(v: io::Error) -> Self {
        CliError::IoError(v)
    }
}
