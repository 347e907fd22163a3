use std::io::Read;

use meantonal::{
    notation::{abc, helmholtz, lilypond},
    pitch::Pitch,
    tonality::TonalContext,
};
use serde::{Deserialize, Serialize};

use crate::{error::ResultExt, CliResult};

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum MeantonalDto {
    Notes(NotesDto),
}

impl MeantonalDto {
    pub fn read(input: impl Read) -> CliResult<MeantonalDto> {
        serde_yaml::from_reader(input).or_explain("Could not parse notes")
    }

    pub fn to_yaml(&self) -> CliResult<String> {
        serde_yaml::to_string(self).or_explain("Could not write notes")
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NotesDto {
    pub key: String,
    pub items: Vec<NoteDto>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NoteDto {
    pub spn: String,
    pub w: i32,
    pub h: i32,
    pub chroma: i32,
    pub octave: i32,
    pub pc7: i32,
    pub pc12: i32,
    pub midi_number: Option<i32>,
    pub degree: i32,
    pub alteration: i32,
    pub lilypond: String,
    pub helmholtz: String,
    pub abc: String,
}

impl NoteDto {
    pub fn new(pitch: Pitch, context: &TonalContext) -> Self {
        Self {
            spn: pitch.to_string(),
            w: pitch.w,
            h: pitch.h,
            chroma: pitch.chroma(),
            octave: pitch.octave(),
            pc7: pitch.pc7(),
            pc12: pitch.pc12(),
            midi_number: pitch.midi().ok(),
            degree: pitch.degree_in(context),
            alteration: pitch.alteration_in(context),
            lilypond: lilypond::from_pitch(pitch),
            helmholtz: helmholtz::from_pitch(pitch),
            abc: abc::from_pitch(pitch),
        }
    }

    pub fn pitch(&self) -> Pitch {
        Pitch::new(self.w, self.h)
    }
}
