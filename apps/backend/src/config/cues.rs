use serde::Serialize;

use crate::config::non_empty;
use crate::cues::Cue;

pub const DEFAULT_INTRO_URL: &str = "https://www.myinstants.com/media/sounds/whos-that-pokemon.mp3";
pub const DEFAULT_CORRECT_URL: &str =
    "https://www.myinstants.com/media/sounds/correct-answer-sound-effect.mp3";
pub const DEFAULT_WRONG_URL: &str =
    "https://www.myinstants.com/media/sounds/wrong-answer-sound-effect.mp3";

/// Remote audio clip for each cue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueUrls {
    pub intro: String,
    pub correct: String,
    pub wrong: String,
}

impl Default for CueUrls {
    fn default() -> Self {
        Self {
            intro: DEFAULT_INTRO_URL.to_string(),
            correct: DEFAULT_CORRECT_URL.to_string(),
            wrong: DEFAULT_WRONG_URL.to_string(),
        }
    }
}

impl CueUrls {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            intro: non_empty(lookup, "CUE_INTRO_URL").unwrap_or(defaults.intro),
            correct: non_empty(lookup, "CUE_CORRECT_URL").unwrap_or(defaults.correct),
            wrong: non_empty(lookup, "CUE_WRONG_URL").unwrap_or(defaults.wrong),
        }
    }

    pub fn url_for(&self, cue: Cue) -> &str {
        match cue {
            Cue::Intro => &self.intro,
            Cue::Correct => &self.correct,
            Cue::Wrong => &self.wrong,
        }
    }
}
