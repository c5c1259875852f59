//! Audio cues: four one-shot effects plus the looping background track.
//!
//! `play` never rewinds, so a rapid retrigger restarts nothing — a cue that
//! is still playing simply keeps going from wherever it is. Only the
//! background track is ever rewound, so replay always reopens the music from
//! the top.

use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

const CARROT_PULL_SRC: &str = "sound/carrot_pull.mp3";
const BUG_PULL_SRC: &str = "sound/bug_pull.mp3";
const ALERT_SRC: &str = "sound/alert.wav";
const WIN_SRC: &str = "sound/game_win.mp3";
const BACKGROUND_SRC: &str = "sound/bg.mp3";

/// One-shot effects. The bug cue doubles as the lose cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    CarrotPull,
    BugPull,
    Alert,
    Win,
}

pub struct AudioCueSet {
    carrot_pull: HtmlAudioElement,
    bug_pull: HtmlAudioElement,
    alert: HtmlAudioElement,
    win: HtmlAudioElement,
    background: HtmlAudioElement,
}

impl AudioCueSet {
    /// Builds every element once at mount; a failed constructor is a fatal
    /// mount error, playback failures later are not.
    pub fn load() -> Result<Self, JsValue> {
        let background = HtmlAudioElement::new_with_src(BACKGROUND_SRC)?;
        background.set_loop(true);
        Ok(Self {
            carrot_pull: HtmlAudioElement::new_with_src(CARROT_PULL_SRC)?,
            bug_pull: HtmlAudioElement::new_with_src(BUG_PULL_SRC)?,
            alert: HtmlAudioElement::new_with_src(ALERT_SRC)?,
            win: HtmlAudioElement::new_with_src(WIN_SRC)?,
            background,
        })
    }

    /// Starts a cue from its current position. The returned play promise is
    /// dropped; a blocked or failed playback never affects game state.
    pub fn play(&self, cue: Cue) {
        let el = match cue {
            Cue::CarrotPull => &self.carrot_pull,
            Cue::BugPull => &self.bug_pull,
            Cue::Alert => &self.alert,
            Cue::Win => &self.win,
        };
        el.play().ok();
    }

    pub fn start_background(&self) {
        self.background.play().ok();
    }

    /// Rewinds to the top and pauses, so the next round starts the music
    /// from the beginning.
    pub fn stop_background(&self) {
        self.background.set_current_time(0.0);
        self.background.pause().ok();
    }
}
