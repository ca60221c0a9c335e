use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::TimeControl;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GameLength {
    #[default]
    Bullet,
    Rapid,
    Long,
}

impl GameLength {
    pub fn time_control(self) -> TimeControl {
        let minutes = match self {
            GameLength::Bullet => 5,
            GameLength::Rapid => 25,
            GameLength::Long => 60,
        };
        TimeControl { starting_time: Duration::from_secs(minutes * 60) }
    }
}

// Process-wide settings. Loaded once by the front-end and passed down explicitly.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game_length: GameLength,
}

impl Settings {
    pub fn time_control(&self) -> TimeControl { self.game_length.time_control() }
}
