use std::fmt;
use std::time::Duration;

use enum_map::{EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::force::Force;


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TimeControl {
    // Must be a whole number of seconds.
    pub starting_time: Duration,
}

impl fmt::Display for TimeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.starting_time.as_secs();
        write!(f, "{}:{:02}", s / 60, s % 60)
    }
}

const MILLIS_PER_SEC: u128 = 1000;
const MILLIS_PER_DECI: u128 = MILLIS_PER_SEC / 10;

// Time since game start. The clock never reads the system time itself: the caller supplies
// instants, which keeps it deterministic under test.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct GameInstant {
    elapsed_since_start: Duration,
}

impl GameInstant {
    pub const fn game_start() -> Self { GameInstant { elapsed_since_start: Duration::ZERO } }
    pub fn from_duration(elapsed_since_start: Duration) -> Self {
        GameInstant { elapsed_since_start }
    }
    pub fn elapsed_since_start(self) -> Duration { self.elapsed_since_start }
    pub fn duration_since(self, earlier: GameInstant) -> Duration {
        self.elapsed_since_start.saturating_sub(earlier.elapsed_since_start)
    }
}


// Per-side countdown. Only the side to move loses time.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clock {
    control: TimeControl,
    turn_state: Option<(Force, GameInstant)>, // force, start time
    remaining_time: EnumMap<Force, Duration>,
}

impl Clock {
    pub fn new(control: TimeControl) -> Self {
        let remaining_time = enum_map! { _ => control.starting_time };
        Self { control, turn_state: None, remaining_time }
    }

    pub fn control(&self) -> &TimeControl { &self.control }
    pub fn is_active(&self) -> bool { self.turn_state.is_some() }
    pub fn active_force(&self) -> Option<Force> { self.turn_state.map(|st| st.0) }

    pub fn time_left(&self, force: Force, now: GameInstant) -> Duration {
        let mut ret = self.remaining_time[force];
        if let Some((current_force, current_start)) = self.turn_state {
            if force == current_force {
                ret = ret.saturating_sub(now.duration_since(current_start));
            }
        }
        ret
    }

    // The side whose time ran out, if any.
    pub fn flagged(&self, now: GameInstant) -> Option<Force> {
        let force = self.active_force()?;
        self.time_left(force, now).is_zero().then_some(force)
    }

    // Charges the running side and starts counting for `force`.
    pub fn new_turn(&mut self, force: Force, now: GameInstant) {
        self.stop(now);
        self.turn_state = Some((force, now));
    }

    pub fn stop(&mut self, now: GameInstant) {
        if let Some((prev_force, _)) = self.turn_state {
            self.remaining_time[prev_force] = self.time_left(prev_force, now);
        }
        self.turn_state = None;
    }
}

// "mm:ss" normally, "ss.d" in the last 20 seconds. Rounds up, so that "00.0" means the flag fell.
pub fn format_time_left(time: Duration) -> String {
    let millis = time.as_millis();
    let ds_ceil = millis.div_ceil(MILLIS_PER_DECI);
    if ds_ceil < 200 {
        format!("{:02}.{}", ds_ceil / 10, ds_ceil % 10)
    } else {
        let s_ceil = millis.div_ceil(MILLIS_PER_SEC);
        format!("{:02}:{:02}", s_ceil / 60, s_ceil % 60)
    }
}
