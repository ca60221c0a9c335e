use serde::{Deserialize, Serialize};


const COMPUTER_NAME: &str = "Computer";

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub surname: String,
    // Who picks the moves is up to the caller; the game only records it.
    pub is_computer: bool,
}

impl Player {
    pub fn human(name: &str, surname: &str) -> Self {
        Player {
            name: name.to_owned(),
            surname: surname.to_owned(),
            is_computer: false,
        }
    }

    pub fn computer(surname: &str) -> Self {
        Player {
            name: COMPUTER_NAME.to_owned(),
            surname: surname.to_owned(),
            is_computer: true,
        }
    }

    // PGN convention: "Surname, Name", or "?" if unknown.
    pub fn to_pgn(&self) -> String {
        match (self.surname.is_empty(), self.name.is_empty()) {
            (true, true) => "?".to_owned(),
            (false, true) => self.surname.clone(),
            (true, false) => self.name.clone(),
            (false, false) => format!("{}, {}", self.surname, self.name),
        }
    }

    pub fn from_pgn(s: &str) -> Self {
        let s = s.trim();
        if s == "?" || s.is_empty() {
            return Player::default();
        }
        match s.split_once(", ") {
            Some((surname, COMPUTER_NAME)) => Player::computer(surname),
            Some((surname, name)) => Player::human(name, surname),
            None => Player::human("", s),
        }
    }
}
