use std::fmt;


#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}

// Why a turn was rejected. Game state is never changed by a rejected turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnError {
    InvalidNotation,
    AmbiguousNotation,
    CaptureNotationRequiresCapture,
    PieceMissing,
    WrongTurnOrder,
    IllegalMove,
    BadPromotion,
    GameOver,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            TurnError::InvalidNotation => "cannot parse move",
            TurnError::AmbiguousNotation => "move is ambiguous",
            TurnError::CaptureNotationRequiresCapture => "capture mark without a capture",
            TurnError::PieceMissing => "no piece to move",
            TurnError::WrongTurnOrder => "not this side's turn",
            TurnError::IllegalMove => "illegal move",
            TurnError::BadPromotion => "bad promotion",
            TurnError::GameOver => "game is over",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for TurnError {}
