//! Display strings the session needs, behind an injectable provider

/// Coarse board zone used by positional hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Upper,
    Middle,
    Lower,
    Left,
    Center,
    Right,
}

/// Status texts attached to session outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    /// The automated side is to move
    AutomatedTurn,
    /// The trainee is to move
    HumanTurn,
    PatternComplete,
    Correct,
    CorrectAutomatedNext,
    Wrong { remaining: u32, hint: &'a str },
    Reveal { max_errors: u32, coord: &'a str },
    Unplaceable,
    AutomatedMoved,
    AutomatedBlocked,
}

/// Source of user-visible text.
///
/// The session composes hints and statuses only through this trait, so
/// translations live outside the core.
pub trait LabelProvider: std::fmt::Debug {
    fn region(&self, region: Region) -> String;

    /// Compose a row zone and a column zone into one hint
    fn area(&self, row: &str, col: &str) -> String {
        format!("{row} {col}")
    }

    fn message(&self, message: Message<'_>) -> String;
}

/// Built-in English text
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl LabelProvider for EnglishLabels {
    fn region(&self, region: Region) -> String {
        match region {
            Region::Upper => "upper",
            Region::Middle => "middle",
            Region::Lower => "lower",
            Region::Left => "left",
            Region::Center => "center",
            Region::Right => "right",
        }
        .to_string()
    }

    fn message(&self, message: Message<'_>) -> String {
        match message {
            Message::AutomatedTurn => "Computer's turn, please wait...".to_string(),
            Message::HumanTurn => "It's your turn!".to_string(),
            Message::PatternComplete => "Pattern completed!".to_string(),
            Message::Correct => "Correct move!".to_string(),
            Message::CorrectAutomatedNext => "Correct move! Computer thinking...".to_string(),
            Message::Wrong { remaining, hint } => {
                format!("Wrong move! {remaining} chances left. Hint: {hint} area")
            }
            Message::Reveal { max_errors, coord } => {
                format!("Wrong {max_errors} times, correct move is: {coord}")
            }
            Message::Unplaceable => "That point is taken or off the board, choose another one!".to_string(),
            Message::AutomatedMoved => "Computer moved, your turn!".to_string(),
            Message::AutomatedBlocked => "Computer move failed!".to_string(),
        }
    }
}
