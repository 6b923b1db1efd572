use crate::Chips;

/// a concrete action returned to the external game harness.
/// blind posts arrive in the history as Bet tokens; the engine
/// itself only ever emits one of these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(Chips),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "f"),
            Action::Check => write!(f, "k"),
            Action::Call => write!(f, "c"),
            Action::Bet(amount) => write!(f, "b{}", amount),
        }
    }
}
