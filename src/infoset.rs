use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::history::line::Line;

/// an information set: everything the hero can distinguish at a decision
/// point. cards render in canonical sorted order and the line is already
/// abstracted, so any two situations that abstract identically and show
/// identical cards collapse onto the same key. raw history length never
/// leaks into the key; that collapse is the entire point of abstraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Infoset {
    hole: Hole,
    board: Board,
    line: Line,
}

impl Infoset {
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl From<(Hole, Board, Line)> for Infoset {
    fn from((hole, board, line): (Hole, Board, Line)) -> Self {
        Self { hole, board, line }
    }
}

impl std::fmt::Display for Infoset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}|{}|{}", self.hole, self.board, self.line)
    }
}
