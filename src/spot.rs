use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;
use crate::cards::street::Street;
use crate::history::line::Line;
use crate::history::postflop;
use crate::history::preflop;
use crate::history::token::Token;
use crate::infoset::Infoset;
use crate::strategy::state::StateKey;
use crate::Chips;
use crate::Probability;

/// one decision point as delivered by the external game harness:
/// the raw action history plus everything visible and legal right now.
#[derive(Debug, Clone)]
pub struct Spot {
    pub line: Line,
    pub hole: Hole,
    pub board: Board,
    pub highest_bet: Chips,
    pub stage_pot: Chips,
    pub total_pot: Chips,
    pub stack: Chips,
    pub blind: Chips,
    pub dealer: bool,
    pub can_check: bool,
    pub legal: Vec<Token>,
    pub bounds: (Chips, Chips),
    pub bounty: Option<Rank>,
}

impl Spot {
    pub fn street(&self) -> Street {
        self.board.street()
    }
    /// bounded abstraction of the raw line, routed by street
    pub fn abstracted(&self) -> Line {
        match self.street() {
            Street::Pref => preflop::abstracted(&self.line, self.blind),
            _ => postflop::abstracted(&self.line, self.blind),
        }
    }
    /// blueprint lookup key for this decision
    pub fn infoset(&self) -> Infoset {
        Infoset::from((self.hole, self.board.clone(), self.abstracted()))
    }
    /// online-table key for this decision
    pub fn state(&self) -> StateKey {
        StateKey::from((self.hole, self.board.clone(), self.bounty))
    }
    /// equity we need for a call to break even
    pub fn pot_odds(&self) -> Probability {
        self.total_pot as Probability / (self.total_pot + self.blind) as Probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot() -> Spot {
        Spot {
            line: Line::from(vec![Token::Bet(1), Token::Bet(2)]),
            hole: Hole::try_from("AhKs").unwrap(),
            board: Board::empty(),
            highest_bet: 2,
            stage_pot: 3,
            total_pot: 3,
            stack: 100,
            blind: 2,
            dealer: true,
            can_check: false,
            legal: vec![Token::Fold, Token::Call, Token::BetMin],
            bounds: (4, 100),
            bounty: None,
        }
    }

    #[test]
    fn routes_by_street() {
        let preflop = spot();
        assert_eq!(preflop.street(), Street::Pref);
        assert_eq!(preflop.abstracted().tokens(), preflop.line.tokens());
        let mut postflop = spot();
        postflop.board = Board::try_from("2c7d5h").unwrap();
        postflop.line.push(Token::Call);
        postflop.line.push(Token::Break);
        assert_eq!(postflop.street(), Street::Flop);
        assert_eq!(
            postflop.abstracted().tokens(),
            &[
                Token::Bet(1),
                Token::Bet(2),
                Token::Break,
                Token::Break,
            ]
        );
    }

    #[test]
    fn pot_odds_compare_pot_to_blind() {
        let spot = spot();
        assert!((spot.pot_odds() - 0.6).abs() < crate::POLICY_EPSILON);
    }
}
