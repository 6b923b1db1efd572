use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;
use crate::cards::street::Street;
use crate::error::Error;

/// lookup key for the online regret and strategy-sum tables.
/// coarser than the blueprint infoset key: no betting line, just the
/// concrete cards we can see plus the optional bounty rank variant.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct StateKey {
    street: Street,
    hole: Hole,
    board: Board,
    bounty: Option<Rank>,
}

impl StateKey {
    pub fn street(&self) -> Street {
        self.street
    }
}

impl From<(Hole, Board, Option<Rank>)> for StateKey {
    fn from((hole, board, bounty): (Hole, Board, Option<Rank>)) -> Self {
        Self {
            street: board.street(),
            hole,
            board,
            bounty,
        }
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.street,
            self.hole,
            self.board,
            self.bounty.map(|r| r.to_string()).unwrap_or("-".into()),
        )
    }
}

impl TryFrom<&str> for StateKey {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split('|').collect::<Vec<&str>>();
        match parts.as_slice() {
            [street, hole, board, bounty] => {
                let street = Street::try_from(*street)?;
                let hole = Hole::try_from(*hole)?;
                let board = Board::try_from(*board)?;
                let bounty = match *bounty {
                    "-" => None,
                    r => Some(Rank::try_from(
                        r.chars().next().ok_or(Error::Parse(s.to_string()))?,
                    )?),
                };
                match street == board.street() {
                    true => Ok(Self {
                        street,
                        hole,
                        board,
                        bounty,
                    }),
                    false => Err(Error::Parse(format!("street mismatch: {}", s))),
                }
            }
            _ => Err(Error::Parse(format!("state key: {}", s))),
        }
    }
}

impl crate::Arbitrary for StateKey {
    fn random() -> Self {
        use rand::Rng;
        let board = Board::random();
        let hole = loop {
            let hole = Hole::random();
            let (a, b) = hole.cards();
            if !board.cards().contains(&a) && !board.cards().contains(&b) {
                break hole;
            }
        };
        let bounty = match rand::rng().random_bool(0.5) {
            true => Some(Rank::random()),
            false => None,
        };
        Self::from((hole, board, bounty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_str() {
        for _ in 0..32 {
            let key = StateKey::random();
            assert_eq!(key, StateKey::try_from(key.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn displays() {
        let key = StateKey::from((
            Hole::try_from("AhKs").unwrap(),
            Board::try_from("2c7d5h").unwrap(),
            Some(Rank::Queen),
        ));
        assert_eq!(key.to_string(), "flop|KsAh|2c5h7d|Q");
    }

    #[test]
    fn preflop_board_is_blank() {
        let key = StateKey::from((Hole::try_from("AhKs").unwrap(), Board::empty(), None));
        assert_eq!(key.to_string(), "preflop|KsAh||-");
        assert_eq!(key, StateKey::try_from("preflop|KsAh||-").unwrap());
    }
}
