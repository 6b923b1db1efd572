use super::card::Card;
use super::street::Street;
use crate::error::Error;

/// visible community cards, canonically sorted on construction
#[derive(Debug, Default, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(vec![])
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn street(&self) -> Street {
        match self.0.len() {
            0 => Street::Pref,
            3 => Street::Flop,
            4 => Street::Turn,
            5 => Street::Rive,
            n => panic!("invalid board size: {}", n),
        }
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        assert!(matches!(cards.len(), 0 | 3 | 4 | 5));
        let mut cards = cards;
        cards.sort();
        Self(cards)
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.len() % 2 {
            0 => {
                let cards = (0..s.len() / 2)
                    .map(|i| Card::try_from(&s[i * 2..i * 2 + 2]))
                    .collect::<Result<Vec<Card>, Error>>()?;
                match matches!(cards.len(), 0 | 3 | 4 | 5) {
                    true => Ok(Self::from(cards)),
                    false => Err(Error::Parse(format!("board: {}", s))),
                }
            }
            _ => Err(Error::Parse(format!("board: {}", s))),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl crate::Arbitrary for Board {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        let ref mut rng = rand::rng();
        let n = Street::all().choose(rng).copied().unwrap_or_default();
        let mut cards = Vec::new();
        while cards.len() < n.n_observed() {
            let card = Card::random();
            if !cards.contains(&card) {
                cards.push(card);
            }
        }
        Self::from(cards)
    }
}
