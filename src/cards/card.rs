use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;

/// rank-major ordering gives canonical sorts for key building
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let rank = chars.next().ok_or(Error::Parse(format!("card: {}", s)))?;
        let suit = chars.next().ok_or(Error::Parse(format!("card: {}", s)))?;
        match chars.next() {
            None => Ok(Self {
                rank: Rank::try_from(rank)?,
                suit: Suit::try_from(suit)?,
            }),
            Some(_) => Err(Error::Parse(format!("card: {}", s))),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..52u8))
    }
}
