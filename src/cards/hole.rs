use super::card::Card;
use crate::error::Error;

/// two private cards, canonically sorted on construction.
/// suit-preserving: AhKs and AsKh remain distinct.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> (Card, Card) {
        (self.0, self.1)
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        match a < b {
            true => Self(a, b),
            false => Self(b, a),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.len() {
            4 => Ok(Self::from((
                Card::try_from(&s[0..2])?,
                Card::try_from(&s[2..4])?,
            ))),
            _ => Err(Error::Parse(format!("hole: {}", s))),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        let a = Card::random();
        loop {
            let b = Card::random();
            if a != b {
                return Self::from((a, b));
            }
        }
    }
}
