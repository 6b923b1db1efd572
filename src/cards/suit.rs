#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<char> for Suit {
    type Error = crate::error::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' => Ok(Suit::C),
            'd' => Ok(Suit::D),
            'h' => Ok(Suit::H),
            's' => Ok(Suit::S),
            _ => Err(crate::error::Error::Parse(format!("suit char: {}", c))),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}

impl crate::Arbitrary for Suit {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..4u8))
    }
}
