#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    #[default]
    Pref = 0,
    Flop = 1,
    Turn = 2,
    Rive = 3,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
}

impl From<u8> for Street {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Pref,
            1 => Self::Flop,
            2 => Self::Turn,
            3 => Self::Rive,
            _ => panic!("invalid street u8: {}", n),
        }
    }
}
impl From<Street> for u8 {
    fn from(street: Street) -> Self {
        street as u8
    }
}

impl TryFrom<&str> for Street {
    type Error = crate::error::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "preflop" => Ok(Self::Pref),
            "flop" => Ok(Self::Flop),
            "turn" => Ok(Self::Turn),
            "river" => Ok(Self::Rive),
            _ => Err(crate::error::Error::Parse(format!("street: {}", s))),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl crate::Arbitrary for Street {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..4u8))
    }
}
