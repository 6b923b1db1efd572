use super::action::Action;
use crate::error::Error;
use crate::Chips;

/// the closed history vocabulary: the concrete actions observed on the wire,
/// the abstract bet buckets the transducers emit, and the street separator.
#[derive(Debug, Clone, Copy, Hash, Ord, PartialOrd, PartialEq, Eq)]
pub enum Token {
    Fold,
    Check,
    Call,
    Bet(Chips),
    BetMin,
    BetMid,
    BetMax,
    Break,
}

impl Token {
    pub fn is_bet(&self) -> bool {
        matches!(self, Token::Bet(_))
    }
    pub fn is_bucket(&self) -> bool {
        matches!(self, Token::BetMin | Token::BetMid | Token::BetMax)
    }
    pub fn is_aggro(&self) -> bool {
        self.is_bet() || self.is_bucket()
    }
}

impl From<Action> for Token {
    fn from(action: Action) -> Self {
        match action {
            Action::Fold => Token::Fold,
            Action::Check => Token::Check,
            Action::Call => Token::Call,
            Action::Bet(amount) => Token::Bet(amount),
        }
    }
}

impl TryFrom<Token> for Action {
    type Error = Error;
    fn try_from(token: Token) -> Result<Self, Self::Error> {
        match token {
            Token::Fold => Ok(Action::Fold),
            Token::Check => Ok(Action::Check),
            Token::Call => Ok(Action::Call),
            Token::Bet(amount) => Ok(Action::Bet(amount)),
            _ => Err(Error::Parse(format!("abstract token: {}", token))),
        }
    }
}

/// u8 bijection over the non-parameterized tokens.
/// concrete Bet(n) never enters the persisted tables.
impl From<Token> for u8 {
    fn from(token: Token) -> Self {
        match token {
            Token::Fold => 1,
            Token::Check => 2,
            Token::Call => 3,
            Token::BetMin => 4,
            Token::BetMid => 5,
            Token::BetMax => 6,
            Token::Break => 7,
            Token::Bet(_) => panic!("concrete bets are not persisted"),
        }
    }
}
impl From<u8> for Token {
    fn from(n: u8) -> Self {
        match n {
            1 => Token::Fold,
            2 => Token::Check,
            3 => Token::Call,
            4 => Token::BetMin,
            5 => Token::BetMid,
            6 => Token::BetMax,
            7 => Token::Break,
            _ => panic!("invalid token encoding: {}", n),
        }
    }
}

impl TryFrom<&str> for Token {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "f" => Ok(Token::Fold),
            "k" => Ok(Token::Check),
            "c" => Ok(Token::Call),
            "/" => Ok(Token::Break),
            "bMIN" => Ok(Token::BetMin),
            "bMID" => Ok(Token::BetMid),
            "bMAX" => Ok(Token::BetMax),
            s if s.starts_with('b') => s[1..]
                .parse::<Chips>()
                .map(Token::Bet)
                .map_err(|_| Error::Parse(format!("token: {}", s))),
            _ => Err(Error::Parse(format!("token: {}", s))),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Fold => write!(f, "f"),
            Token::Check => write!(f, "k"),
            Token::Call => write!(f, "c"),
            Token::Break => write!(f, "/"),
            Token::BetMin => write!(f, "bMIN"),
            Token::BetMid => write!(f, "bMID"),
            Token::BetMax => write!(f, "bMAX"),
            Token::Bet(amount) => write!(f, "b{}", amount),
        }
    }
}

impl crate::Arbitrary for Token {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        match rng.random_range(0..8) {
            0 => Token::Fold,
            1 => Token::Check,
            2 => Token::Call,
            3 => Token::Bet(rng.random_range(1..400)),
            4 => Token::BetMin,
            5 => Token::BetMid,
            6 => Token::BetMax,
            _ => Token::Break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let tokens = [
            Token::Fold,
            Token::Check,
            Token::Call,
            Token::BetMin,
            Token::BetMid,
            Token::BetMax,
            Token::Break,
        ];
        assert!(tokens.into_iter().all(|t| t == Token::from(u8::from(t))));
    }

    #[test]
    fn bijective_str() {
        let tokens = [
            Token::Fold,
            Token::Check,
            Token::Call,
            Token::Bet(150),
            Token::BetMin,
            Token::BetMid,
            Token::BetMax,
            Token::Break,
        ];
        assert!(tokens
            .into_iter()
            .all(|t| t == Token::try_from(t.to_string().as_str()).unwrap()));
    }

    #[test]
    fn concrete_subset() {
        assert_eq!(Action::try_from(Token::Call).unwrap(), Action::Call);
        assert_eq!(Action::try_from(Token::Bet(6)).unwrap(), Action::Bet(6));
        assert!(Action::try_from(Token::BetMax).is_err());
        assert!(Action::try_from(Token::Break).is_err());
    }
}
