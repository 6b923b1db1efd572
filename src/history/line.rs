use super::action::Action;
use super::token::Token;

/// append-only betting history scoped to one hand.
/// unbounded in length; the abstractors are what keep the
/// downstream infoset space bounded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Line(Vec<Token>);

impl Line {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push(&mut self, token: Token) {
        self.0.push(token);
    }
    pub fn record(&mut self, action: Action) {
        self.0.push(Token::from(action));
    }
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// tokens before the first street separator
    pub fn preflop(&self) -> &[Token] {
        match self.0.iter().position(|t| *t == Token::Break) {
            None => &self.0,
            Some(i) => &self.0[..i],
        }
    }
    /// one slice per street after the preflop, split on separators.
    /// a street that has been dealt but not yet acted on is an empty slice.
    pub fn postflop(&self) -> Vec<&[Token]> {
        match self.0.iter().position(|t| *t == Token::Break) {
            None => vec![],
            Some(i) => self.0[i + 1..].split(|t| *t == Token::Break).collect(),
        }
    }
}

impl From<Vec<Token>> for Line {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Token> for Line {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|t| write!(f, "{}", t))
    }
}
