use crate::history::token::Token;
use crate::Probability;
use std::collections::BTreeMap;

/// a probability distribution over abstract actions.
/// weights are non-negative and, once normalized, sum to one
/// within `crate::POLICY_EPSILON`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Policy(BTreeMap<Token, Probability>);

impl Policy {
    pub fn uniform(actions: &[Token]) -> Self {
        let p = 1. / actions.len().max(1) as Probability;
        Self(actions.iter().map(|a| (*a, p)).collect())
    }
    pub fn inner(&self) -> &BTreeMap<Token, Probability> {
        &self.0
    }
    pub fn weight(&self, token: &Token) -> Probability {
        self.0.get(token).copied().unwrap_or(0.)
    }
    pub fn support(&self) -> Vec<Token> {
        self.0.keys().copied().collect()
    }
    pub fn is_degenerate(&self) -> bool {
        self.0.is_empty() || self.0.values().all(|p| *p <= 0.)
    }
    /// scale weights into a proper distribution.
    /// degenerate weights recover as uniform over the existing support.
    pub fn normalized(self) -> Self {
        let sum = self.0.values().filter(|p| **p > 0.).sum::<Probability>();
        match sum > 0. {
            true => Self(
                self.0
                    .into_iter()
                    .map(|(a, p)| (a, p.max(0.) / sum))
                    .inspect(|(_, p)| debug_assert!(*p >= 0.))
                    .inspect(|(_, p)| debug_assert!(*p <= 1.))
                    .collect(),
            ),
            false => Self::uniform(&self.support()),
        }
    }
    /// project onto the legal action set and renormalize.
    /// an empty intersection recovers as uniform over the legal set.
    pub fn restrict(&self, legal: &[Token]) -> Self {
        let masked = self
            .0
            .iter()
            .filter(|(a, _)| legal.contains(a))
            .map(|(a, p)| (*a, *p))
            .collect::<BTreeMap<Token, Probability>>();
        match masked.values().any(|p| *p > 0.) {
            true => Self(masked).normalized(),
            false => Self::uniform(legal),
        }
    }
    /// weighted categorical draw.
    /// degenerate distributions fall back to uniform; empty support yields
    /// None and the caller decides what a safe default action is.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> Option<Token> {
        use rand::distr::weighted::WeightedIndex;
        use rand::prelude::Distribution;
        if self.0.is_empty() {
            return None;
        }
        let support = self.support();
        match self.is_degenerate() {
            true => {
                log::warn!("degenerate policy, sampling uniformly");
                Some(support[rng.random_range(0..support.len())])
            }
            false => WeightedIndex::new(self.0.values().map(|p| p.max(0.)))
                .ok()
                .map(|dist| support[dist.sample(rng)]),
        }
    }
}

impl From<BTreeMap<Token, Probability>> for Policy {
    fn from(weights: BTreeMap<Token, Probability>) -> Self {
        Self(weights)
    }
}

impl FromIterator<(Token, Probability)> for Policy {
    fn from_iter<T: IntoIterator<Item = (Token, Probability)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0
            .iter()
            .try_for_each(|(a, p)| write!(f, " {}:{:.3}", a, p))
    }
}

impl crate::Arbitrary for Policy {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        [Token::Fold, Token::Call, Token::BetMin, Token::BetMax]
            .into_iter()
            .map(|a| (a, rng.random_range(0.0..1.0)))
            .collect::<Self>()
            .normalized()
    }
}
