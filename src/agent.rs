use crate::cards::street::Street;
use crate::equity::Memo;
use crate::equity::Oracle;
use crate::error::Error;
use crate::history::action::Action;
use crate::history::token::Token;
use crate::sizing::Sizer;
use crate::spot::Spot;
use crate::strategy::blueprint::Blueprint;
use crate::strategy::matcher::Matcher;
use crate::strategy::policy::Policy;
use crate::villain::Villain;
use crate::Chips;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// where strategies come from: a precomputed average-strategy table,
/// or an online regret matcher that learns as it plays.
pub enum Source {
    Blueprint(Blueprint),
    Learner(Matcher),
}

/// the decision engine. owns every piece of cross-hand state exclusively:
/// regret/strategy tables, the opponent model, and the equity cache.
/// concurrent matches want independent agents, not a shared one.
pub struct Agent<O: Oracle> {
    source: Source,
    villain: Villain,
    oracle: Memo<O>,
    rng: SmallRng,
    name: String,
}

impl<O: Oracle> Agent<O> {
    /// play from precomputed artifacts; nothing is learned or saved
    pub fn playbook(oracle: O, blueprint: Blueprint) -> Self {
        Self {
            source: Source::Blueprint(blueprint),
            villain: Villain::default(),
            oracle: Memo::new(oracle),
            rng: SmallRng::from_rng(&mut rand::rng()),
            name: String::new(),
        }
    }
    /// learn online, restoring any tables previously saved under this name
    pub fn learner(oracle: O, name: &str) -> Self {
        Self {
            source: Source::Learner(Matcher::load(name)),
            villain: Villain::default(),
            oracle: Memo::new(oracle),
            rng: SmallRng::from_rng(&mut rand::rng()),
            name: name.to_string(),
        }
    }

    /// raw history in, exactly one legal concrete action out.
    /// abstraction -> key -> strategy -> sample -> sizing.
    pub fn decide(&mut self, spot: &Spot) -> Result<Action, Error> {
        let policy = self.advised(spot)?.restrict(&spot.legal);
        let token = policy.sample(&mut self.rng).unwrap_or(Token::Fold);
        let action = self.concrete(token, spot);
        log::debug!("decide {} ~{} -> {} -> {}", spot.infoset(), policy, token, action);
        Ok(action)
    }
    /// feed one observed opponent decision into the model
    pub fn witness(&mut self, contribution: Chips, blind: Chips) {
        self.villain.observe(contribution, blind, &mut self.rng);
    }
    /// hand boundary: persist learned tables, keep the opponent model
    pub fn hand_over(&mut self) {
        self.persist();
    }
    /// match boundary: persist learned tables, forget the opponent
    pub fn game_over(&mut self) {
        self.persist();
        self.villain.reset();
    }

    fn advised(&mut self, spot: &Spot) -> Result<Policy, Error> {
        match self.source {
            Source::Blueprint(ref blueprint) => {
                let key = spot.infoset().key();
                match blueprint.policy(spot.street(), &key) {
                    Ok(policy) => Ok(policy),
                    Err(Error::UnknownInfoset(key)) => {
                        log::warn!("untrained infoset {}, playing uniform", key);
                        Ok(Policy::uniform(&spot.legal))
                    }
                    Err(e) => Err(e),
                }
            }
            Source::Learner(ref mut matcher) => {
                let key = spot.state();
                let equity = self.oracle.equity(&spot.hole, &spot.board)?;
                for action in spot.legal.iter() {
                    let regret = match action {
                        Token::Call => equity - spot.pot_odds(),
                        a if a.is_aggro() => equity - self.villain.threshold(),
                        _ => -equity,
                    };
                    matcher.update(&key, *action, regret);
                }
                Ok(matcher.policy(&key, &spot.legal))
            }
        }
    }
    fn concrete(&self, token: Token, spot: &Spot) -> Action {
        match token {
            Token::Fold => Action::Fold,
            Token::Check => Action::Check,
            Token::Call => Action::Call,
            Token::Bet(amount) => Action::Bet(Sizer::clamp(amount, spot.bounds)),
            bucket if bucket.is_bucket() => {
                let sizer = Sizer::from(self.villain.scale());
                let amount = match spot.street() {
                    Street::Pref => sizer.preflop(bucket, spot.stage_pot, spot.blind, spot.stack),
                    _ => sizer.postflop(bucket, spot.total_pot, spot.blind, spot.stack),
                };
                Action::Bet(Sizer::clamp(amount, spot.bounds))
            }
            other => {
                log::warn!("unplayable token {}, folding", other);
                Action::Fold
            }
        }
    }
    fn persist(&self) {
        if let Source::Learner(ref matcher) = self.source {
            if let Err(e) = matcher.save(&self.name) {
                log::error!("failed to save tables: {}", e);
            }
        }
    }
}
