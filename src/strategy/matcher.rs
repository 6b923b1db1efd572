use super::policy::Policy;
use super::state::StateKey;
use crate::history::token::Token;
use crate::Probability;
use crate::Utility;
use std::collections::BTreeMap;

/// online regret matcher: per-state cumulative regrets drive the current
/// strategy, and every computed strategy accumulates into a weight table
/// whose normalization is the time-averaged policy.
///
/// regret estimates are single-sample heuristics supplied by the caller,
/// not tree-walking counterfactual regret; accumulation is statistically
/// robust to the occasional lost update, so persistence is best-effort
/// at hand boundaries rather than transactional.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Matcher {
    regrets: BTreeMap<StateKey, BTreeMap<Token, Utility>>,
    weights: BTreeMap<StateKey, BTreeMap<Token, Probability>>,
}

impl Matcher {
    /// regret-matched strategy over the current legal actions:
    /// max(r, 0) / sum of positive regrets, uniform when nothing is positive.
    /// the result is folded into the strategy-sum table before returning.
    ///
    /// tables hold only the closed abstract vocabulary. a concrete Bet(n) in
    /// the legal set is dropped here and recovers downstream when the caller
    /// restricts to its full legal set.
    pub fn policy(&mut self, key: &StateKey, legal: &[Token]) -> Policy {
        let legal = legal
            .iter()
            .filter(|a| !a.is_bet())
            .copied()
            .collect::<Vec<Token>>();
        let regrets = self.regrets.entry(key.clone()).or_default();
        let norm = legal
            .iter()
            .map(|a| regrets.get(a).copied().unwrap_or(0.).max(0.))
            .sum::<Utility>();
        let policy = match norm > 0. {
            true => legal
                .iter()
                .map(|a| (*a, regrets.get(a).copied().unwrap_or(0.).max(0.) / norm))
                .collect::<Policy>(),
            false => Policy::uniform(&legal),
        };
        let weights = self.weights.entry(key.clone()).or_default();
        for (action, p) in policy.inner() {
            *weights.entry(*action).or_insert(0.) += p;
        }
        log::trace!("policy @ {} :{}", key, policy);
        policy
    }
    /// additive update from an instantaneous regret estimate.
    /// concrete bets carry no regret; only the abstract vocabulary persists.
    pub fn update(&mut self, key: &StateKey, action: Token, regret: Utility) {
        if action.is_bet() {
            log::trace!("concrete bet stays out of the tables: {}", action);
            return;
        }
        let slot = self
            .regrets
            .entry(key.clone())
            .or_default()
            .entry(action)
            .or_insert(0.);
        *slot += regret;
        log::trace!("regret @ {} {} += {} -> {}", key, action, regret, slot);
    }
    /// the time-averaged policy at this state, if we have ever visited it
    pub fn average(&self, key: &StateKey) -> Option<Policy> {
        self.weights.get(key).map(|weights| {
            weights
                .iter()
                .map(|(a, w)| (*a, *w))
                .collect::<Policy>()
                .normalized()
        })
    }
    pub fn states(&self) -> usize {
        self.regrets.len()
    }

    /// (state, action) -> (cumulative regret, cumulative weight),
    /// the union of both tables for persistence
    fn rows(&self) -> BTreeMap<(StateKey, Token), (Utility, Probability)> {
        let mut rows = BTreeMap::new();
        for (key, regrets) in self.regrets.iter() {
            for (action, regret) in regrets.iter() {
                rows.entry((key.clone(), *action)).or_insert((0., 0.)).0 = *regret;
            }
        }
        for (key, weights) in self.weights.iter() {
            for (action, weight) in weights.iter() {
                rows.entry((key.clone(), *action)).or_insert((0., 0.)).1 = *weight;
            }
        }
        rows
    }
}

/// persistence. PGCOPY-style framing: signature header, then per record a
/// field count and length-prefixed big-endian fields (state key text, action
/// byte, regret, weight), then a trailer. round-trip fidelity is the only
/// hard requirement of the format.
impl Matcher {
    const N_FIELDS: u16 = 4;

    fn path(name: &str) -> String {
        format!("{}.tables.pgcopy", name)
    }
    /// load saved tables; absence or corruption is a cold start, never fatal
    pub fn load(name: &str) -> Self {
        match Self::read(name) {
            Ok(matcher) => {
                log::info!("loaded {} learned states from {}", matcher.states(), Self::path(name));
                matcher
            }
            Err(e) => {
                log::warn!("cold start ({})", e);
                Self::default()
            }
        }
    }
    pub fn save(&self, name: &str) -> anyhow::Result<()> {
        use byteorder::WriteBytesExt;
        use byteorder::BE;
        use std::io::Write;
        let rows = self.rows();
        log::info!("saving {} rows to {}", rows.len(), Self::path(name));
        let mut file = std::io::BufWriter::new(std::fs::File::create(Self::path(name))?);
        file.write_all(b"PGCOPY\n\xFF\r\n\0")?;
        file.write_u32::<BE>(0)?;
        file.write_u32::<BE>(0)?;
        for ((key, action), (regret, weight)) in rows {
            let key = key.to_string();
            file.write_u16::<BE>(Self::N_FIELDS)?;
            file.write_u32::<BE>(key.len() as u32)?;
            file.write_all(key.as_bytes())?;
            file.write_u32::<BE>(size_of::<u8>() as u32)?;
            file.write_u8(u8::from(action))?;
            file.write_u32::<BE>(size_of::<f32>() as u32)?;
            file.write_f32::<BE>(regret)?;
            file.write_u32::<BE>(size_of::<f32>() as u32)?;
            file.write_f32::<BE>(weight)?;
        }
        file.write_u16::<BE>(0xFFFF)?;
        Ok(())
    }
    fn read(name: &str) -> anyhow::Result<Self> {
        use byteorder::ReadBytesExt;
        use byteorder::BE;
        use std::io::Read;
        use std::io::Seek;
        use std::io::SeekFrom;
        let file = std::fs::File::open(Self::path(name))?;
        let mut reader = std::io::BufReader::new(file);
        let mut matcher = Self::default();
        let mut buffer = [0u8; 2];
        reader.seek(SeekFrom::Start(19))?;
        while reader.read_exact(&mut buffer).is_ok() {
            if u16::from_be_bytes(buffer) != Self::N_FIELDS {
                break;
            }
            let length = reader.read_u32::<BE>()? as usize;
            let mut bytes = vec![0u8; length];
            reader.read_exact(&mut bytes)?;
            let key = StateKey::try_from(std::str::from_utf8(&bytes)?)?;
            reader.read_u32::<BE>()?;
            let action = reader.read_u8()?;
            anyhow::ensure!((1..=7).contains(&action), "invalid action byte");
            let action = Token::from(action);
            reader.read_u32::<BE>()?;
            let regret = reader.read_f32::<BE>()?;
            reader.read_u32::<BE>()?;
            let weight = reader.read_f32::<BE>()?;
            matcher
                .regrets
                .entry(key.clone())
                .or_default()
                .insert(action, regret);
            matcher
                .weights
                .entry(key)
                .or_default()
                .insert(action, weight);
        }
        Ok(matcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::POLICY_EPSILON;

    const LEGAL: [Token; 3] = [Token::Fold, Token::Call, Token::BetMax];

    #[test]
    fn cold_policy_is_uniform() {
        let mut matcher = Matcher::default();
        let key = StateKey::random();
        let policy = matcher.policy(&key, &LEGAL);
        assert!(LEGAL
            .iter()
            .all(|a| (policy.weight(a) - 1. / 3.).abs() < POLICY_EPSILON));
    }

    #[test]
    fn positive_regret_dominates() {
        let mut matcher = Matcher::default();
        let key = StateKey::random();
        matcher.update(&key, Token::Call, 2.);
        matcher.update(&key, Token::BetMax, 1.);
        matcher.update(&key, Token::Fold, -3.);
        let policy = matcher.policy(&key, &LEGAL);
        assert!((policy.weight(&Token::Call) - 2. / 3.).abs() < POLICY_EPSILON);
        assert!((policy.weight(&Token::BetMax) - 1. / 3.).abs() < POLICY_EPSILON);
        assert!(policy.weight(&Token::Fold) == 0.);
    }

    #[test]
    fn policies_sum_to_one() {
        let mut matcher = Matcher::default();
        for _ in 0..32 {
            let key = StateKey::random();
            matcher.update(&key, Token::Call, rand::random::<Utility>() - 0.5);
            matcher.update(&key, Token::Fold, rand::random::<Utility>() - 0.5);
            let policy = matcher.policy(&key, &LEGAL);
            let sum = policy.inner().values().sum::<Probability>();
            assert!((sum - 1.).abs() < POLICY_EPSILON);
            assert!(policy.inner().values().all(|p| *p >= 0.));
        }
    }

    #[test]
    fn averaging_tracks_visits() {
        let mut matcher = Matcher::default();
        let key = StateKey::random();
        matcher.update(&key, Token::Call, 1.);
        matcher.policy(&key, &LEGAL);
        matcher.policy(&key, &LEGAL);
        let average = matcher.average(&key).unwrap();
        assert!((average.weight(&Token::Call) - 1.).abs() < POLICY_EPSILON);
    }

    /// a harness may list a concrete bet as legal; it must never reach
    /// the tables or the persisted file
    #[test]
    fn concrete_bets_stay_out_of_tables() {
        let name = "matcher_concrete_bet_test";
        let mut matcher = Matcher::default();
        let key = StateKey::random();
        matcher.update(&key, Token::Bet(5), 0.1);
        matcher.update(&key, Token::Call, 1.);
        let policy = matcher.policy(&key, &[Token::Bet(5), Token::Call, Token::Fold]);
        assert_eq!(policy.weight(&Token::Bet(5)), 0.);
        assert!((policy.weight(&Token::Call) - 1.).abs() < POLICY_EPSILON);
        matcher.save(name).unwrap();
        let load = Matcher::load(name);
        std::fs::remove_file(Matcher::path(name)).unwrap();
        assert_eq!(load.average(&key), matcher.average(&key));
    }

    #[test]
    fn unvisited_state_has_no_average() {
        use crate::cards::board::Board;
        use crate::cards::hole::Hole;
        let matcher = Matcher::default();
        let key = StateKey::from((Hole::try_from("AhKs").unwrap(), Board::empty(), None));
        assert!(matcher.average(&key).is_none());
    }

    #[test]
    fn persistence_round_trip() {
        let name = "matcher_round_trip_test";
        let mut save = Matcher::default();
        let keys = (0..16).map(|_| StateKey::random()).collect::<Vec<_>>();
        for key in keys.iter() {
            save.update(key, Token::Call, rand::random::<Utility>() - 0.5);
            save.update(key, Token::BetMax, rand::random::<Utility>() - 0.5);
            save.policy(key, &LEGAL);
        }
        save.save(name).unwrap();
        let load = Matcher::load(name);
        std::fs::remove_file(Matcher::path(name)).unwrap();
        for key in keys.iter() {
            assert_eq!(load.average(key), save.average(key));
            let mut save = save.clone();
            let mut load = load.clone();
            assert_eq!(load.policy(key, &LEGAL), save.policy(key, &LEGAL));
        }
    }

    #[test]
    fn missing_file_is_cold_start() {
        let matcher = Matcher::load("no_such_tables");
        assert_eq!(matcher, Matcher::default());
    }

    #[test]
    fn corrupt_file_is_cold_start() {
        let name = "matcher_corrupt_test";
        std::fs::write(Matcher::path(name), b"not a table").unwrap();
        let matcher = Matcher::load(name);
        std::fs::remove_file(Matcher::path(name)).unwrap();
        assert_eq!(matcher, Matcher::default());
    }

    /// intact framing around an unparseable state key is still corruption
    #[test]
    fn malformed_key_is_cold_start() {
        use byteorder::WriteBytesExt;
        use byteorder::BE;
        use std::io::Write;
        let name = "matcher_bad_key_test";
        let key = "preflop|KsAh|2c|-";
        let mut file = std::io::BufWriter::new(std::fs::File::create(Matcher::path(name)).unwrap());
        file.write_all(b"PGCOPY\n\xFF\r\n\0").unwrap();
        file.write_u32::<BE>(0).unwrap();
        file.write_u32::<BE>(0).unwrap();
        file.write_u16::<BE>(Matcher::N_FIELDS).unwrap();
        file.write_u32::<BE>(key.len() as u32).unwrap();
        file.write_all(key.as_bytes()).unwrap();
        file.write_u32::<BE>(size_of::<u8>() as u32).unwrap();
        file.write_u8(u8::from(Token::Call)).unwrap();
        file.write_u32::<BE>(size_of::<f32>() as u32).unwrap();
        file.write_f32::<BE>(0.1).unwrap();
        file.write_u32::<BE>(size_of::<f32>() as u32).unwrap();
        file.write_f32::<BE>(0.2).unwrap();
        file.write_u16::<BE>(0xFFFF).unwrap();
        drop(file);
        let matcher = Matcher::load(name);
        std::fs::remove_file(Matcher::path(name)).unwrap();
        assert_eq!(matcher, Matcher::default());
    }
}
