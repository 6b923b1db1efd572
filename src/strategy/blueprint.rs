use super::policy::Policy;
use crate::cards::street::Street;
use crate::error::Error;
use crate::history::token::Token;
use crate::Probability;
use std::collections::BTreeMap;

/// one trained infoset: the time-averaged strategy distribution
/// produced offline by a CFR run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    strategy: BTreeMap<String, Probability>,
}

impl Entry {
    pub fn average_strategy(&self) -> Result<Policy, Error> {
        self.strategy
            .iter()
            .map(|(a, p)| Token::try_from(a.as_str()).map(|t| (t, *p)))
            .collect::<Result<Policy, Error>>()
            .map(Policy::normalized)
    }
}

impl From<BTreeMap<String, Probability>> for Entry {
    fn from(strategy: BTreeMap<String, Probability>) -> Self {
        Self { strategy }
    }
}

/// read-only precomputed average-strategy tables, one artifact per phase.
/// loaded once at construction; a miss at decision time is surfaced as
/// Error::UnknownInfoset and the caller decides how to recover.
#[derive(Debug, Default)]
pub struct Blueprint {
    preflop: BTreeMap<String, Entry>,
    postflop: BTreeMap<String, Entry>,
}

impl Blueprint {
    pub fn load(preflop: &str, postflop: &str) -> Result<Self, Error> {
        let blueprint = Self {
            preflop: Self::artifact(preflop)?,
            postflop: Self::artifact(postflop)?,
        };
        log::info!(
            "loaded blueprint ({} preflop, {} postflop infosets)",
            blueprint.preflop.len(),
            blueprint.postflop.len(),
        );
        Ok(blueprint)
    }
    pub fn policy(&self, street: Street, key: &str) -> Result<Policy, Error> {
        let table = match street {
            Street::Pref => &self.preflop,
            _ => &self.postflop,
        };
        table
            .get(key)
            .ok_or_else(|| Error::UnknownInfoset(key.to_string()))?
            .average_strategy()
    }
    fn artifact(path: &str) -> Result<BTreeMap<String, Entry>, Error> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::Artifact(format!("{}: {}", path, e)))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| Error::Artifact(format!("{}: {}", path, e)))
    }
}

impl From<(BTreeMap<String, Entry>, BTreeMap<String, Entry>)> for Blueprint {
    fn from((preflop, postflop): (BTreeMap<String, Entry>, BTreeMap<String, Entry>)) -> Self {
        Self { preflop, postflop }
    }
}
