use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::Probability;
use std::collections::HashMap;
use std::collections::VecDeque;

/// Monte Carlo win-probability estimate against random opponent holdings.
/// consumed as a black box; a failure here is decision-fatal since no
/// action can be chosen without some equity signal.
pub trait Oracle {
    fn equity(&self, hole: &Hole, board: &Board) -> anyhow::Result<Probability>;
}

/// bounded memoization over canonicalized (hole, board) pairs.
/// simulation is expensive and identical lookups recur within a hand;
/// FIFO eviction keeps long-running matches from growing without bound.
pub struct Memo<O> {
    oracle: O,
    cache: HashMap<(Hole, Board), Probability>,
    order: VecDeque<(Hole, Board)>,
    limit: usize,
}

impl<O: Oracle> Memo<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_limit(oracle, crate::EQUITY_MEMO_LIMIT)
    }
    pub fn with_limit(oracle: O, limit: usize) -> Self {
        Self {
            oracle,
            cache: HashMap::new(),
            order: VecDeque::new(),
            limit: limit.max(1),
        }
    }
    pub fn len(&self) -> usize {
        self.cache.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
    pub fn equity(&mut self, hole: &Hole, board: &Board) -> anyhow::Result<Probability> {
        let key = (*hole, board.clone());
        if let Some(equity) = self.cache.get(&key) {
            return Ok(*equity);
        }
        let equity = self.oracle.equity(hole, board)?;
        if self.order.len() >= self.limit {
            if let Some(evicted) = self.order.pop_front() {
                self.cache.remove(&evicted);
            }
        }
        self.order.push_back(key.clone());
        self.cache.insert(key, equity);
        Ok(equity)
    }
}
