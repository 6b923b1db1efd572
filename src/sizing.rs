use crate::history::token::Token;
use crate::Chips;
use crate::Utility;

/// translate an abstract bet bucket back into chips for the live hand.
/// preflop sizes key off the stage pot, postflop off the total pot in
/// half-blind units. the villain-adjusted multiplier scales the pot-sized
/// buckets; shoves are left alone. final amounts are always clamped to the
/// harness-supplied raise bounds, never surfaced as an error.
#[derive(Debug, Clone, Copy)]
pub struct Sizer {
    scale: Utility,
}

impl Default for Sizer {
    fn default() -> Self {
        Self { scale: 1. }
    }
}

impl From<Utility> for Sizer {
    fn from(scale: Utility) -> Self {
        assert!(scale > 0.);
        Self { scale }
    }
}

impl Sizer {
    pub fn preflop(&self, token: Token, stage_pot: Chips, blind: Chips, stack: Chips) -> Chips {
        match token {
            Token::BetMin => self.scaled(blind.max(stage_pot)),
            Token::BetMid => self.scaled(blind.max(2 * stage_pot)),
            Token::BetMax => stack,
            _ => panic!("not a bet bucket: {}", token),
        }
    }
    pub fn postflop(&self, token: Token, total_pot: Chips, blind: Chips, stack: Chips) -> Chips {
        let unit = (blind / 2).max(1);
        match token {
            Token::BetMin => self.scaled(blind.max(total_pot / 3 / unit * unit)),
            Token::BetMax => total_pot.min(stack),
            _ => panic!("not a postflop bet bucket: {}", token),
        }
    }
    pub fn clamp(amount: Chips, (lo, hi): (Chips, Chips)) -> Chips {
        amount.clamp(lo, hi)
    }
    fn scaled(&self, amount: Chips) -> Chips {
        (amount as Utility * self.scale).round() as Chips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflop_min_is_pot_floored_at_blind() {
        let sizer = Sizer::default();
        assert_eq!(sizer.preflop(Token::BetMin, 3, 2, 100), 3);
        assert_eq!(sizer.preflop(Token::BetMin, 1, 2, 100), 2);
    }

    #[test]
    fn preflop_mid_is_double_pot() {
        let sizer = Sizer::default();
        assert_eq!(sizer.preflop(Token::BetMid, 3, 2, 100), 6);
    }

    #[test]
    fn preflop_max_is_shove() {
        let sizer = Sizer::default();
        assert_eq!(sizer.preflop(Token::BetMax, 3, 2, 77), 77);
    }

    /// third-pot sizing rounds down to half-blind units
    #[test]
    fn postflop_min_rounds_to_unit() {
        let sizer = Sizer::default();
        assert_eq!(sizer.postflop(Token::BetMin, 10, 2, 100), 3);
        assert_eq!(sizer.postflop(Token::BetMin, 2, 2, 100), 2);
    }

    #[test]
    fn postflop_max_is_pot_capped_by_stack() {
        let sizer = Sizer::default();
        assert_eq!(sizer.postflop(Token::BetMax, 40, 2, 100), 40);
        assert_eq!(sizer.postflop(Token::BetMax, 40, 2, 25), 25);
    }

    #[test]
    fn scaling_shifts_pot_bets() {
        let sizer = Sizer::from(1.5);
        assert_eq!(sizer.preflop(Token::BetMin, 10, 2, 100), 15);
        assert_eq!(sizer.preflop(Token::BetMax, 10, 2, 100), 100);
    }

    /// clamping holds for any sizing output
    #[test]
    fn always_within_bounds() {
        use crate::Arbitrary;
        use rand::Rng;
        let ref mut rng = rand::rng();
        for _ in 0..256 {
            let scale = rng.random_range(crate::SCALE_MIN..crate::SCALE_MAX);
            let sizer = Sizer::from(scale);
            let pot = rng.random_range(0..400);
            let stack = rng.random_range(0..400);
            let lo = rng.random_range(0..200);
            let hi = rng.random_range(lo..400);
            let token = match Token::random() {
                t if t.is_bucket() => t,
                _ => Token::BetMax,
            };
            let raw = match token {
                Token::BetMid => sizer.preflop(token, pot, 2, stack),
                t => sizer.postflop(t, pot, 2, stack),
            };
            let clamped = Sizer::clamp(raw, (lo, hi));
            assert!(clamped >= lo && clamped <= hi);
        }
    }
}
