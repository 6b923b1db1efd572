use crate::Chips;
use crate::Probability;
use crate::Utility;

/// running statistics on the opponent, updated once per observed decision
/// point. aggression is inferred from chips contributed beyond two blinds;
/// bluffs are credited probabilistically since we rarely see a showdown.
/// the derived ratios adjust the bet sizer and the raise-equity threshold:
/// damp aggression into opponents who raise a lot, attack frequent bluffers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Villain {
    actions: usize,
    raises: usize,
    bluffs: usize,
}

impl Villain {
    pub fn observe(&mut self, contribution: Chips, blind: Chips, rng: &mut impl rand::Rng) {
        self.actions += 1;
        if contribution > 2 * blind {
            self.raises += 1;
            if rng.random_bool(crate::BLUFF_ODDS as f64) {
                self.bluffs += 1;
            }
        }
        log::trace!(
            "villain {}/{} aggro {:.2} bluff {:.2}",
            self.raises,
            self.actions,
            self.aggression(),
            self.bluff_rate(),
        );
    }
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn aggression(&self) -> Probability {
        match self.actions {
            0 => 0.,
            n => self.raises as Probability / n as Probability,
        }
    }
    pub fn bluff_rate(&self) -> Probability {
        match self.actions {
            0 => 0.,
            n => self.bluffs as Probability / n as Probability,
        }
    }
    /// multiplier on pot-sized bets
    pub fn scale(&self) -> Utility {
        (1. + self.bluff_rate() - 0.5 * self.aggression()).clamp(crate::SCALE_MIN, crate::SCALE_MAX)
    }
    /// equity bar for aggression in the online regret estimate
    pub fn threshold(&self) -> Utility {
        (crate::RAISE_THRESHOLD + 0.2 * self.aggression() - 0.4 * self.bluff_rate())
            .clamp(crate::THRESHOLD_MIN, crate::THRESHOLD_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_model_is_neutral() {
        let villain = Villain::default();
        assert_eq!(villain.aggression(), 0.);
        assert_eq!(villain.bluff_rate(), 0.);
        assert_eq!(villain.threshold(), crate::RAISE_THRESHOLD);
    }

    #[test]
    fn raises_register_above_two_blinds() {
        let ref mut rng = rand::rng();
        let mut villain = Villain::default();
        villain.observe(10, 2, rng);
        villain.observe(4, 2, rng);
        villain.observe(0, 2, rng);
        assert_eq!(villain.actions, 3);
        assert_eq!(villain.raises, 1);
        assert!((villain.aggression() - 1. / 3.).abs() < crate::POLICY_EPSILON);
    }

    /// a pure aggressor who never gets credited as a bluffer
    /// raises the equity bar and shrinks our sizing
    #[test]
    fn aggression_raises_the_bar() {
        let villain = Villain {
            actions: 10,
            raises: 10,
            bluffs: 0,
        };
        assert!(villain.threshold() > crate::RAISE_THRESHOLD);
        assert!(villain.scale() < 1.);
    }

    /// a frequent bluffer lowers the bar and grows our sizing
    #[test]
    fn bluffing_lowers_the_bar() {
        let villain = Villain {
            actions: 10,
            raises: 5,
            bluffs: 5,
        };
        assert!(villain.threshold() < crate::RAISE_THRESHOLD);
        assert!(villain.scale() > 1.);
    }

    #[test]
    fn adjustments_stay_bounded() {
        let ref mut rng = rand::rng();
        let mut villain = Villain::default();
        for _ in 0..1000 {
            villain.observe(400, 2, rng);
            assert!(villain.scale() >= crate::SCALE_MIN);
            assert!(villain.scale() <= crate::SCALE_MAX);
            assert!(villain.threshold() >= crate::THRESHOLD_MIN);
            assert!(villain.threshold() <= crate::THRESHOLD_MAX);
        }
    }

    #[test]
    fn resets_clean() {
        let ref mut rng = rand::rng();
        let mut villain = Villain::default();
        villain.observe(10, 2, rng);
        villain.reset();
        assert_eq!(villain, Villain::default());
    }
}
