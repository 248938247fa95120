use crate::config::InteractionConfig;

pub const COLLAPSED_WIDTH: &str = "0%";
pub const CARD_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPolicy {
    pub threshold: f64,
    pub bottom_margin_px: f64,
}

impl RevealPolicy {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            bottom_margin_px: config.reveal_bottom_margin_px,
        }
    }

    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

#[derive(Clone, Debug)]
pub struct RevealOnce {
    fired: Vec<bool>,
}

impl RevealOnce {
    pub fn new(count: usize) -> Self {
        Self {
            fired: vec![false; count],
        }
    }

    pub fn enter(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(fired) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.fired.iter().filter(|fired| !**fired).count()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

impl CardStyle {
    pub fn hidden() -> Self {
        Self {
            opacity: "0",
            transform: "translateY(50px)",
        }
    }

    pub fn revealed() -> Self {
        Self {
            opacity: "1",
            transform: "translateY(0)",
        }
    }
}

pub fn stagger_delay(index: usize, stagger_ms: u32) -> String {
    let delay_ms = index as f64 * f64::from(stagger_ms);
    format!("{}s", delay_ms / 1_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{testing::record, Delayed};

    #[test]
    fn default_policy_matches_half_visible_with_bottom_inset() {
        let policy = RevealPolicy::new(&InteractionConfig::default());

        assert_eq!(policy.threshold, 0.5);
        assert_eq!(policy.root_margin(), "0px 0px -100px 0px");
    }

    #[test]
    fn each_card_reveals_exactly_once() {
        let mut cards = RevealOnce::new(3);

        assert!(cards.enter(1));
        assert!(!cards.enter(1));
        assert!(cards.enter(0));
        assert!(!cards.enter(7));
        assert_eq!(cards.remaining(), 1);
        assert!(cards.enter(2));
        assert!(!cards.enter(2));
        assert_eq!(cards.remaining(), 0);
    }

    #[test]
    fn stagger_grows_by_a_tenth_of_a_second_per_card() {
        let delays: Vec<String> = (0..4).map(|index| stagger_delay(index, 100)).collect();
        assert_eq!(delays, vec!["0s", "0.1s", "0.2s", "0.3s"]);
    }

    #[test]
    fn cards_start_hidden_and_offset() {
        assert_eq!(CardStyle::hidden().opacity, "0");
        assert_eq!(CardStyle::hidden().transform, "translateY(50px)");
        assert_eq!(CardStyle::revealed().opacity, "1");
    }

    #[tokio::test]
    async fn skill_bar_restores_its_width_after_the_fill_delay() {
        let steps = record(Delayed::new(200, "85%".to_string())).await;
        assert_eq!(steps, vec![(200, "85%".to_string())]);
    }
}
