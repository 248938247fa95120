use crate::timeline::{Phase, Sequence};

#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    phase: Phase,
    start_delay_ms: u32,
    char_delay_ms: u32,
}

impl Typewriter {
    pub fn new(text: &str, start_delay_ms: u32, char_delay_ms: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            phase: Phase::Pending,
            start_delay_ms,
            char_delay_ms,
        }
    }

    fn visible_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }
}

impl Sequence for Typewriter {
    type Step = String;

    fn phase(&self) -> Phase {
        self.phase
    }

    fn next_delay_ms(&self) -> Option<u32> {
        match self.phase {
            Phase::Pending => Some(self.start_delay_ms),
            Phase::Running => Some(self.char_delay_ms),
            Phase::Done => None,
        }
    }

    fn advance(&mut self) -> Option<String> {
        if self.phase == Phase::Done {
            return None;
        }

        if self.revealed >= self.chars.len() {
            self.phase = Phase::Done;
            return None;
        }

        self.revealed += 1;
        self.phase = if self.revealed == self.chars.len() {
            Phase::Done
        } else {
            Phase::Running
        };

        Some(self.visible_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::testing::record;

    #[tokio::test]
    async fn reveals_one_character_per_tick_after_the_start_delay() {
        let frames = record(Typewriter::new("Hi!", 500, 100)).await;

        assert_eq!(
            frames,
            vec![
                (500, "H".to_string()),
                (600, "Hi".to_string()),
                (700, "Hi!".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn multibyte_text_is_split_on_characters() {
        let frames = record(Typewriter::new("你好", 0, 10)).await;
        let last = frames.last().map(|(_, text)| text.as_str());

        assert_eq!(frames.len(), 2);
        assert_eq!(last, Some("你好"));
    }

    #[tokio::test]
    async fn empty_text_finishes_without_frames() {
        let frames = record(Typewriter::new("", 500, 100)).await;
        assert!(frames.is_empty());
    }

    #[test]
    fn finished_typewriter_does_not_restart() {
        let mut typewriter = Typewriter::new("a", 0, 0);
        assert_eq!(typewriter.phase(), Phase::Pending);

        assert_eq!(typewriter.advance().as_deref(), Some("a"));
        assert_eq!(typewriter.phase(), Phase::Done);
        assert_eq!(typewriter.next_delay_ms(), None);
        assert_eq!(typewriter.advance(), None);
    }
}
