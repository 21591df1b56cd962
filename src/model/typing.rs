/// Types a fixed text out one character per step.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    /// Set on the frame that shows the full text; the timer stops there.
    pub done: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// How long the whole text takes at `char_ms` per character.
    pub fn duration_ms(&self, char_ms: u32) -> u64 {
        self.chars.len() as u64 * u64::from(char_ms)
    }

    /// Reveals the next character.
    pub fn step(&mut self) -> TypingFrame {
        if !self.is_done() {
            self.typed += 1;
        }
        TypingFrame {
            text: self.chars[..self.typed].iter().collect(),
            done: self.is_done(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_character_per_step() {
        let mut typewriter = Typewriter::new("Sofa");
        let frames: Vec<TypingFrame> = (0..4).map(|_| typewriter.step()).collect();
        let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["S", "So", "Sof", "Sofa"]);
        assert_eq!(
            frames.iter().map(|f| f.done).collect::<Vec<_>>(),
            vec![false, false, false, true]
        );
    }

    #[test]
    fn stays_complete_after_the_last_character() {
        let mut typewriter = Typewriter::new("Ok");
        typewriter.step();
        typewriter.step();
        assert_eq!(
            typewriter.step(),
            TypingFrame { text: "Ok".to_string(), done: true }
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typewriter = Typewriter::new("Möbel");
        assert_eq!(typewriter.duration_ms(100), 500);
        typewriter.step();
        assert_eq!(typewriter.step().text, "Mö");
    }

    #[test]
    fn empty_text_is_done_at_once() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_done());
        assert_eq!(typewriter.step(), TypingFrame { text: String::new(), done: true });
    }
}
