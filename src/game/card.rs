/// Symbols dealt when the config does not supply its own pool.
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵", "🐔",
    "🐧", "🐦", "🐤", "🦆", "🦅", "🦉", "🦇", "🐺", "🐗", "🐴", "🦄", "🐝", "🐛", "🦋", "🐌", "🐞",
];

pub fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub symbol: String,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            flipped: false,
            matched: false,
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }

    /// Whether a player flip may reveal this card.
    pub fn can_flip(&self) -> bool {
        !self.flipped && !self.matched
    }
}
