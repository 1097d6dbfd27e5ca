use serde::{Deserialize, Serialize};

/// One symbol from the fixed 10-entry palette used to color and
/// categorize a timer. `Neutral` is the "no tag" entry; the other
/// nine are handed out to new timers lowest-index-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tag {
    #[default]
    #[serde(rename = "⚪")]
    Neutral,
    #[serde(rename = "🟢")]
    Green,
    #[serde(rename = "🔵")]
    Blue,
    #[serde(rename = "🟡")]
    Yellow,
    #[serde(rename = "🔴")]
    Red,
    #[serde(rename = "🟣")]
    Purple,
    #[serde(rename = "⚡")]
    Bolt,
    #[serde(rename = "💻")]
    Laptop,
    #[serde(rename = "🎨")]
    Art,
    #[serde(rename = "🧠")]
    Brain,
}

impl Tag {
    /// Palette in stable assignment order.
    pub const PALETTE: [Tag; 10] = [
        Tag::Neutral,
        Tag::Green,
        Tag::Blue,
        Tag::Yellow,
        Tag::Red,
        Tag::Purple,
        Tag::Bolt,
        Tag::Laptop,
        Tag::Art,
        Tag::Brain,
    ];

    /// Position in the palette; used as the compact share encoding.
    pub fn index(self) -> usize {
        Self::PALETTE.iter().position(|&t| t == self).unwrap_or(0)
    }

    /// Palette entry at `index`, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Tag> {
        Self::PALETTE.get(index).copied()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Tag::Neutral => "⚪",
            Tag::Green => "🟢",
            Tag::Blue => "🔵",
            Tag::Yellow => "🟡",
            Tag::Red => "🔴",
            Tag::Purple => "🟣",
            Tag::Bolt => "⚡",
            Tag::Laptop => "💻",
            Tag::Art => "🎨",
            Tag::Brain => "🧠",
        }
    }

    /// Chart/legend color for this tag.
    pub fn color(self) -> &'static str {
        match self {
            Tag::Neutral => "#e0e0e0",
            Tag::Green => "#4ade80",
            Tag::Blue => "#60a5fa",
            Tag::Yellow => "#facc15",
            Tag::Red => "#f87171",
            Tag::Purple => "#c084fc",
            Tag::Bolt => "#fbbf24",
            Tag::Laptop => "#94a3b8",
            Tag::Art => "#f472b6",
            Tag::Brain => "#818cf8",
        }
    }

    /// Parse a palette symbol or its index.
    pub fn parse(s: &str) -> Option<Tag> {
        if let Ok(i) = s.parse::<usize>() {
            return Self::from_index(i);
        }
        Self::PALETTE.iter().copied().find(|t| t.symbol() == s)
    }
}
