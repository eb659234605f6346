//! Mood catalog and display colors

use crate::error::{MoodcalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five mood categories a day can be painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodId {
    Laugh,
    Smile,
    Meh,
    Frown,
    Sad,
}

impl MoodId {
    /// All moods in palette order
    pub const ALL: [MoodId; 5] = [
        MoodId::Laugh,
        MoodId::Smile,
        MoodId::Meh,
        MoodId::Frown,
        MoodId::Sad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MoodId::Laugh => "laugh",
            MoodId::Smile => "smile",
            MoodId::Meh => "meh",
            MoodId::Frown => "frown",
            MoodId::Sad => "sad",
        }
    }

    /// Position of this mood in the palette
    pub fn index(self) -> usize {
        match self {
            MoodId::Laugh => 0,
            MoodId::Smile => 1,
            MoodId::Meh => 2,
            MoodId::Frown => 3,
            MoodId::Sad => 4,
        }
    }

    /// Parse an optional mood where `none` disarms
    pub fn parse_optional(input: &str) -> Result<Option<MoodId>> {
        match input.trim().to_lowercase().as_str() {
            "none" | "off" | "-" => Ok(None),
            _ => input.parse().map(Some),
        }
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MoodId {
    type Err = MoodcalError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        PALETTE
            .iter()
            .find(|entry| entry.mood.name() == normalized || entry.icon == normalized)
            .map(|entry| entry.mood)
            .ok_or_else(|| MoodcalError::UnknownMoodId(s.to_string()))
    }
}

/// A 24-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One palette entry: mood, its color and the key of its icon asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub mood: MoodId,
    pub color: Rgb,
    pub icon: &'static str,
}

/// The mood palette, in the order mood buttons are shown
pub const PALETTE: [PaletteEntry; 5] = [
    PaletteEntry {
        mood: MoodId::Laugh,
        color: Rgb::new(0x2d, 0x6b, 0x5f),
        icon: "laugh",
    },
    PaletteEntry {
        mood: MoodId::Smile,
        color: Rgb::new(0x72, 0xe3, 0xa6),
        icon: "smile",
    },
    PaletteEntry {
        mood: MoodId::Meh,
        color: Rgb::new(0xdf, 0xf4, 0xc7),
        icon: "meh",
    },
    PaletteEntry {
        mood: MoodId::Frown,
        color: Rgb::new(0xed, 0xbf, 0x98),
        icon: "frown",
    },
    PaletteEntry {
        mood: MoodId::Sad,
        color: Rgb::new(0xea, 0x3d, 0x36),
        icon: "sad-tear",
    },
];

/// Color of a day with no mood set
pub const UNSET_COLOR: Rgb = Rgb::new(0x88, 0x88, 0x88);

fn entry_of(mood: MoodId) -> Result<&'static PaletteEntry> {
    PALETTE
        .iter()
        .find(|entry| entry.mood == mood)
        .ok_or_else(|| MoodcalError::UnknownMoodId(mood.to_string()))
}

/// Look up the palette color of a mood
pub fn color_of(mood: MoodId) -> Result<Rgb> {
    entry_of(mood).map(|entry| entry.color)
}

/// Look up the icon key of a mood
pub fn icon_of(mood: MoodId) -> Result<&'static str> {
    entry_of(mood).map(|entry| entry.icon)
}

/// Color to paint a day cell with, `UNSET_COLOR` when no mood is set
pub fn display_color(mood: Option<MoodId>) -> Rgb {
    mood.and_then(|m| color_of(m).ok()).unwrap_or(UNSET_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order_matches_index() {
        assert_eq!(PALETTE.len(), 5);
        for (i, entry) in PALETTE.iter().enumerate() {
            assert_eq!(entry.mood.index(), i);
            assert_eq!(MoodId::ALL[i], entry.mood);
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(color_of(MoodId::Laugh).unwrap().to_string(), "#2d6b5f");
        assert_eq!(color_of(MoodId::Smile).unwrap().to_string(), "#72e3a6");
        assert_eq!(color_of(MoodId::Meh).unwrap().to_string(), "#dff4c7");
        assert_eq!(color_of(MoodId::Frown).unwrap().to_string(), "#edbf98");
        assert_eq!(color_of(MoodId::Sad).unwrap().to_string(), "#ea3d36");
    }

    #[test]
    fn test_colors_are_distinct_from_unset() {
        for mood in MoodId::ALL {
            assert_ne!(display_color(Some(mood)), UNSET_COLOR);
        }
        assert_eq!(display_color(None), UNSET_COLOR);
        assert_eq!(UNSET_COLOR.to_string(), "#888888");
    }

    #[test]
    fn test_icons() {
        assert_eq!(icon_of(MoodId::Sad).unwrap(), "sad-tear");
        assert_eq!(icon_of(MoodId::Meh).unwrap(), "meh");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("smile".parse::<MoodId>().unwrap(), MoodId::Smile);
        assert_eq!("LAUGH".parse::<MoodId>().unwrap(), MoodId::Laugh);
        assert_eq!("sad-tear".parse::<MoodId>().unwrap(), MoodId::Sad);
        assert_eq!(" frown ".parse::<MoodId>().unwrap(), MoodId::Frown);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "grumpy".parse::<MoodId>().unwrap_err();
        assert!(matches!(err, MoodcalError::UnknownMoodId(ref s) if s == "grumpy"));
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(MoodId::parse_optional("none").unwrap(), None);
        assert_eq!(MoodId::parse_optional("Meh").unwrap(), Some(MoodId::Meh));
        assert!(MoodId::parse_optional("").is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mood: MoodId,
        }
        let w: Wrapper = toml::from_str("mood = \"frown\"").unwrap();
        assert_eq!(w.mood, MoodId::Frown);
    }
}
