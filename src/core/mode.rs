//! # Roast Modes
//!
//! The tone the backend should use. A closed set: the backend only knows
//! these five ids, so there is no "custom" variant.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Tone selector sent alongside the user's input.
///
/// Serializes to the wire id (`"roast2"`, `"badchick"`, ...).
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum RoastMode {
    #[default]
    Roast2,
    BadChick,
    Unhinged,
    Smartass,
    Clown,
}

impl RoastMode {
    /// Every mode, in dropdown order.
    pub const ALL: [RoastMode; 5] = [
        RoastMode::Roast2,
        RoastMode::BadChick,
        RoastMode::Unhinged,
        RoastMode::Smartass,
        RoastMode::Clown,
    ];

    /// Identifier the backend expects in the `mode` field.
    pub fn id(self) -> &'static str {
        match self {
            RoastMode::Roast2 => "roast2",
            RoastMode::BadChick => "badchick",
            RoastMode::Unhinged => "unhinged",
            RoastMode::Smartass => "smartass",
            RoastMode::Clown => "clown",
        }
    }

    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            RoastMode::Roast2 => "🔥 Roast 2.0",
            RoastMode::BadChick => "💅 Bad Chick",
            RoastMode::Unhinged => "🔞 Unhinged",
            RoastMode::Smartass => "🧠 Smartass",
            RoastMode::Clown => "🤡 Clown Mode",
        }
    }

    /// Position in [`RoastMode::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&m| m == self)
            .unwrap_or_default()
    }

    /// Looks up a mode by its wire id.
    pub fn from_id(id: &str) -> Option<RoastMode> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_roast2() {
        assert_eq!(RoastMode::default(), RoastMode::Roast2);
    }

    #[test]
    fn test_serde_uses_wire_id() {
        for mode in RoastMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.id()));
        }
    }

    #[test]
    fn test_deserialize_from_id() {
        let mode: RoastMode = serde_json::from_str("\"badchick\"").unwrap();
        assert_eq!(mode, RoastMode::BadChick);
        assert!(serde_json::from_str::<RoastMode>("\"spicy\"").is_err());
    }

    #[test]
    fn test_from_id() {
        assert_eq!(RoastMode::from_id("clown"), Some(RoastMode::Clown));
        assert_eq!(RoastMode::from_id("Clown"), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, mode) in RoastMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<_> = RoastMode::ALL.iter().map(|m| m.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), RoastMode::ALL.len());
    }

    #[test]
    fn test_cli_value_names() {
        let mode = RoastMode::from_str("smartass", false).unwrap();
        assert_eq!(mode, RoastMode::Smartass);
    }
}
