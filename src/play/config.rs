use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// Per-table settings. Changed only between games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub big_blind: Chips,
    pub ante: Chips,
    pub start_stash: Chips,
    pub spy_cards: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            big_blind: crate::B_BLIND,
            ante: crate::ANTE,
            start_stash: crate::STACK,
            spy_cards: false,
        }
    }
}

/// The options a player can review or change from chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    BigBlind,
    Ante,
    StartStash,
    SpyCards,
}

impl TryFrom<&str> for Setting {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "bigblind" => Ok(Self::BigBlind),
            "ante" => Ok(Self::Ante),
            "startstash" => Ok(Self::StartStash),
            "spycards" => Ok(Self::SpyCards),
            _ => Err(anyhow::anyhow!("Unrecognized option: {}", s)),
        }
    }
}

impl Config {
    /// Describes the current value of a setting.
    pub fn review(&self, setting: Setting) -> String {
        match setting {
            Setting::BigBlind if self.big_blind == 0 => "Blinds are disabled on this table.".into(),
            Setting::BigBlind => format!("The big blind is currently set to {}.", self.big_blind),
            Setting::Ante if self.ante == 0 => "Antes are disabled on this table.".into(),
            Setting::Ante => format!("The ante is currently set to {}.", self.ante),
            Setting::StartStash => {
                format!("The starting stash is currently set to {}.", self.start_stash)
            }
            Setting::SpyCards if self.spy_cards => "Spycards are currently enabled.".into(),
            Setting::SpyCards => "Spycards are currently disabled.".into(),
        }
    }

    /// Parses and applies a new value. Negative amounts become 0 and the
    /// starting stash never drops below 1. Malformed input leaves the
    /// config untouched and the error carries the message to show.
    pub fn update(&mut self, setting: Setting, value: &str) -> anyhow::Result<String> {
        match setting {
            Setting::BigBlind => {
                let chips = Self::chips(value)
                    .ok_or_else(|| anyhow::anyhow!("Invalid value for blind : {}", value))?;
                self.big_blind = chips;
                Ok(format!("Changed big blind to {}.", chips))
            }
            Setting::Ante => {
                let chips = Self::chips(value)
                    .ok_or_else(|| anyhow::anyhow!("Invalid value for ante : {}", value))?;
                self.ante = chips;
                Ok(format!("Changed ante to {}.", chips))
            }
            Setting::StartStash => {
                let chips = Self::chips(value)
                    .ok_or_else(|| anyhow::anyhow!("Invalid value for starting stash : {}", value))?
                    .max(1);
                self.start_stash = chips;
                Ok(format!("Changed starting stash to {}.", chips))
            }
            Setting::SpyCards => {
                let spy = Self::toggle(value).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Invalid value for spycards: {}. Use only true or false.",
                        value
                    )
                })?;
                self.spy_cards = spy;
                Ok(format!("Spycards enabled: {}", spy))
            }
        }
    }

    fn chips(value: &str) -> Option<Chips> {
        value
            .trim()
            .parse::<i64>()
            .ok()
            .map(|n| n.max(0))
            .and_then(|n| Chips::try_from(n).ok())
    }

    fn toggle(value: &str) -> Option<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "on" => Some(true),
            "false" | "off" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amounts_clamp() {
        let mut config = Config::default();
        assert_eq!(
            config.update(Setting::Ante, "-5").unwrap(),
            "Changed ante to 0."
        );
        assert_eq!(config.ante, 0);
        assert_eq!(config.review(Setting::Ante), "Antes are disabled on this table.");
        config.update(Setting::StartStash, "0").unwrap();
        assert_eq!(config.start_stash, 1);
    }

    #[test]
    fn malformed_values_leave_config_alone() {
        let mut config = Config::default();
        let error = config.update(Setting::BigBlind, "ten").unwrap_err();
        assert_eq!(error.to_string(), "Invalid value for blind : ten");
        assert!(config.update(Setting::BigBlind, "99999999999").is_err());
        assert!(config.update(Setting::SpyCards, "maybe").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn spy_cards_toggle() {
        let mut config = Config::default();
        assert_eq!(config.update(Setting::SpyCards, "on").unwrap(), "Spycards enabled: true");
        assert_eq!(config.review(Setting::SpyCards), "Spycards are currently enabled.");
    }

    #[test]
    fn unknown_setting() {
        let error = Setting::try_from("rake").unwrap_err();
        assert_eq!(error.to_string(), "Unrecognized option: rake");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = serde_json::from_str::<Config>(r#"{"ante": 5}"#).unwrap();
        assert_eq!(config.ante, 5);
        assert_eq!(config.big_blind, crate::B_BLIND);
    }
}
