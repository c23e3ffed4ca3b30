use crate::Chips;

/// One chat command, prefix already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ping,
    Join,
    Unjoin,
    Buyin,
    Pot,
    Current,
    Players,
    Activity,
    Stats(Option<String>),
    Clear,
    Start,
    Stop,
    Call,
    Check,
    Raise(Chips),
    AllIn,
    Fold,
    Cashout,
    Config(String, Option<String>),
    Help,
}

impl Command {
    pub const HELP: &'static str = "Commands: join, unjoin, buyin, start, stop, call, check, \
        raise <amount>, allin, fold, cashout, pot, current, players, activity, stats [nick], \
        clear, config <option> [value], ping, help";

    /// Betting commands only mean something while a game runs.
    pub fn is_betting(&self) -> bool {
        matches!(
            self,
            Self::Call | Self::Check | Self::Raise(_) | Self::AllIn | Self::Fold | Self::Cashout
        )
    }

    fn amount(arg: Option<&str>) -> anyhow::Result<Chips> {
        let arg = arg.ok_or_else(|| anyhow::anyhow!("Specify an amount to raise by."))?;
        let n = arg
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("Malformed number: {}.", arg))?;
        if n <= 0 {
            return Err(anyhow::anyhow!("Can only raise by a positive amount."));
        }
        Chips::try_from(n).map_err(|_| anyhow::anyhow!("Malformed number: {}.", arg))
    }
}

/// Parses `verb [args...]`. Verbs are case-insensitive. The error text is
/// meant to be shown to whoever sent the line.
impl TryFrom<&str> for Command {
    type Error = anyhow::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .map(str::to_lowercase)
            .ok_or_else(|| anyhow::anyhow!("Empty command"))?;
        match verb.as_str() {
            "ping" => Ok(Self::Ping),
            "join" => Ok(Self::Join),
            "unjoin" => Ok(Self::Unjoin),
            "buyin" => Ok(Self::Buyin),
            "pot" => Ok(Self::Pot),
            "current" => Ok(Self::Current),
            "players" => Ok(Self::Players),
            "activity" => Ok(Self::Activity),
            "stats" => Ok(Self::Stats(words.next().map(String::from))),
            "clear" => Ok(Self::Clear),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "call" => Ok(Self::Call),
            "check" | "c" | "czech" => Ok(Self::Check),
            "raise" | "r" => Self::amount(words.next()).map(Self::Raise),
            "allin" => Ok(Self::AllIn),
            "fold" | "f" => Ok(Self::Fold),
            "cashout" => Ok(Self::Cashout),
            "config" => match (words.next(), words.next()) {
                (Some(option), value) => Ok(Self::Config(
                    option.to_lowercase(),
                    value.map(String::from),
                )),
                (None, _) => Err(anyhow::anyhow!(
                    "Specify an option to configure, followed by its new value."
                )),
            },
            "help" => Ok(Self::Help),
            _ => Err(anyhow::anyhow!("Unknown command: {}", verb)),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ping => write!(f, "ping"),
            Self::Join => write!(f, "join"),
            Self::Unjoin => write!(f, "unjoin"),
            Self::Buyin => write!(f, "buyin"),
            Self::Pot => write!(f, "pot"),
            Self::Current => write!(f, "current"),
            Self::Players => write!(f, "players"),
            Self::Activity => write!(f, "activity"),
            Self::Stats(None) => write!(f, "stats"),
            Self::Stats(Some(nick)) => write!(f, "stats {}", nick),
            Self::Clear => write!(f, "clear"),
            Self::Start => write!(f, "start"),
            Self::Stop => write!(f, "stop"),
            Self::Call => write!(f, "call"),
            Self::Check => write!(f, "check"),
            Self::Raise(amount) => write!(f, "raise {}", amount),
            Self::AllIn => write!(f, "allin"),
            Self::Fold => write!(f, "fold"),
            Self::Cashout => write!(f, "cashout"),
            Self::Config(option, None) => write!(f, "config {}", option),
            Self::Config(option, Some(value)) => write!(f, "config {} {}", option, value),
            Self::Help => write!(f, "help"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(line: &str) -> String {
        Command::try_from(line).unwrap_err().to_string()
    }

    #[test]
    fn aliases() {
        assert_eq!(Command::try_from("c").unwrap(), Command::Check);
        assert_eq!(Command::try_from("CZECH").unwrap(), Command::Check);
        assert_eq!(Command::try_from("f").unwrap(), Command::Fold);
        assert_eq!(Command::try_from("r 25").unwrap(), Command::Raise(25));
    }

    #[test]
    fn raise_needs_a_positive_amount() {
        assert_eq!(error("raise"), "Specify an amount to raise by.");
        assert_eq!(error("raise lots"), "Malformed number: lots.");
        assert_eq!(error("raise 0"), "Can only raise by a positive amount.");
        assert_eq!(error("raise -10"), "Can only raise by a positive amount.");
        assert_eq!(error("raise 99999999999"), "Malformed number: 99999999999.");
        assert_eq!(Command::try_from("raise 1").unwrap(), Command::Raise(1));
    }

    #[test]
    fn config_arguments() {
        assert_eq!(
            error("config"),
            "Specify an option to configure, followed by its new value."
        );
        assert_eq!(
            Command::try_from("config Ante").unwrap(),
            Command::Config("ante".into(), None)
        );
        assert_eq!(
            Command::try_from("config ante 5").unwrap(),
            Command::Config("ante".into(), Some("5".into()))
        );
    }

    #[test]
    fn unknown_verbs() {
        assert_eq!(error("dance"), "Unknown command: dance");
        assert!(Command::try_from("   ").is_err());
    }

    #[test]
    fn display_parses_back() {
        for line in ["stats bob", "raise 40", "config spycards on", "allin"] {
            assert_eq!(Command::try_from(line).unwrap().to_string(), line);
        }
    }
}
