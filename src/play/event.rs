use crate::Chips;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Strength;

/// Everything a table tells the outside world.
///
/// Events carry player identifiers and amounts, never formatting. The
/// Display impl renders the plain chat line; a front end is free to
/// render them any other way. `Cards` is the only private event and is
/// addressed to its player through [`Event::recipient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Announce(String),
    Reply {
        to: String,
        text: String,
    },
    Called {
        player: String,
        amount: Chips,
    },
    Raised {
        player: String,
        amount: Chips,
    },
    Checked {
        player: String,
    },
    Folded {
        player: String,
    },
    AllIn {
        player: String,
    },
    CashedOut {
        player: String,
        amount: Chips,
    },
    TableUpdated {
        board: Vec<Card>,
        pot: Chips,
        current: Option<String>,
    },
    MustCall {
        player: String,
        owed: Chips,
    },
    CannotRaise {
        player: String,
        stack: Chips,
    },
    Cards {
        player: String,
        hole: Hole,
        spy: Option<Card>,
    },
    Players(Vec<(String, Chips)>),
    Reveal(Vec<(String, Hole)>),
    Winner {
        player: String,
        hand: Option<Strength>,
        pot: Chips,
    },
    SplitPot {
        winners: Vec<String>,
        hand: Strength,
        pot: Chips,
    },
    Turn {
        player: String,
    },
    Ante {
        amount: Chips,
    },
    Blinds {
        big: (String, Chips),
        small: (String, Chips),
    },
    GameEnded {
        players: Vec<(String, Chips)>,
    },
}

impl Event {
    /// The only player allowed to see this event, if it is private.
    pub fn recipient(&self) -> Option<&str> {
        match self {
            Self::Cards { player, .. } => Some(player),
            _ => None,
        }
    }
    pub fn is_private(&self) -> bool {
        self.recipient().is_some()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Announce(text) => write!(f, "{}", text),
            Self::Reply { to, text } => write!(f, "{}: {}", to, text),
            Self::Called { player, amount } => write!(f, "{} called! (${})", player, amount),
            Self::Raised { player, amount } => write!(f, "{} raised ${}.", player, amount),
            Self::Checked { player } => write!(f, "{} checked.", player),
            Self::Folded { player } => write!(f, "{} folded.", player),
            Self::AllIn { player } => write!(f, "{} goes all in!", player),
            Self::CashedOut { player, amount } => {
                write!(f, "{} cashed out with ${}!", player, amount)
            }
            Self::TableUpdated {
                board,
                pot,
                current,
            } => {
                write!(f, "On the table: ")?;
                match board.is_empty() {
                    true => write!(f, "no cards")?,
                    false => write!(f, "{}", join(board.iter()))?,
                }
                write!(f, " || In the pot: ${}", pot)?;
                match current {
                    Some(player) => write!(f, " || Current player: {}", player),
                    None => Ok(()),
                }
            }
            Self::MustCall { player, owed } => {
                write!(f, "{} must at least call last raise (${}).", player, owed)
            }
            Self::CannotRaise { player, stack } => write!(
                f,
                "{} doesn't have enough money to make the raise. They only have ${}.",
                player, stack
            ),
            Self::Cards { hole, spy, .. } => {
                write!(f, "Your cards: {}, {}", hole.first(), hole.second())?;
                match spy {
                    Some(card) => write!(f, ". Spied card: {}", card),
                    None => Ok(()),
                }
            }
            Self::Players(players) => write!(
                f,
                "{}",
                join_with(players.iter().map(|(p, c)| format!("[{} - ${}]", p, c)), " ")
            ),
            Self::Reveal(hands) => write!(
                f,
                "{}",
                join_with(
                    hands
                        .iter()
                        .map(|(p, h)| format!("[{} - {}, {}]", p, h.first(), h.second())),
                    " "
                )
            ),
            Self::Winner { player, hand, pot } => {
                write!(f, "{} wins ${}", player, pot)?;
                if let Some(hand) = hand {
                    write!(f, " with the hand {}", hand)?;
                }
                write!(f, "!")
            }
            Self::SplitPot { winners, hand, pot } => write!(
                f,
                "Split pot of ${} between {} (each with a {}).",
                pot,
                join(winners.iter()),
                hand.label()
            ),
            Self::Turn { player } => write!(f, "{}'s turn!", player),
            Self::Ante { amount } => {
                write!(f, "Collecting a ${} ante from each player...", amount)
            }
            Self::Blinds { big, small } => write!(
                f,
                "Collecting blinds (${} from {}, ${} from {})",
                big.1, big.0, small.1, small.0
            ),
            Self::GameEnded { players } => write!(
                f,
                "Game ended. {}",
                join_with(players.iter().map(|(p, c)| format!("[{} - ${}]", p, c)), " ")
            ),
        }
    }
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    join_with(items, ", ")
}

fn join_with<T: ToString>(items: impl Iterator<Item = T>, separator: &str) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    fn cards(s: &str) -> Vec<Card> {
        Hand::try_from(s).unwrap().collect()
    }

    #[test]
    fn table_update_lines() {
        let empty = Event::TableUpdated {
            board: vec![],
            pot: 15,
            current: Some("alice".into()),
        };
        assert_eq!(
            empty.to_string(),
            "On the table: no cards || In the pot: $15 || Current player: alice"
        );
        let flop = Event::TableUpdated {
            board: cards("2c 3d 4h"),
            pot: 30,
            current: None,
        };
        assert!(flop.to_string().ends_with("|| In the pot: $30"));
    }

    #[test]
    fn only_cards_are_private() {
        let hand = cards("Ah Kd");
        let event = Event::Cards {
            player: "bob".into(),
            hole: Hole::from((hand[0], hand[1])),
            spy: None,
        };
        assert_eq!(event.recipient(), Some("bob"));
        assert!(!Event::Turn { player: "bob".into() }.is_private());
    }

    #[test]
    fn winner_without_hand() {
        let event = Event::Winner {
            player: "carol".into(),
            hand: None,
            pot: 40,
        };
        assert_eq!(event.to_string(), "carol wins $40!");
    }
}
