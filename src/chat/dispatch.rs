use super::command::Command;
use crate::play::Event;
use crate::play::Sink;
use crate::play::Table;
use crate::roster::Roster;
use std::time::SystemTime;

/// Turns chat lines from one channel into table calls.
///
/// Lines that do not start with the prefix are chatter and ignored.
/// Betting commands sent while no game runs are ignored as well.
pub struct Dispatcher<S, R> {
    table: Table<S, R>,
    prefix: char,
}

impl<S, R> Dispatcher<S, R>
where
    S: Sink,
    R: Roster,
{
    pub fn new(table: Table<S, R>, prefix: char) -> Self {
        Self { table, prefix }
    }
    pub fn table(&self) -> &Table<S, R> {
        &self.table
    }
    pub fn table_mut(&mut self) -> &mut Table<S, R> {
        &mut self.table
    }

    /// Handles one line sent by `nick`. Returns whether it was a command.
    pub fn handle(&mut self, nick: &str, line: &str) -> bool {
        let Some(body) = line.trim().strip_prefix(self.prefix) else {
            return false;
        };
        match Command::try_from(body) {
            Ok(Command::Ping) => self.reply(nick, line.trim()),
            Ok(command) => self.apply(nick, command),
            Err(e) => {
                log::debug!("{} sent {:?}: {}", nick, line, e);
                self.reply(nick, &e.to_string());
            }
        }
        true
    }

    /// The player disconnected from the channel.
    pub fn left(&mut self, nick: &str) {
        self.table.player_left(nick);
    }

    pub fn apply(&mut self, nick: &str, command: Command) {
        if command.is_betting() && !self.table.is_game_in_progress() {
            log::debug!("ignored {} from {} outside a game", command, nick);
            return;
        }
        log::debug!("{} -> {}", nick, command);
        match command {
            Command::Ping => self.reply(nick, "ping"),
            Command::Join => {
                self.table.register_player(nick);
            }
            Command::Unjoin => {
                self.table.unjoin(nick);
            }
            Command::Buyin => {
                self.table.buyin(nick);
            }
            Command::Pot => self.table.show_pot(),
            Command::Current => self.table.show_current(),
            Command::Players => self.players(),
            Command::Activity => self.activity(),
            Command::Stats(target) => self.stats(target.as_deref().unwrap_or(nick)),
            Command::Clear => match self.table.clear_players() {
                true => self.table.announce("Players list cleared."),
                false => self.reply(nick, "A game is already in progress."),
            },
            Command::Start if self.table.is_game_in_progress() => {}
            Command::Start if self.table.players().len() < 2 => {
                self.reply(nick, "Need at least 2 players to join before starting.")
            }
            Command::Start => {
                self.table.start_game();
            }
            Command::Stop => self.table.stop_game(),
            Command::Call => {
                self.table.call(nick);
            }
            Command::Check => {
                self.table.check(nick);
            }
            Command::Raise(amount) => {
                self.table.raise(nick, amount);
            }
            Command::AllIn => {
                self.table.all_in(nick);
            }
            Command::Fold => {
                self.table.fold(nick);
            }
            Command::Cashout => {
                self.table.cashout(nick);
            }
            Command::Config(option, value) => {
                self.table.configure(&option, value.as_deref());
            }
            Command::Help => self.reply(nick, Command::HELP),
        }
    }
}

impl<S, R> Dispatcher<S, R>
where
    S: Sink,
    R: Roster,
{
    fn players(&mut self) {
        let players = self.table.players();
        let text = match (players.is_empty(), self.table.is_game_in_progress()) {
            (true, _) => "No joined players.".to_string(),
            (false, true) => format!(
                "Now playing: {}.",
                players
                    .iter()
                    .filter(|p| p.is_active())
                    .map(|p| format!("{} ${}", p.id(), p.stack()))
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            (false, false) => format!(
                "Joined players: {}.",
                players
                    .iter()
                    .map(|p| p.id())
                    .collect::<Vec<&str>>()
                    .join(", ")
            ),
        };
        self.table.announce(text);
    }

    fn activity(&mut self) {
        let text = match self.table.last_activity() {
            None => "There hasn't been any activity on this table.".to_string(),
            Some(time) => format!(
                "Last activity: {}s ago",
                SystemTime::now()
                    .duration_since(time)
                    .unwrap_or_default()
                    .as_secs()
            ),
        };
        self.table.announce(text);
    }

    fn stats(&mut self, nick: &str) {
        let text = match self.table.roster().stats(nick) {
            Some(stats) => format!("{}: {}", nick, stats),
            None => format!("No stats tracked for {}", nick),
        };
        self.table.announce(text);
    }

    fn reply(&mut self, to: &str, text: &str) {
        self.table.sink_mut().emit(Event::Reply {
            to: to.to_string(),
            text: text.to_string(),
        });
    }
}
