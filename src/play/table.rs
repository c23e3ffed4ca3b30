use super::config::Config;
use super::config::Setting;
use super::event::Event;
use super::player::Player;
use super::rotation;
use super::sink::Sink;
use super::street::Phase;
use super::street::Street;
use crate::Chips;
use crate::MAX_SEATS;
use crate::Position;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hole;
use crate::cards::Strength;
use crate::pot::Level;
use crate::pot::Pot;
use crate::roster::Roster;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::VecDeque;
use std::time::SystemTime;

/// What the table is doing once an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// waiting on the current player
    Waiting,
    /// hand over, deal the next one
    Finished,
    /// game over
    Stopped,
}

/// One poker table.
///
/// Owns the seats, deck, board and pot ledger, and moves a hand from deal
/// to showdown as betting actions arrive. Betting actions name the player
/// who sent them and are ignored unless it is that player's turn. Money
/// moves only through the [`Pot`]; everything the players should hear goes
/// out through the [`Sink`], and lasting results go to the [`Roster`].
///
/// Seats keep join order. `turn` points at the player to act, `last` at
/// the player whose action closes the round, and `button` at the player
/// who starts each hand; the button moves one seat per hand.
pub struct Table<S, R> {
    config: Config,
    players: Vec<Player>,
    queue: VecDeque<String>,
    deck: Deck,
    board: Vec<Card>,
    pot: Pot,
    turn: Position,
    last: Position,
    button: Position,
    phase: Phase,
    revealed: bool,
    activity: Option<SystemTime>,
    rng: SmallRng,
    sink: S,
    roster: R,
}

impl<S, R> Table<S, R>
where
    S: Sink,
    R: Roster,
{
    pub fn new(config: Config, sink: S, roster: R) -> Self {
        Self::with_rng(config, SmallRng::from_rng(&mut rand::rng()), sink, roster)
    }
    /// A table whose shuffles repeat for the same seed.
    pub fn seeded(config: Config, seed: u64, sink: S, roster: R) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed), sink, roster)
    }
    fn with_rng(config: Config, rng: SmallRng, sink: S, roster: R) -> Self {
        Self {
            config,
            rng,
            sink,
            roster,
            players: Vec::new(),
            queue: VecDeque::new(),
            deck: Deck::default(),
            board: Vec::new(),
            pot: Pot::default(),
            turn: 0,
            last: 0,
            button: 0,
            phase: Phase::Waiting,
            revealed: false,
            activity: None,
        }
    }
}

/// Accessors.
impl<S, R> Table<S, R> {
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn queued(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn pot(&self) -> &Pot {
        &self.pot
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn button(&self) -> Position {
        self.button
    }
    pub fn is_game_in_progress(&self) -> bool {
        self.phase.in_progress()
    }
    /// The player whose turn it is, while a street is open.
    pub fn current(&self) -> Option<&Player> {
        match self.phase {
            Phase::Betting(_) => self.players.get(self.turn),
            _ => None,
        }
    }
    pub fn last_activity(&self) -> Option<SystemTime> {
        self.activity
    }
    pub fn sink(&self) -> &S {
        &self.sink
    }
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
    pub fn roster(&self) -> &R {
        &self.roster
    }
    /// Seat of an active player.
    pub fn seat(&self, id: &str) -> Option<Position> {
        self.players
            .iter()
            .position(|p| p.id() == id && p.is_active())
    }
}

/// Betting actions. Each returns whether it was accepted.
impl<S, R> Table<S, R>
where
    S: Sink,
    R: Roster,
{
    pub fn call(&mut self, id: &str) -> bool {
        let Some(i) = self.verify(id) else {
            return false;
        };
        self.touch();
        let amount = self.pot.call(&mut self.players[i]);
        self.emit(Event::Called {
            player: id.to_string(),
            amount,
        });
        self.proceed();
        true
    }

    pub fn check(&mut self, id: &str) -> bool {
        let Some(i) = self.verify(id) else {
            return false;
        };
        self.touch();
        if self.pot.check(&self.players[i]) {
            self.emit(Event::Checked {
                player: id.to_string(),
            });
            self.proceed();
            true
        } else {
            let owed = self.pot.total_owed(id);
            log::debug!("{} cannot check, owes {}", id, owed);
            self.emit(Event::MustCall {
                player: id.to_string(),
                owed,
            });
            false
        }
    }

    /// Raises the table bet by `amount` on top of what the player owes.
    pub fn raise(&mut self, id: &str, amount: Chips) -> bool {
        let Some(i) = self.verify(id) else {
            return false;
        };
        self.touch();
        let before = self.pot.total_contribution(id);
        match self.pot.raise(&mut self.players[i], amount) {
            None => {
                let stack = self.players[i].stack();
                self.emit(Event::CannotRaise {
                    player: id.to_string(),
                    stack,
                });
                false
            }
            Some(0) => {
                let amount = self.pot.total_contribution(id) - before;
                self.emit(Event::Called {
                    player: id.to_string(),
                    amount,
                });
                self.proceed();
                true
            }
            Some(raised) => {
                self.emit(Event::Raised {
                    player: id.to_string(),
                    amount: raised,
                });
                self.reopen();
                self.proceed();
                true
            }
        }
    }

    pub fn all_in(&mut self, id: &str) -> bool {
        let Some(i) = self.verify(id) else {
            return false;
        };
        self.touch();
        let raised = self.pot.all_in(&mut self.players[i]);
        self.emit(Event::AllIn {
            player: id.to_string(),
        });
        if raised > 0 {
            self.reopen();
        }
        self.proceed();
        true
    }

    pub fn fold(&mut self, id: &str) -> bool {
        let Some(i) = self.verify(id) else {
            return false;
        };
        self.touch();
        self.players[i].fold();
        self.emit(Event::Folded {
            player: id.to_string(),
        });
        if !self.fold_out() {
            self.proceed();
        }
        true
    }

    /// Leaves the game with the current stack. Allowed at any time during
    /// a game; chips already in the pot stay there.
    pub fn cashout(&mut self, id: &str) -> bool {
        if !self.is_game_in_progress() {
            return false;
        }
        let Some(i) = self.seat(id) else {
            return false;
        };
        self.touch();
        let on_turn = self.current().is_some() && self.turn == i;
        self.players[i].cashout();
        let amount = self.players[i].stack();
        let profit = self.players[i].profit();
        log::info!("{} cashed out with {} ({:+})", id, amount, profit);
        self.emit(Event::CashedOut {
            player: id.to_string(),
            amount,
        });
        self.roster.modify_money(id, profit);
        if self.fold_out() {
            return true;
        }
        if on_turn {
            self.proceed();
        } else if self.last == i {
            self.last = rotation::last_unfolded(&self.players, i);
        }
        true
    }
}

/// Seating and game lifecycle.
impl<S, R> Table<S, R>
where
    S: Sink,
    R: Roster,
{
    pub fn register_player(&mut self, id: &str) -> bool {
        if self.is_game_in_progress() {
            self.announce(
                "A game is already in progress! Use the buyin command if you still want to join",
            );
            return false;
        }
        if self.seat(id).is_some() {
            self.announce(format!("{} has already joined.", id));
            return false;
        }
        if self.players.len() >= MAX_SEATS {
            self.announce("The table is full.");
            return false;
        }
        self.players.push(Player::from((id, self.config.start_stash)));
        self.announce(format!("{} has joined the game.", id));
        true
    }

    /// Joins now if no game is running, otherwise at the next hand.
    pub fn buyin(&mut self, id: &str) -> bool {
        if !self.is_game_in_progress() {
            self.announce(format!(
                "{}: Game hasn't started yet, putting you up for the game",
                id
            ));
            return self.register_player(id);
        }
        if self.seat(id).is_some() {
            self.announce(format!("{}: You're already in the game.", id));
            return false;
        }
        if self.queue.iter().any(|q| q == id) {
            self.announce(format!("{}: You've already bought in", id));
            return false;
        }
        if self.players.len() + self.queue.len() >= MAX_SEATS {
            self.announce("The table is full.");
            return false;
        }
        self.queue.push_back(id.to_string());
        self.announce(format!(
            "{} has bought in the game, will join on next hand.",
            id
        ));
        true
    }

    /// Leaves before the game starts, or cancels a pending buy-in.
    pub fn unjoin(&mut self, id: &str) -> bool {
        if self.is_game_in_progress() {
            if let Some(q) = self.queue.iter().position(|q| q == id) {
                self.queue.remove(q);
                self.announce(format!("{}: Your buyin was nulled.", id));
                true
            } else if self.seat(id).is_some() {
                self.announce(format!(
                    "{}: Cannot unjoin game in progress. Use cashout command.",
                    id
                ));
                false
            } else {
                self.announce(format!("{}: You are not part of the active game.", id));
                false
            }
        } else if let Some(i) = self.seat(id) {
            self.players.remove(i);
            log::debug!("{} unjoined", id);
            self.announce(format!("{}: You have unjoined.", id));
            true
        } else {
            self.announce(format!("{}: You never joined.", id));
            false
        }
    }

    /// The player disconnected.
    pub fn player_left(&mut self, id: &str) -> bool {
        if let Some(q) = self.queue.iter().position(|q| q == id) {
            self.queue.remove(q);
            log::debug!("dropped pending buyin of {}", id);
        }
        if self.seat(id).is_none() {
            return false;
        }
        match self.is_game_in_progress() {
            true => self.cashout(id),
            false => self.unjoin(id),
        }
    }

    pub fn clear_players(&mut self) -> bool {
        if self.is_game_in_progress() {
            return false;
        }
        self.players.clear();
        self.queue.clear();
        true
    }

    /// Starts a game with everyone seated. Needs at least two players.
    pub fn start_game(&mut self) -> bool {
        if self.is_game_in_progress() || self.players.len() < 2 {
            return false;
        }
        let names = self
            .players
            .iter()
            .map(Player::id)
            .collect::<Vec<&str>>()
            .join(", ");
        log::info!("starting game with {}", names);
        self.announce(format!("Starting game with: {}.", names));
        for player in self.players.iter_mut() {
            player.reset_stack(self.config.start_stash);
            self.roster.track_game(player.id());
        }
        self.button = 0;
        self.phase = Phase::Dealing;
        let flow = self.setup_hand();
        self.settle(flow);
        true
    }

    /// Ends the game. Chips committed to an unfinished hand go back to
    /// their owners before results are recorded.
    pub fn stop_game(&mut self) {
        if !self.is_game_in_progress() {
            return;
        }
        log::info!("stopping game");
        for player in self.players.iter_mut().filter(|p| p.is_active()) {
            player.win(self.pot.total_contribution(player.id()));
            self.roster.modify_money(player.id(), player.profit());
        }
        let players = self
            .players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| (p.id().to_string(), p.stack()))
            .collect();
        self.pot.reset();
        self.players.clear();
        self.queue.clear();
        self.board.clear();
        self.deck = Deck::default();
        self.phase = Phase::Waiting;
        self.emit(Event::GameEnded { players });
        self.save();
    }
}

/// Table talk.
impl<S, R> Table<S, R>
where
    S: Sink,
    R: Roster,
{
    pub fn show_pot(&mut self) {
        let text = self
            .pot
            .levels()
            .iter()
            .enumerate()
            .map(|(i, level)| match i {
                0 => format!("Main pot: {}", level.money()),
                _ => format!("Side pot: {}", level.money()),
            })
            .collect::<Vec<String>>()
            .join(", ");
        self.announce(text);
    }

    pub fn show_current(&mut self) {
        let Some((current, stack)) = self.current().map(|p| (p.id().to_string(), p.stack()))
        else {
            self.announce("Not currently playing.");
            return;
        };
        let text = format!("{} has ${}", current, stack);
        self.emit(Event::TableUpdated {
            board: self.board.clone(),
            pot: self.pot.total_money(),
            current: Some(current),
        });
        self.announce(text);
    }

    /// Reviews an option when `value` is `None`, otherwise changes it.
    pub fn configure(&mut self, option: &str, value: Option<&str>) -> bool {
        let setting = match Setting::try_from(option) {
            Ok(setting) => setting,
            Err(e) => {
                self.announce(e.to_string());
                return false;
            }
        };
        match value {
            None => {
                let text = self.config.review(setting);
                self.announce(text);
                true
            }
            Some(_) if self.is_game_in_progress() => {
                self.announce(
                    "Can only change table configuration when a game is not in progress.",
                );
                false
            }
            Some(value) => match self.config.update(setting, value) {
                Ok(text) => {
                    log::info!("table config now {:?}", self.config);
                    self.announce(text);
                    true
                }
                Err(e) => {
                    self.announce(e.to_string());
                    false
                }
            },
        }
    }

    pub fn announce(&mut self, text: impl Into<String>) {
        self.emit(Event::Announce(text.into()));
    }
}

/// Hand progression.
impl<S, R> Table<S, R>
where
    S: Sink,
    R: Roster,
{
    fn verify(&self, id: &str) -> Option<Position> {
        self.current()
            .filter(|p| p.id() == id)
            .map(|_| self.turn)
    }

    fn proceed(&mut self) {
        let flow = self.advance();
        self.settle(flow);
    }

    /// Deals hand after hand until one needs a player's input.
    fn settle(&mut self, mut flow: Flow) {
        while flow == Flow::Finished {
            flow = self.setup_hand();
        }
    }

    /// The player before the raiser now closes the round.
    fn reopen(&mut self) {
        let n = self.players.len();
        self.last = rotation::last_unfolded(&self.players, rotation::wrapped_decrement(n, self.turn));
    }

    /// Moves the turn to the next player who can act, dealing streets and
    /// resolving the showdown as rounds complete.
    fn advance(&mut self) -> Flow {
        loop {
            self.pot.new_turn();
            self.reveal_once();
            if self.round_complete() {
                if self.board.len() == 5 {
                    self.showdown();
                    self.rotate_button();
                    return Flow::Finished;
                }
                let n = self.players.len();
                self.turn = rotation::wrapped_decrement(n, self.button);
                self.last = rotation::last_unfolded(&self.players, self.turn);
                self.deal_street();
            }
            self.turn = rotation::next_eligible(&self.players, self.turn);
            if self.betting_closed() {
                self.emit(Event::TableUpdated {
                    board: self.board.clone(),
                    pot: self.pot.total_money(),
                    current: None,
                });
                continue;
            }
            if self.players[self.turn].is_all_in() {
                let id = self.players[self.turn].id().to_string();
                self.announce(format!("{} is all-in, next player...", id));
                continue;
            }
            self.send_status();
            return Flow::Waiting;
        }
    }

    fn round_complete(&self) -> bool {
        let current = &self.players[self.turn];
        self.betting_closed()
            || (self.turn == self.last
                && (current.is_out() || current.is_broke() || self.pot.cleared(current.id())))
    }

    /// No one is left who could still change the bet: every live player
    /// is all-in, or one is not and already matches the table bet.
    fn betting_closed(&self) -> bool {
        let live = self.players.iter().filter(|p| rotation::eligible(p)).count();
        let actionable = self
            .players
            .iter()
            .filter(|p| rotation::eligible(p) && !p.is_all_in())
            .collect::<Vec<&Player>>();
        match actionable.as_slice() {
            [] => true,
            [only] => live > 1 && self.pot.cleared(only.id()),
            _ => false,
        }
    }

    /// Shows the live hands the first time betting closes in a hand.
    fn reveal_once(&mut self) {
        if self.revealed || !self.betting_closed() {
            return;
        }
        self.revealed = true;
        let hands = self.hands(self.players.iter().filter(|p| !p.is_out()));
        self.emit(Event::Reveal(hands));
    }

    fn deal_street(&mut self) {
        let street = Street::from(self.board.len());
        for _ in 0..street.n_revealed() {
            let card = self.deck.draw().expect("deck covers the board");
            self.board.push(card);
        }
        self.phase = Phase::Betting(street.next());
        log::debug!("dealt {}", street.next());
    }

    fn send_status(&mut self) {
        let player = self.players[self.turn].id().to_string();
        self.emit(Event::TableUpdated {
            board: self.board.clone(),
            pot: self.pot.total_money(),
            current: Some(player.clone()),
        });
        self.emit(Event::Turn { player });
    }

    /// Moves the button to the next seat that will still be at the table
    /// when the next hand is dealt.
    fn rotate_button(&mut self) {
        let n = self.players.len();
        let start = rotation::wrapped_increment(n, self.button);
        self.button = rotation::clockwise(n, start)
            .find(|i| self.players[*i].is_active() && !self.players[*i].is_broke())
            .unwrap_or(start);
    }

    /// Ends the hand when a single player is left in it.
    fn fold_out(&mut self) -> bool {
        let live = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_out())
            .map(|(i, _)| i)
            .collect::<Vec<Position>>();
        let [winner] = live.as_slice() else {
            return false;
        };
        let winner = *winner;
        let pot = self.pot.total_money();
        let player = self.players[winner].id().to_string();
        log::info!("{} wins {} by fold", player, pot);
        self.players[winner].win(pot);
        self.pot.reset();
        self.emit(Event::Winner {
            player,
            hand: None,
            pot,
        });
        self.rotate_button();
        self.settle(Flow::Finished);
        true
    }
}

/// Dealing and forced bets.
impl<S, R> Table<S, R>
where
    S: Sink,
    R: Roster,
{
    fn setup_hand(&mut self) -> Flow {
        for player in self.players.iter_mut() {
            if player.is_active() && player.is_broke() {
                player.cashout();
                self.roster.modify_money(player.id(), player.profit());
                log::info!("{} is broke", player.id());
            }
        }
        while let Some(id) = self.queue.pop_front() {
            self.players.push(Player::from((id.as_str(), self.config.start_stash)));
            self.roster.track_game(&id);
            log::info!("{} joined from the queue", id);
        }
        self.save();
        let gone = self
            .players
            .iter()
            .take(self.button)
            .filter(|p| !p.is_active())
            .count();
        self.button -= gone;
        self.players.retain(Player::is_active);
        if self.players.len() < 2 {
            log::info!("game ended with {} players", self.players.len());
            self.announce("Not enough players left to continue: game ended.");
            self.stop_game();
            return Flow::Stopped;
        }
        if self.button >= self.players.len() {
            self.button = 0;
        }
        self.announce("Starting new hand...");
        let n = self.players.len();
        for player in self.players.iter_mut() {
            player.reset_hand();
        }
        self.deck = Deck::shuffled(&mut self.rng);
        self.board.clear();
        self.pot.reset();
        self.revealed = false;
        self.turn = self.button;
        self.last = rotation::last_unfolded(&self.players, rotation::wrapped_decrement(n, self.button));
        self.phase = Phase::Dealing;
        let stacks = self
            .players
            .iter()
            .map(|p| (p.id().to_string(), p.stack()))
            .collect();
        self.emit(Event::Players(stacks));
        self.deal();
        self.collect_forced_bets();
        self.phase = Phase::Betting(Street::Preflop);
        log::info!("new hand, button {}", self.players[self.button].id());
        if self.players[self.turn].is_all_in() || self.betting_closed() {
            self.advance()
        } else {
            self.send_status();
            Flow::Waiting
        }
    }

    /// Two cards each. With spy cards on, everyone also sees one card from
    /// a random other player, except one unlucky player who gets a card
    /// from the deck that nobody holds.
    fn deal(&mut self) {
        let holes = self
            .players
            .iter()
            .map(|_| self.deck.hole().expect("deck covers every seat"))
            .collect::<Vec<Hole>>();
        for (player, hole) in self.players.iter_mut().zip(holes.iter()) {
            player.deal(*hole);
        }
        let n = self.players.len();
        let phony = match self.config.spy_cards {
            true => self
                .deck
                .draw()
                .map(|card| (self.rng.random_range(0..n), card)),
            false => None,
        };
        for (i, hole) in holes.iter().enumerate() {
            let spy = phony.map(|(unlucky, card)| match i == unlucky {
                true => card,
                false => {
                    let other = holes[(i + 1 + self.rng.random_range(0..n - 1)) % n];
                    match self.rng.random_bool(0.5) {
                        true => other.first(),
                        false => other.second(),
                    }
                }
            });
            self.emit(Event::Cards {
                player: self.players[i].id().to_string(),
                hole: *hole,
                spy,
            });
        }
    }

    /// Antes from everyone, then the small blind from the button and the
    /// big blind from the seat after it. The turn stays on the button.
    fn collect_forced_bets(&mut self) {
        let ante = self.config.ante;
        if ante > 0 {
            self.emit(Event::Ante { amount: ante });
            for player in self.players.iter_mut() {
                self.pot.collect_ante(player, ante);
            }
        }
        let big_blind = self.config.big_blind;
        if big_blind > 0 {
            let n = self.players.len();
            let s = self.turn;
            let b = rotation::wrapped_increment(n, s);
            let small = self.pot.collect_small_blind(&mut self.players[s], big_blind);
            let big = self.pot.collect_big_blind(&mut self.players[b], big_blind);
            self.emit(Event::Blinds {
                big: (self.players[b].id().to_string(), big),
                small: (self.players[s].id().to_string(), small),
            });
        }
    }
}

/// Showdown.
impl<S, R> Table<S, R>
where
    S: Sink,
    R: Roster,
{
    /// Pays every pot, main first. A side pot nobody live contributed to
    /// goes to the winners of the pot below it.
    fn showdown(&mut self) {
        self.phase = Phase::Showdown;
        let mut levels = Vec::<Level>::new();
        for level in self.pot.levels().to_vec() {
            let contested = level.participants().any(|id| self.is_live(id));
            match levels.last_mut() {
                Some(below) if !contested => below.absorb(level),
                _ => levels.push(level),
            }
        }
        for (i, level) in levels.iter().enumerate() {
            if i > 0 {
                self.announce("Checking for sidepot winnings...");
            }
            self.award(level);
        }
        self.pot.reset();
    }

    fn award(&mut self, level: &Level) {
        let n = self.players.len();
        let button = self.button;
        let order = rotation::clockwise(n, button)
            .filter(|i| !self.players[*i].is_out())
            .collect::<Vec<Position>>();
        let mut contenders = order
            .iter()
            .copied()
            .filter(|i| level.contains(self.players[*i].id()))
            .collect::<Vec<Position>>();
        if contenders.is_empty() {
            contenders = order;
        }
        let strengths = contenders
            .iter()
            .map(|i| (*i, self.strength(*i)))
            .collect::<Vec<(Position, Strength)>>();
        let best = strengths
            .iter()
            .map(|(_, s)| *s)
            .max()
            .expect("a pot always has a contender");
        let winners = strengths
            .iter()
            .filter(|(_, s)| *s == best)
            .map(|(i, _)| *i)
            .collect::<Vec<Position>>();
        let hands = self.hands(contenders.iter().map(|i| &self.players[*i]));
        self.emit(Event::Reveal(hands));
        let money = level.money();
        match winners.as_slice() {
            [winner] => {
                let player = self.players[*winner].id().to_string();
                log::info!("{} wins {} with {}", player, money, best);
                self.emit(Event::Winner {
                    player,
                    hand: Some(best),
                    pot: money,
                });
            }
            _ => {
                let winners = winners
                    .iter()
                    .map(|i| self.players[*i].id().to_string())
                    .collect::<Vec<String>>();
                log::info!("{} split {} with {}", winners.join(", "), money, best);
                self.emit(Event::SplitPot {
                    winners,
                    hand: best,
                    pot: money,
                });
            }
        }
        let mut seats = self
            .players
            .iter_mut()
            .enumerate()
            .filter(|(i, _)| winners.contains(i))
            .collect::<Vec<(Position, &mut Player)>>();
        seats.sort_by_key(|(i, _)| (i + n - button) % n);
        let mut paid = seats.into_iter().map(|(_, p)| p).collect::<Vec<&mut Player>>();
        level.split(&mut paid);
    }

    fn strength(&self, i: Position) -> Strength {
        let hole = self.players[i].cards().expect("live players hold cards");
        Strength::from((hole, &self.board[..]))
    }

    fn hands<'a>(&self, players: impl Iterator<Item = &'a Player>) -> Vec<(String, Hole)> {
        players
            .filter_map(|p| p.cards().map(|hole| (p.id().to_string(), hole)))
            .collect()
    }

    fn is_live(&self, id: &str) -> bool {
        self.players.iter().any(|p| p.id() == id && !p.is_out())
    }
}

/// Plumbing.
impl<S, R> Table<S, R>
where
    S: Sink,
    R: Roster,
{
    fn emit(&mut self, event: Event) {
        match event.is_private() {
            true => log::debug!("(private) {:?}", event),
            false => log::debug!("{}", event),
        }
        self.sink.emit(event);
    }

    fn touch(&mut self) {
        self.activity = Some(SystemTime::now());
    }

    fn save(&mut self) {
        if let Err(e) = self.roster.save() {
            log::warn!("failed to save roster: {:#}", e);
        }
    }
}

impl<S, R> std::fmt::Display for Table<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} | button {} | {}", self.phase, self.button, self.pot)?;
        for (i, player) in self.players.iter().enumerate() {
            let marker = if i == self.turn { ">" } else { " " };
            writeln!(f, "{} {}", marker, player)?;
        }
        Ok(())
    }
}
