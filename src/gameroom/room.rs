use super::*;
use crate::chat::Dispatcher;
use crate::play::Config;
use crate::play::Event;
use crate::play::Table;
use crate::roster::Roster;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// What a chat channel can tell its room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// a line of chat from `nick`
    Line { nick: String, text: String },
    /// `nick` left the channel or disconnected
    Left { nick: String },
}

/// Single owner of one table.
///
/// Every line for a chat channel is queued to its room and applied in
/// arrival order, so the table itself needs no locking. Events go out
/// through an [`Outbox`]. The room stops once every sender is dropped.
pub struct Room<R> {
    dispatcher: Dispatcher<Outbox, R>,
    inbox: UnboundedReceiver<Message>,
}

impl<R> Room<R>
where
    R: Roster + Send + 'static,
{
    /// Starts a room task for `channel` and returns its inbox.
    pub fn spawn(
        channel: &str,
        config: Config,
        prefix: char,
        roster: R,
        events: UnboundedSender<(String, Event)>,
    ) -> UnboundedSender<Message> {
        let (tx, rx) = unbounded_channel();
        let table = Table::new(config, Outbox::new(channel, events), roster);
        let room = Self {
            dispatcher: Dispatcher::new(table, prefix),
            inbox: rx,
        };
        log::info!("opened room {}", channel);
        tokio::spawn(room.run());
        tx
    }

    async fn run(mut self) {
        while let Some(message) = self.inbox.recv().await {
            self.handle(message);
        }
        let channel = self.dispatcher.table().sink().channel().to_string();
        if self.dispatcher.table().is_game_in_progress() {
            log::info!("room {} closing mid-game", channel);
            self.dispatcher.table_mut().stop_game();
        }
        log::info!("closed room {}", channel);
    }

    fn handle(&mut self, message: Message) {
        match message {
            Message::Line { nick, text } => {
                self.dispatcher.handle(&nick, &text);
            }
            Message::Left { nick } => self.dispatcher.left(&nick),
        }
    }
}
