use super::*;
use crate::play::Config;
use crate::play::Event;
use crate::roster::Roster;
use crate::roster::Shared;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;

/// Routes chat traffic to one room per channel, opening rooms on first
/// contact. All rooms report to the same roster and their events come
/// back through one queue.
pub struct Lobby<R> {
    config: Config,
    prefix: char,
    roster: Shared<R>,
    rooms: HashMap<String, UnboundedSender<Message>>,
    events: Channel<(String, Event)>,
}

impl<R> Lobby<R>
where
    R: Roster + Send + 'static,
{
    pub fn new(config: Config, prefix: char, roster: Shared<R>) -> Self {
        Self {
            config,
            prefix,
            roster,
            rooms: HashMap::new(),
            events: Channel::default(),
        }
    }

    /// Queues a message for the room of `channel`.
    pub fn route(&mut self, channel: &str, message: Message) {
        let inbox = self.rooms.entry(channel.to_string()).or_insert_with(|| {
            Room::spawn(
                channel,
                self.config,
                self.prefix,
                self.roster.clone(),
                self.events.tx(),
            )
        });
        if let Err(e) = inbox.send(message) {
            log::warn!("room {} is gone, dropping {:?}", channel, e.0);
            self.rooms.remove(channel);
        }
    }

    /// Convenience for [`Lobby::route`] with a chat line.
    pub fn line(&mut self, channel: &str, nick: &str, text: &str) {
        self.route(
            channel,
            Message::Line {
                nick: nick.to_string(),
                text: text.to_string(),
            },
        );
    }

    /// Drops the room's inbox; the room stops any running game and exits.
    pub fn close(&mut self, channel: &str) -> anyhow::Result<()> {
        self.rooms
            .remove(channel)
            .map(|_| log::info!("closing room {}", channel))
            .ok_or_else(|| anyhow::anyhow!("no room for {}", channel))
    }

    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    /// Next event from any room, tagged with its channel.
    pub async fn recv(&mut self) -> Option<(String, Event)> {
        self.events.recv().await
    }
}
