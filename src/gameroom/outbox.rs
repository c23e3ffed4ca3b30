use crate::play::Event;
use crate::play::Sink;
use tokio::sync::mpsc::UnboundedSender;

/// Sink that forwards a table's events, tagged with its chat channel.
#[derive(Debug, Clone)]
pub struct Outbox {
    channel: String,
    tx: UnboundedSender<(String, Event)>,
}

impl Outbox {
    pub fn new(channel: &str, tx: UnboundedSender<(String, Event)>) -> Self {
        Self {
            channel: channel.to_string(),
            tx,
        }
    }
    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl Sink for Outbox {
    fn emit(&mut self, event: Event) {
        self.tx
            .send((self.channel.clone(), event))
            .err()
            .inspect(|e| log::warn!("failed to deliver to {}: {:?}", self.channel, e.0.1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn events_are_tagged_with_the_channel() {
        let (tx, mut rx) = unbounded_channel();
        let mut outbox = Outbox::new("#poker", tx);
        outbox.emit(Event::Announce("hi".into()));
        assert_eq!(rx.try_recv().unwrap(), ("#poker".to_string(), Event::Announce("hi".into())));
    }

    #[test]
    fn closed_receivers_are_tolerated() {
        let (tx, rx) = unbounded_channel();
        drop(rx);
        let mut outbox = Outbox::new("#gone", tx);
        outbox.emit(Event::Announce("nobody listens".into()));
        assert_eq!(outbox.channel(), "#gone");
    }
}
