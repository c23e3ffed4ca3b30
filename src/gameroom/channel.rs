use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

/// Both ends of one unbounded queue, kept by whoever drains it.
/// Producers get clones of the sending end through [`Channel::tx`].
#[derive(Debug)]
pub struct Channel<T> {
    tx: UnboundedSender<T>,
    rx: UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl<T> Channel<T> {
    pub fn tx(&self) -> UnboundedSender<T> {
        self.tx.clone()
    }
    /// Next queued item. Never `None` while this channel holds its own sender.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_in_order() {
        let mut channel = Channel::default();
        let tx = channel.tx();
        tx.send(1).unwrap();
        tx.send(2).unwrap();
        assert_eq!(channel.recv().await, Some(1));
        assert_eq!(channel.recv().await, Some(2));
    }
}
