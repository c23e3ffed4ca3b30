use super::event::Event;

/// Where a table delivers its events.
///
/// Delivery never fails from the table's point of view; a sink that can
/// lose events logs the failure itself.
pub trait Sink {
    fn emit(&mut self, event: Event);
}

/// Collects everything, in order. Handy for tests and replays.
impl Sink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}
