use super::Roster;
use super::Stats;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// One roster behind a mutex, cloned into every table that reports to it.
#[derive(Debug, Default)]
pub struct Shared<R> {
    inner: Arc<Mutex<R>>,
}

impl<R> Clone for Shared<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> From<R> for Shared<R> {
    fn from(roster: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(roster)),
        }
    }
}

impl<R> Shared<R> {
    /// Recovers a poisoned lock. Every roster update is a single field write.
    fn lock(&self) -> MutexGuard<'_, R> {
        self.inner.lock().unwrap_or_else(|poison| {
            log::warn!("roster lock poisoned, recovering");
            poison.into_inner()
        })
    }
}

impl<R: Roster> Roster for Shared<R> {
    fn modify_money(&mut self, id: &str, delta: i64) {
        self.lock().modify_money(id, delta);
    }
    fn track_game(&mut self, id: &str) {
        self.lock().track_game(id);
    }
    fn save(&mut self) -> anyhow::Result<()> {
        self.lock().save()
    }
    fn stats(&self, id: &str) -> Option<Stats> {
        self.lock().stats(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Memory;

    #[test]
    fn clones_see_the_same_roster() {
        let mut a = Shared::from(Memory::default());
        let mut b = a.clone();
        a.track_game("alice");
        b.modify_money("alice", 10);
        assert_eq!(a.stats("alice"), b.stats("alice"));
        assert_eq!(b.stats("alice").map(|s| s.games), Some(1));
    }
}
