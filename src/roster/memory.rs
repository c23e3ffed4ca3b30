use super::Roster;
use super::Stats;
use std::collections::BTreeMap;

/// Roster kept in memory only. Saving is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    players: BTreeMap<String, Stats>,
}

impl Memory {
    pub fn players(&self) -> impl Iterator<Item = (&str, &Stats)> {
        self.players.iter().map(|(id, stats)| (id.as_str(), stats))
    }
    fn entry(&mut self, id: &str) -> &mut Stats {
        self.players.entry(id.to_string()).or_default()
    }
}

impl From<BTreeMap<String, Stats>> for Memory {
    fn from(players: BTreeMap<String, Stats>) -> Self {
        Self { players }
    }
}

impl From<Memory> for BTreeMap<String, Stats> {
    fn from(memory: Memory) -> Self {
        memory.players
    }
}

impl Roster for Memory {
    fn modify_money(&mut self, id: &str, delta: i64) {
        self.entry(id).money += delta;
    }
    fn track_game(&mut self, id: &str) {
        self.entry(id).games += 1;
    }
    fn save(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
    fn stats(&self, id: &str) -> Option<Stats> {
        self.players.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_players_have_no_stats() {
        let mut roster = Memory::default();
        assert_eq!(roster.stats("nobody"), None);
        roster.track_game("alice");
        roster.modify_money("alice", -20);
        roster.modify_money("alice", 50);
        assert_eq!(
            roster.stats("alice"),
            Some(Stats {
                games: 1,
                money: 30
            })
        );
    }
}
