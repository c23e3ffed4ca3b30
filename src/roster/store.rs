use super::Memory;
use super::Roster;
use super::Stats;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

/// Roster backed by a JSON file.
///
/// The whole file is read once on open and rewritten on every save. A
/// missing file is an empty roster.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    memory: Memory,
}

impl Store {
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let memory = match path.exists() {
            false => Memory::default(),
            true => std::fs::read_to_string(&path)
                .with_context(|| format!("read roster {}", path.display()))
                .and_then(|json| {
                    serde_json::from_str::<BTreeMap<String, Stats>>(&json)
                        .with_context(|| format!("parse roster {}", path.display()))
                })
                .map(Memory::from)?,
        };
        log::info!("opened roster {}", path.display());
        Ok(Self { path, memory })
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Roster for Store {
    fn modify_money(&mut self, id: &str, delta: i64) {
        self.memory.modify_money(id, delta);
    }
    fn track_game(&mut self, id: &str) {
        self.memory.track_game(id);
    }
    fn save(&mut self) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create roster directory {}", dir.display()))?;
        }
        let players = BTreeMap::from(self.memory.clone());
        let json = serde_json::to_string_pretty(&players)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write roster {}", self.path.display()))?;
        log::debug!("saved {} players to {}", players.len(), self.path.display());
        Ok(())
    }
    fn stats(&self, id: &str) -> Option<Stats> {
        self.memory.stats(id)
    }
}
