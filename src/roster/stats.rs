use serde::Deserialize;
use serde::Serialize;

/// Lifetime record of one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub games: u32,
    pub money: i64,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let sign = if self.money < 0 { "-" } else { "" };
        write!(
            f,
            "{} games played, {}${} won",
            self.games,
            sign,
            self.money.unsigned_abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn losses_render_with_sign() {
        let stats = Stats {
            games: 3,
            money: -45,
        };
        assert_eq!(stats.to_string(), "3 games played, -$45 won");
    }
}
