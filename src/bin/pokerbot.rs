//! pokerbot Chat Binary
//!
//! Reads `#channel nick message` lines from stdin, one table per channel,
//! and prints what the tables say back. A line `#channel nick /part`
//! tells the room that nick left.

use clap::Parser;
use colored::Colorize;
use pokerbot::gameroom::Lobby;
use pokerbot::gameroom::Message;
use pokerbot::gameroom::Settings;
use pokerbot::play::Event;
use pokerbot::roster::Shared;
use pokerbot::roster::Store;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

#[derive(Parser)]
#[command(author, version, about = "Texas Hold'em over chat lines", long_about = None)]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON file the roster is kept in
    #[arg(long)]
    roster: Option<PathBuf>,
    /// command prefix
    #[arg(long)]
    prefix: Option<char>,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match self.config {
            Some(ref path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(ref roster) = self.roster {
            settings.roster = roster.clone();
        }
        if let Some(prefix) = self.prefix {
            settings.prefix = prefix;
        }
        Ok(settings)
    }
}

fn parse(line: &str) -> Option<(String, Message)> {
    let mut parts = line.trim().splitn(3, char::is_whitespace);
    let channel = parts.next().filter(|c| c.starts_with('#'))?;
    let nick = parts.next().filter(|n| !n.is_empty())?.to_string();
    let message = match parts.next().unwrap_or("").trim() {
        "/part" => Message::Left { nick },
        text => Message::Line {
            nick,
            text: text.to_string(),
        },
    };
    Some((channel.to_string(), message))
}

fn print(channel: &str, event: &Event) {
    let text = match event {
        Event::Cards { player, .. } => format!("(to {}) {}", player, event).dimmed(),
        Event::Winner { .. } | Event::SplitPot { .. } => event.to_string().green(),
        Event::Folded { .. } | Event::CashedOut { .. } => event.to_string().red(),
        Event::GameEnded { .. } => event.to_string().yellow(),
        _ => event.to_string().normal(),
    };
    println!("{} {}", channel.cyan(), text);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pokerbot::log();
    pokerbot::kys();
    let settings = Args::parse().settings()?;
    let store = Store::open(&settings.roster)?;
    log::info!("roster kept in {}", store.path().display());
    let roster = Shared::from(store);
    let mut lobby = Lobby::new(settings.table, settings.prefix, roster);
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => match parse(&line) {
                    Some((channel, message)) => lobby.route(&channel, message),
                    None => log::warn!("expected `#channel nick message`, got {:?}", line),
                },
                None => break,
            },
            Some((channel, event)) = lobby.recv() => print(&channel, &event),
        }
    }
    let channels = lobby.rooms().map(String::from).collect::<Vec<_>>();
    for channel in channels {
        lobby.close(&channel)?;
    }
    while let Ok(Some((channel, event))) =
        tokio::time::timeout(Duration::from_millis(250), lobby.recv()).await
    {
        print(&channel, &event);
    }
    Ok(())
}
