//! Line-based keyboard stand-in for the headless binary.
//!
//! `left`, `right`, `jump` press a key; the same word prefixed with `-` releases it.
//! `stop` releases everything, `restart` starts a new round after a game over and
//! `quit` (or end of input) ends the session.

use std::io::BufRead;
use std::thread;

use actix::Addr;
use log::{debug, warn};

use crate::game::types::Key;
use crate::session::messages::{Exit, KeyPressed, KeyReleased, ReleaseAll, Restart};
use crate::session::server::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Press(Key),
    Release(Key),
    ReleaseAll,
    Restart,
    Quit,
}

fn parse_key(word: &str) -> Option<Key> {
    match word {
        "left" | "a" => Some(Key::Left),
        "right" | "d" => Some(Key::Right),
        "jump" | "w" | "space" => Some(Key::Jump),
        _ => None,
    }
}

pub fn parse_command(line: &str) -> Option<Command> {
    let word = line.trim().to_ascii_lowercase();
    match word.as_str() {
        "stop" => Some(Command::ReleaseAll),
        "restart" => Some(Command::Restart),
        "quit" | "exit" => Some(Command::Quit),
        _ => match word.strip_prefix('-') {
            Some(key) => parse_key(key).map(Command::Release),
            None => parse_key(&word).map(Command::Press),
        },
    }
}

/// Reads commands on a dedicated thread and forwards them to the session.
pub fn spawn_reader(addr: Addr<GameSession>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!("[Stdin] Read failed: {}", err);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Some(Command::Press(key)) => addr.do_send(KeyPressed(key)),
                Some(Command::Release(key)) => addr.do_send(KeyReleased(key)),
                Some(Command::ReleaseAll) => addr.do_send(ReleaseAll),
                Some(Command::Restart) => addr.do_send(Restart),
                Some(Command::Quit) => {
                    addr.do_send(Exit);
                    return;
                }
                None => debug!("[Stdin] Unknown command: {:?}", line.trim()),
            }
        }
        addr.do_send(Exit);
    })
}
