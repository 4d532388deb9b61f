use super::calc::KeypadRunner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::theme::Theme;
use crate::ui::messages::{error, header, warning};
use std::io::{self, BufRead, Write};

const QUIT: [&str; 3] = [":q", "quit", "exit"];

/// REPL lines that are not keypad input.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Quit,
    Steps,
    Remove(usize),
    Keys,
}

fn parse_line(line: &str) -> Result<ReplCommand, String> {
    if QUIT.contains(&line) {
        return Ok(ReplCommand::Quit);
    }
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(":steps") => Ok(ReplCommand::Steps),
        Some(":rm") => parts
            .next()
            .and_then(|n| n.parse::<usize>().ok())
            .map(ReplCommand::Remove)
            .ok_or_else(|| "usage: :rm <step number>".to_string()),
        Some(other) if other.starts_with(':') => Err(format!("Unknown command '{other}'")),
        _ => Ok(ReplCommand::Keys),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, theme: Theme) -> AppResult<()> {
    if let Commands::Repl { restore, color } = cmd {
        let color = super::resolve_color(color.as_deref(), cfg)?;
        let pool = DbPool::open(&cfg.database)?;
        let mut runner = KeypadRunner::new(&pool, cfg, theme, color);

        header("rTimecalc keys: 0-9 + - × ÷ C ⌫ % =  (:steps, :rm N, :q to quit)");

        if let Some(id) = restore {
            // a broken entry leaves an empty session; keep going
            if let Err(e) = runner.restore(id) {
                error(e);
            }
        }
        runner.render();

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_line(line) {
                Ok(ReplCommand::Quit) => break,
                Ok(ReplCommand::Steps) => {
                    runner.print_steps();
                    continue;
                }
                Ok(ReplCommand::Remove(n)) => runner.remove_step(n),
                Ok(ReplCommand::Keys) => {
                    runner.feed(line)?;
                }
                Err(msg) => {
                    warning(msg);
                    continue;
                }
            }
            runner.render();
        }
    }
    Ok(())
}
