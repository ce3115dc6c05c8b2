//! `tui-snake scores [--limit N]`: print the leaderboard and exit.

use std::fmt::Write as _;

use anyhow::{anyhow, Result};

use crate::scores::{ScoreEntry, ScoresConfig};
use crate::types::LEADERBOARD_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoresArgs {
    pub limit: usize,
}

/// `Ok(None)` when `args` is not the `scores` subcommand.
pub fn parse_scores_args(args: &[String]) -> Result<Option<ScoresArgs>> {
    if args.first().map(String::as_str) != Some("scores") {
        return Ok(None);
    }

    let mut limit = LEADERBOARD_LIMIT;
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--limit" | "-n" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("scores: missing value for --limit"))?;
                limit = v
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| anyhow!("scores: invalid --limit value: {}", v))?;
            }
            other => {
                return Err(anyhow!("scores: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(ScoresArgs { limit }))
}

/// One line per entry: rank, score, name.
pub fn format_leaderboard(entries: &[ScoreEntry]) -> String {
    if entries.is_empty() {
        return "no scores yet\n".to_string();
    }
    let width = entries
        .iter()
        .map(|e| e.score.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for (i, e) in entries.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {:>width$}  {}", i + 1, e.score, e.player_name);
    }
    out
}

pub fn run_scores(args: ScoresArgs, config: &ScoresConfig) -> Result<()> {
    let store = config.open()?;
    let top = store.top_scores(args.limit)?;
    print!("{}", format_leaderboard(&top));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_scores_args_ignores_other_commands() {
        assert_eq!(parse_scores_args(&args(&[])).unwrap(), None);
        assert_eq!(parse_scores_args(&args(&["play"])).unwrap(), None);
    }

    #[test]
    fn parse_scores_args_uses_default_limit() {
        let parsed = parse_scores_args(&args(&["scores"])).unwrap().unwrap();
        assert_eq!(parsed.limit, LEADERBOARD_LIMIT);
    }

    #[test]
    fn parse_scores_args_parses_limit() {
        let parsed = parse_scores_args(&args(&["scores", "--limit", "3"]))
            .unwrap()
            .unwrap();
        assert_eq!(parsed, ScoresArgs { limit: 3 });
    }

    #[test]
    fn parse_scores_args_rejects_bad_input() {
        assert!(parse_scores_args(&args(&["scores", "--limit"])).is_err());
        assert!(parse_scores_args(&args(&["scores", "--limit", "0"])).is_err());
        assert!(parse_scores_args(&args(&["scores", "--limit", "x"])).is_err());
        assert!(parse_scores_args(&args(&["scores", "--verbose"])).is_err());
    }

    #[test]
    fn format_leaderboard_aligns_scores() {
        let entries = vec![ScoreEntry::new("ada", 120), ScoreEntry::new("bob", 30)];
        assert_eq!(
            format_leaderboard(&entries),
            " 1. 120  ada\n 2.  30  bob\n"
        );
        assert_eq!(format_leaderboard(&[]), "no scores yet\n");
    }
}
