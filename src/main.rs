//! Terminal snake runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `tui_snake::term`. Time is fed to the session from a wall clock; the
//! session owns every game rule.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_snake::config::SnakeConfig;
use tui_snake::core::GameSnapshot;
use tui_snake::engine::Session;
use tui_snake::input::{handle_key_event, is_confirm, should_quit};
use tui_snake::leaderboard::{parse_scores_args, run_scores};
use tui_snake::logging;
use tui_snake::scores::{MemoryStore, ScoreEntry, ScoreStore};
use tui_snake::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use tui_snake::types::{LEADERBOARD_LIMIT, STATUS_MESSAGE_MS};

/// Poll timeout while no tick is scheduled (paused or game over).
const IDLE_POLL_MS: u32 = 100;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = SnakeConfig::from_env();

    if let Some(scores_args) = parse_scores_args(&args)? {
        return run_scores(scores_args, &config.scores);
    }
    if let Some(arg) = args.first() {
        return Err(anyhow!("unknown argument: {} (try `scores [--limit N]`)", arg));
    }

    logging::init(config.log_path.as_deref())?;

    let player = match config.player.clone() {
        Some(name) => name,
        None => prompt_player_name()?,
    };

    let mut store: Box<dyn ScoreStore> = match config.scores.open() {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "score store unavailable; scores will not persist");
            Box::new(MemoryStore::new())
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &player, store.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Ask for a name on stdin until a non-blank one is given.
fn prompt_player_name() -> Result<String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Player name: ");
        io::stdout().flush()?;
        let line = lines
            .next()
            .ok_or_else(|| anyhow!("no player name given"))??;
        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        println!("Please enter a name.");
    }
}

/// A message shown in the side panel until it expires.
struct Status {
    text: &'static str,
    remaining_ms: u32,
}

impl Status {
    fn new(text: &'static str) -> Self {
        Self {
            text,
            remaining_ms: STATUS_MESSAGE_MS,
        }
    }
}

struct Screen {
    view: GameView,
    fb: FrameBuffer,
    snap: GameSnapshot,
}

impl Screen {
    fn draw(
        &mut self,
        term: &mut TerminalRenderer,
        session: &Session,
        hud: &Hud<'_>,
    ) -> Result<()> {
        session.snapshot_into(&mut self.snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(&self.snap, hud, Viewport::new(w, h), &mut self.fb);
        term.draw_swap(&mut self.fb)
    }
}

fn run(
    term: &mut TerminalRenderer,
    config: &SnakeConfig,
    player: &str,
    store: &mut dyn ScoreStore,
) -> Result<()> {
    let mut session = Session::new(config.session());
    session.start();
    info!(player, grid_size = config.grid_size, seed = config.seed, "runner started");

    let mut screen = Screen {
        view: GameView::default(),
        fb: FrameBuffer::new(0, 0),
        snap: GameSnapshot::default(),
    };
    let mut leaderboard = load_leaderboard(store);
    let mut status: Option<Status> = None;
    let mut last = Instant::now();

    loop {
        // Feed whole elapsed milliseconds; the remainder carries to the next frame.
        let elapsed = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed as u64);
        session.update(elapsed);

        if let Some(s) = status.as_mut() {
            s.remaining_ms = s.remaining_ms.saturating_sub(elapsed);
            if s.remaining_ms == 0 {
                status = None;
            }
        }

        let hud = Hud {
            player,
            leaderboard: &leaderboard,
            status: status.as_ref().map(|s| s.text),
        };
        screen.draw(term, &session, &hud)?;

        let mut timeout_ms = session
            .clock()
            .time_until_next_tick()
            .unwrap_or(IDLE_POLL_MS)
            .min(IDLE_POLL_MS);
        if let Some(s) = &status {
            timeout_ms = timeout_ms.min(s.remaining_ms);
        }

        if !event::poll(Duration::from_millis(timeout_ms as u64))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = session.state().score(), "quit");
                    return Ok(());
                }

                if session.state().terminal() && is_confirm(key) {
                    let hud = Hud {
                        player,
                        leaderboard: &leaderboard,
                        status: Some("Saving..."),
                    };
                    screen.draw(term, &session, &hud)?;

                    let saved = save_score(store, player, session.state().score());
                    status = Some(Status::new(if saved { "Saved!" } else { "Save failed" }));
                    leaderboard = load_leaderboard(store);
                    session.restart();
                    continue;
                }

                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn save_score(store: &mut dyn ScoreStore, player: &str, score: u32) -> bool {
    match store.submit_score(player, score) {
        Ok(()) => true,
        Err(e) => {
            warn!(player, score, error = %e, "failed to save score");
            false
        }
    }
}

fn load_leaderboard(store: &dyn ScoreStore) -> Vec<ScoreEntry> {
    store.top_scores(LEADERBOARD_LIMIT).unwrap_or_else(|e| {
        warn!(error = %e, "failed to load leaderboard");
        Vec::new()
    })
}
