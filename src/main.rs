//! Headless runner (default binary).
//!
//! Plays one game with a naive autoplayer and prints the outcome. By
//! default the drop timer is simulated by calling `tick` directly; with
//! `--realtime` the game runs on the tokio host with a real clock.
//!
//! ```text
//! blockfall [--seed N] [--max-steps N] [--json] [--realtime]
//! ```

mod autoplay;

use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use blockfall::core::Session;
use blockfall::host::{spawn_session, HostConfig};
use blockfall::types::Phase;

use autoplay::Autoplayer;

/// Simulated mode: one auto-drop tick per this many bot commands.
const COMMANDS_PER_TICK: u32 = 4;

/// Realtime mode: delay between bot commands.
const BOT_PACE_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunOptions {
    seed: Option<u32>,
    max_steps: u32,
    json: bool,
    realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: None,
            max_steps: 10_000,
            json: false,
            realtime: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<RunOptions> {
    let mut opts = RunOptions::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                opts.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--max-steps" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --max-steps"))?;
                opts.max_steps = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --max-steps value: {}", v))?;
            }
            "--json" => opts.json = true,
            "--realtime" => opts.realtime = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(opts)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;

    let mut config = HostConfig::from_env();
    if let Some(seed) = opts.seed {
        config.seed = seed;
    }

    let mut session = Session::with_seed(config.seed);
    session.start();
    let mut bot = Autoplayer::new(config.seed);

    let session = if opts.realtime {
        run_realtime(session, &config, &mut bot, opts.max_steps)?
    } else {
        simulate(&mut session, &mut bot, opts.max_steps);
        session
    };

    report(&session, opts.json)
}

fn simulate(session: &mut Session, bot: &mut Autoplayer, max_steps: u32) {
    for step in 0..max_steps {
        if session.is_game_over() {
            break;
        }
        session.apply(bot.next_command());
        if step % COMMANDS_PER_TICK == 0 {
            session.tick();
        }
    }
}

fn run_realtime(
    session: Session,
    config: &HostConfig,
    bot: &mut Autoplayer,
    max_steps: u32,
) -> Result<Session> {
    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(async {
        let handle = spawn_session(session, config);
        let mut pace = tokio::time::interval(Duration::from_millis(BOT_PACE_MS));

        for _ in 0..max_steps {
            pace.tick().await;
            if handle.snapshot().phase == Phase::GameOver {
                break;
            }
            handle.send(bot.next_command()).await?;
        }

        handle.shutdown().await
    })
}

fn report(session: &Session, json: bool) -> Result<()> {
    let snapshot = session.snapshot();
    if json {
        let out = serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?;
        println!("{}", out);
        return Ok(());
    }

    for line in snapshot.board.to_rows() {
        println!("|{}|", line);
    }
    println!("phase: {}", snapshot.phase.as_str());
    println!("score: {}", snapshot.score);
    println!("level: {}", snapshot.level);
    println!("lines: {}", snapshot.lines);
    Ok(())
}
