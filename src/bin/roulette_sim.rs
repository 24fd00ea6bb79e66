// src/bin/roulette_sim.rs

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use roulette_engine::domain::bet::Selection;
use roulette_engine::domain::chips::Chips;
use roulette_engine::domain::wheel::Color;
use roulette_engine::engine::{EngineError, GameSession, RandomSource};
use roulette_engine::infra::{map_round_to_dto, DeterministicRng, RouletteConfig, SystemRng};

/// Пакетная симуляция: много раундов одной и той же стратегией.
#[derive(Parser, Debug)]
#[command(name = "roulette_sim", about = "Batch roulette simulation")]
struct Args {
    /// JSON-конфиг (лимиты, seed).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed колеса (перекрывает seed из конфига).
    #[arg(long)]
    seed: Option<u64>,

    /// Стартовый баланс.
    #[arg(long, default_value_t = 10_000)]
    deposit: u64,

    /// Сколько раундов сыграть.
    #[arg(long, default_value_t = 1_000)]
    rounds: u32,

    /// Размер каждой ставки.
    #[arg(long, default_value_t = 10)]
    bet: u64,

    /// Печатать результат каждого раунда в JSON (по строке на раунд).
    #[arg(long)]
    json: bool,
}

/// Ставки по кругу: красное, чёрное, зелёное, затем номера 0..=36.
fn selection_for_round(round: u32) -> Selection {
    match round % 40 {
        0 => Selection::Color(Color::Red),
        1 => Selection::Color(Color::Black),
        2 => Selection::Color(Color::Green),
        n => Selection::Number((n - 3) as u8),
    }
}

/// Итоговая статистика прогона.
#[derive(Debug, Default, Serialize)]
struct SimStats {
    rounds_played: u32,
    bets_won: u32,
    total_wagered: Chips,
    total_won: Chips,
    final_balance: Chips,
    stopped_early: bool,
}

fn run<R: RandomSource>(args: &Args, config: RouletteConfig, rng: &mut R) -> Result<SimStats> {
    let mut session = GameSession::start(config, Chips(args.deposit))?;
    let mut stats = SimStats::default();

    for round in 0..args.rounds {
        let selection = selection_for_round(round);
        match session.place_bet(Chips(args.bet), selection) {
            Ok(_) => {}
            Err(EngineError::BetExceedsBalance { amount, balance }) => {
                warn!("round {round}: bet {amount} exceeds balance {balance}, stopping");
                stats.stopped_early = true;
                break;
            }
            Err(e) => return Err(e.into()),
        }

        let summary = session.play_round(rng)?;
        stats.rounds_played += 1;
        stats.bets_won += summary.winners().count() as u32;
        stats.total_wagered += summary.total_wagered;
        stats.total_won += summary.total_won;

        if args.json {
            let dto = map_round_to_dto(&summary, session.balance());
            println!("{}", serde_json::to_string(&dto)?);
        }
    }

    stats.final_balance = session.balance();
    Ok(stats)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = RouletteConfig::load_or_default(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    info!(
        "roulette_sim: rounds={} bet={} deposit={} seed={:?}",
        args.rounds, args.bet, args.deposit, config.seed
    );

    let stats = match config.seed {
        Some(seed) => run(&args, config, &mut DeterministicRng::from_seed(seed))?,
        None => run(&args, config, &mut SystemRng)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("================ SIMULATION SUMMARY =================");
    println!("Раундов сыграно:   {}", stats.rounds_played);
    println!("Выигравших ставок: {}", stats.bets_won);
    println!("Поставлено всего:  {}", stats.total_wagered);
    println!("Выиграно всего:    {}", stats.total_won);
    println!("Итоговый баланс:   {}", stats.final_balance);
    if stats.stopped_early {
        println!("(остановлено досрочно: не хватило баланса на ставку)");
    }

    Ok(())
}
