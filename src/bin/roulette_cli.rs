// src/bin/roulette_cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use roulette_engine::api::{
    execute_command, Command, CommandResponse, DepositCommand, PlaceBetCommand, RoundResultDto,
    SelectionApi,
};
use roulette_engine::domain::bet::{BetKind, EVEN_COLOR_ODDS, SINGLE_SLOT_ODDS};
use roulette_engine::domain::chips::Chips;
use roulette_engine::engine::validation::{
    validate_bet_kind, validate_color_choice, validate_number_choice, validate_positive_amount,
    validate_yes_no,
};
use roulette_engine::engine::{GameSession, RandomSource};
use roulette_engine::infra::{DeterministicRng, RouletteConfig, SystemRng};

/// Интерактивная рулетка в терминале.
#[derive(Parser, Debug)]
#[command(name = "roulette_cli", about = "Single-table roulette in the terminal")]
struct Args {
    /// JSON-конфиг (лимиты, имя стола, seed).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed колеса: одинаковый seed даёт одинаковые вращения.
    #[arg(long)]
    seed: Option<u64>,

    /// Первый депозит (иначе спросим).
    #[arg(long)]
    deposit: Option<u64>,
}

/// Колесо CLI: системный RNG или детерминированный по seed.
enum CliRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl RandomSource for CliRng {
    fn next_position(&mut self, slots: u8) -> u8 {
        match self {
            CliRng::System(rng) => rng.next_position(slots),
            CliRng::Seeded(rng) => rng.next_position(slots),
        }
    }
}

/// Ввод/вывод CLI. `None` из `ask` – stdin закрыт, выходим.
struct Console<R: BufRead> {
    input: R,
}

impl<R: BufRead> Console<R> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Спрашиваем, пока разбор не пройдёт.
    fn ask_until<T, E: std::fmt::Display>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> std::result::Result<T, E>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => println!("Ошибка: {e}"),
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = RouletteConfig::load_or_default(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut rng = match config.seed {
        Some(seed) => CliRng::Seeded(DeterministicRng::from_seed(seed)),
        None => CliRng::System(SystemRng),
    };

    let stdin = io::stdin();
    let mut console = Console {
        input: stdin.lock(),
    };

    display_welcome(&config);

    let max = config.max_amount;
    let initial = match args.deposit {
        Some(amount) => Chips(amount),
        None => match console.ask_until("Первый депозит: $", |s| {
            validate_positive_amount(s, "deposit amount", max)
        })? {
            Some(amount) => amount,
            None => return Ok(()),
        },
    };

    let mut session = GameSession::start(config.clone(), initial)?;
    println!(
        "Игрок создан, баланс: {}",
        config.format_amount(session.balance())
    );

    loop {
        if session.is_broke() && !offer_deposit(&mut console, &mut session, &mut rng)? {
            break;
        }

        if !collect_bets(&mut console, &mut session, &mut rng)? {
            break;
        }

        println!();
        println!("==============================");
        println!("Крутим колесо...");
        println!("==============================");

        match execute_command(&mut session, &mut rng, Command::SpinAndPayout) {
            Ok(CommandResponse::RoundFinished(round)) => print_round(&config, &round),
            Ok(other) => println!("[CLI] BUG: неожиданный ответ {other:?}"),
            Err(e) => println!("Ошибка: {e}"),
        }

        if session.is_broke() {
            println!("\nДеньги закончились!");
            continue;
        }

        match console.ask_until("\nСыграть ещё раунд? (y/n): ", validate_yes_no)? {
            Some(true) => continue,
            _ => break,
        }
    }

    println!();
    println!("========================================");
    println!("Спасибо за игру!");
    println!(
        "Итоговый баланс: {}",
        config.format_amount(session.balance())
    );
    println!("========================================");

    Ok(())
}

fn display_welcome(config: &RouletteConfig) {
    println!("==================================================");
    println!("Добро пожаловать за стол \"{}\"!", config.table_name);
    println!("==================================================");
    println!("Ставки на цвет:");
    println!("- Red/Black платят {EVEN_COLOR_ODDS}:1");
    println!("- Green (0) платит {SINGLE_SLOT_ODDS}:1");
    println!();
    println!("Ставки на номер:");
    println!("- Любой номер 0-36 платит {SINGLE_SLOT_ODDS}:1");
    println!();
    println!("За раунд можно сделать несколько ставок.");
    println!("==================================================");
}

/// Баланс на нуле: предлагаем депозит. false – игрок уходит.
fn offer_deposit<R: BufRead>(
    console: &mut Console<R>,
    session: &mut GameSession,
    rng: &mut CliRng,
) -> Result<bool> {
    let Some(wants) =
        console.ask_until("Внести дополнительный депозит? (y/n): ", validate_yes_no)?
    else {
        return Ok(false);
    };
    if !wants {
        return Ok(false);
    }

    let max = session.config().max_amount;
    let Some(amount) = console.ask_until("Сумма депозита: $", |s| {
        validate_positive_amount(s, "deposit amount", max)
    })?
    else {
        return Ok(false);
    };

    match execute_command(session, rng, Command::Deposit(DepositCommand { amount })) {
        Ok(CommandResponse::BalanceUpdated(player)) => {
            println!(
                "Депозит принят! Новый баланс: {}",
                session.config().format_amount(player.balance)
            );
            Ok(true)
        }
        Ok(other) => {
            println!("[CLI] BUG: неожиданный ответ {other:?}");
            Ok(true)
        }
        Err(e) => {
            println!("Ошибка: {e}");
            Ok(!session.is_broke())
        }
    }
}

/// Сбор ставок на раунд. false – stdin закрыт.
fn collect_bets<R: BufRead>(
    console: &mut Console<R>,
    session: &mut GameSession,
    rng: &mut CliRng,
) -> Result<bool> {
    loop {
        let balance = session.balance();
        println!(
            "\nТекущий баланс: {}",
            session.config().format_amount(balance)
        );

        let Some(kind) = console.ask_until("Тип ставки (color/number): ", validate_bet_kind)?
        else {
            return Ok(false);
        };

        let Some(amount) = ask_amount(console, session)? else {
            return Ok(false);
        };

        let selection = match kind {
            BetKind::Color => {
                match console.ask_until("Цвет (red/black/green): ", validate_color_choice)? {
                    Some(color) => SelectionApi::Color { color },
                    None => return Ok(false),
                }
            }
            BetKind::Number => {
                match console.ask_until("Номер (0-36): ", validate_number_choice)? {
                    Some(number) => SelectionApi::Number { number },
                    None => return Ok(false),
                }
            }
        };

        let command = Command::PlaceBet(PlaceBetCommand { amount, selection });
        match execute_command(session, rng, command) {
            Ok(CommandResponse::BetPlaced(bet)) => {
                println!(
                    "Ставка принята: {} (коэф. {}:1)",
                    session.config().format_amount(bet.amount),
                    bet.odds
                );
                println!(
                    "Остаток: {}",
                    session.config().format_amount(session.balance())
                );
            }
            Ok(other) => println!("[CLI] BUG: неожиданный ответ {other:?}"),
            Err(e) => println!("Ошибка: {e}"),
        }

        if session.pending_bets().is_empty() {
            continue;
        }
        if session.is_broke() {
            return Ok(true);
        }
        match console.ask_until("Сделать ещё ставку? (y/n): ", validate_yes_no)? {
            Some(true) => continue,
            Some(false) => return Ok(true),
            None => return Ok(false),
        }
    }
}

/// Сумма ставки: лимиты, баланс и подтверждение ставки "на всё".
fn ask_amount<R: BufRead>(
    console: &mut Console<R>,
    session: &GameSession,
) -> Result<Option<Chips>> {
    let max = session.config().max_amount;
    loop {
        let Some(amount) = console.ask_until("Сумма ставки: $", |s| {
            validate_positive_amount(s, "bet amount", max)
        })?
        else {
            return Ok(None);
        };

        if amount > session.balance() {
            println!(
                "Ошибка: ставка {} больше баланса {}.",
                session.config().format_amount(amount),
                session.config().format_amount(session.balance())
            );
            continue;
        }

        if session.is_all_in(amount) {
            println!("Внимание: это весь ваш баланс.");
            let prompt = format!(
                "Подтвердить ставку {} (весь баланс)? (y/n): ",
                session.config().format_amount(amount)
            );
            match console.ask_until(&prompt, validate_yes_no)? {
                Some(true) => {}
                Some(false) => continue,
                None => return Ok(None),
            }
        }

        return Ok(Some(amount));
    }
}

fn print_round(config: &RouletteConfig, round: &RoundResultDto) {
    println!(
        "Шарик остановился на: {} ({})",
        round.outcome.position,
        round.outcome.color.as_str().to_uppercase()
    );

    for r in &round.bets {
        let target = match r.bet.selection {
            SelectionApi::Color { color } => color.to_string(),
            SelectionApi::Number { number } => format!("номер {number}"),
        };
        if r.won {
            println!(
                "  {} на {} – выигрыш {}",
                config.format_amount(r.bet.amount),
                target,
                config.format_amount(r.credited)
            );
        } else {
            println!(
                "  {} на {} – проигрыш",
                config.format_amount(r.bet.amount),
                target
            );
        }
    }

    if round.paid_out() {
        println!("Поздравляем! Выплата: {}", config.format_amount(round.total_won));
    } else {
        println!("Увы, раунд проигран.");
    }
    let sign = if round.net < 0 { "-" } else { "+" };
    println!(
        "Итог раунда: {}{}{}",
        sign,
        config.currency_symbol,
        round.net.unsigned_abs()
    );
    println!(
        "Новый баланс: {}",
        config.format_amount(round.balance_after)
    );
    println!("==============================");
}
