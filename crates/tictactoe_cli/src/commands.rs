//! Command implementations.

use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tictactoe_engine::{
    Board, Difficulty, EngineConfig, GameResult, GameSession, GameStatus, Mark, PlayerRecord,
    TimeBudget, computer_player,
};
use tracing::{info, instrument, warn};

/// Environment variable naming a default config file.
const CONFIG_ENV: &str = "TICTACTOE_CONFIG";

/// Flags for `play` that override the config file.
#[derive(Debug)]
pub struct PlayOptions {
    /// Difficulty label.
    pub difficulty: Option<String>,
    /// Per-move limit in milliseconds.
    pub time_limit_ms: Option<u64>,
    /// Computer's mark.
    pub computer_mark: Option<Mark>,
    /// Board dimension.
    pub size: Option<usize>,
    /// Config file path.
    pub config: Option<PathBuf>,
}

impl PlayOptions {
    /// Loads the config file (if any) and applies command-line overrides.
    #[instrument]
    fn resolve(self) -> Result<EngineConfig> {
        let path = self
            .config
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut config = match path {
            Some(path) => EngineConfig::from_file(&path)
                .with_context(|| format!("Loading config from {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(label) = self.difficulty {
            config.set_difficulty(label.parse::<Difficulty>()?);
        }
        if let Some(ms) = self.time_limit_ms {
            config.set_time_limit_ms(ms);
        }
        if let Some(mark) = self.computer_mark {
            config.set_computer_mark(mark);
        }
        if let Some(size) = self.size {
            config.set_board_size(size);
        }
        config.validate()?;

        if *config.board_size() > 3
            && *config.difficulty() == Difficulty::Hard
            && config.time_budget().is_unlimited()
        {
            warn!("Hard difficulty on a large board without a time limit may never finish");
        }
        Ok(config)
    }
}

/// Human versus computer on stdin/stdout, repeated until the player stops.
pub fn play(options: PlayOptions, name: String) -> Result<()> {
    let config = options.resolve()?;
    let mut session = GameSession::from_config(&config, name, "Computer")?;
    let mut human = PlayerRecord::new(session.human_name(), session.human_mark());
    let mut computer = PlayerRecord::new(session.computer_name(), session.computer().mark());

    println!(
        "{} plays {}, computer ({}) plays {}.",
        session.human_name(),
        session.human_mark(),
        session.computer().difficulty(),
        session.computer().mark()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}\n", session.board());

        if let Some([human_result, computer_result]) = session.outcome_events() {
            human.record(human_result.result);
            computer.record(computer_result.result);
            println!("{}", describe(session.status(), session.human_mark()));
            println!(
                "{}: {} won, {} lost, {} drawn",
                human.name(),
                human.wins(),
                human.losses(),
                human.draws()
            );

            if !ask(&mut lines, "Play again? [y/N] ")?.eq_ignore_ascii_case("y") {
                return Ok(());
            }
            session.reset();
            continue;
        }

        if session.is_computer_turn() {
            let mv = session.computer_move()?;
            println!("Computer plays {}", mv);
            continue;
        }

        let prompt = format!("Your move as {} (row col): ", session.human_mark());
        let input = ask(&mut lines, &prompt)?;
        match parse_coords(&input) {
            Some((row, col)) => {
                if let Err(e) = session.human_move(row, col) {
                    println!("{}", e);
                }
            }
            None => println!("Enter two numbers, e.g. `1 2`."),
        }
    }
}

/// Computer versus computer; prints a tally for each side.
#[instrument]
pub fn simulate(
    x_label: &str,
    o_label: &str,
    games: u32,
    time_limit_ms: u64,
    size: usize,
    seed: Option<u64>,
) -> Result<()> {
    let budget = TimeBudget::from_millis(time_limit_ms);
    let mut x_record = PlayerRecord::new(format!("{} (X)", x_label), Mark::X);
    let mut o_record = PlayerRecord::new(format!("{} (O)", o_label), Mark::O);

    for game in 0..games {
        let mut x_player = computer_player(x_label, Mark::X, budget)?;
        let mut o_player = computer_player(o_label, Mark::O, budget)?;
        if let Some(seed) = seed {
            let base = seed.wrapping_add(u64::from(game) * 2);
            x_player = x_player.with_seed(base);
            o_player = o_player.with_seed(base.wrapping_add(1));
        }

        let mut board = Board::with_size(size)?;
        while !board.status().is_over() {
            let player = match board.turn() {
                Mark::X => &mut x_player,
                Mark::O => &mut o_player,
            };
            let mv = player
                .choose_move(&mut board)
                .context("Engine returned no move on an unfinished board")?;
            board.apply(mv)?;
        }

        let status = board.status();
        let (x_result, o_result) = match status {
            GameStatus::Won(Mark::X) => (GameResult::Win, GameResult::Loss),
            GameStatus::Won(Mark::O) => (GameResult::Loss, GameResult::Win),
            GameStatus::Draw => (GameResult::Draw, GameResult::Draw),
            GameStatus::InProgress => bail!("Game {} stopped before finishing", game),
        };
        x_record.record(x_result);
        o_record.record(o_result);
        info!(game, ?status, "Game finished");
    }

    for record in [&x_record, &o_record] {
        println!(
            "{:<12} won {:>4}  lost {:>4}  drawn {:>4}",
            record.name(),
            record.wins(),
            record.losses(),
            record.draws()
        );
    }
    Ok(())
}

/// Prints the engine's move for a board given as text rows.
#[instrument(skip(rows))]
pub fn suggest(label: &str, mark: Option<Mark>, time_limit_ms: u64, rows: &[String]) -> Result<()> {
    let mut board = Board::from_rows(rows)?;
    let mark = mark.unwrap_or(board.turn());
    let mut player = computer_player(label, mark, TimeBudget::from_millis(time_limit_ms))?;

    match player.choose_move(&mut board) {
        Some(mv) => println!("{} {}", mv.row, mv.col),
        None => println!("No move: the board is full."),
    }
    if let Some(stats) = player.search_stats() {
        info!(nodes = stats.nodes, cutoffs = stats.cutoffs, "Search statistics");
    }
    Ok(())
}

fn ask(lines: &mut impl Iterator<Item = io::Result<String>>, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => bail!("Input closed"),
    }
}

/// Parses `row col`, also accepting a comma between the numbers.
fn parse_coords(input: &str) -> Option<(usize, usize)> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, col))
}

fn describe(status: GameStatus, human_mark: Mark) -> &'static str {
    match status {
        GameStatus::Won(mark) if mark == human_mark => "You win!",
        GameStatus::Won(_) => "The computer wins.",
        GameStatus::Draw => "It's a draw.",
        GameStatus::InProgress => "Game in progress.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords() {
        assert_eq!(parse_coords("1 2"), Some((1, 2)));
        assert_eq!(parse_coords(" 0,2 "), Some((0, 2)));
        assert_eq!(parse_coords("1"), None);
        assert_eq!(parse_coords("1 2 3"), None);
        assert_eq!(parse_coords("a b"), None);
    }

    #[test]
    fn test_unknown_difficulty_fails_resolve() {
        let options = PlayOptions {
            difficulty: Some("nightmare".to_string()),
            time_limit_ms: None,
            computer_mark: None,
            size: None,
            config: None,
        };
        assert!(options.resolve().is_err());
    }

    #[test]
    fn test_simulate_runs_seeded_games() {
        assert!(simulate("medium", "easy", 3, 0, 3, Some(1)).is_ok());
        assert!(simulate("bogus", "easy", 1, 0, 3, None).is_err());
    }
}
