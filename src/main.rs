//! # Grid Duel - Interactive Shell
//!
//! Thin line-oriented front end for the engine: it parses command line
//! arguments into a [`GameConfig`], prompts for moves, feeds raw input to
//! [`GameController::apply_move`], and renders whatever comes back. All
//! game rules live in the library; this binary only reads, prints, and
//! loops.
//!
//! ## Usage
//! ```text
//! play                      # tic-tac-toe
//! play --game connect4      # connect four
//! play --game connect4 --rows 8 --cols 9 --win-length 5
//! ```

use clap::Parser;
use colored::Colorize;
use grid_duel::games::connect4::ConnectFourMove;
use grid_duel::games::tictactoe::TicTacToeMove;
use grid_duel::{Board, GameConfig, GameController, Mark, MatchState, RawMove};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Which game to play: "tictactoe" or "connect4"
    #[clap(short, long, default_value = "tictactoe")]
    game: String,

    /// Override the number of rows
    #[clap(short, long)]
    rows: Option<usize>,

    /// Override the number of columns
    #[clap(short, long)]
    cols: Option<usize>,

    /// Override the winning line length
    #[clap(short = 'l', long)]
    win_length: Option<usize>,
}

impl Args {
    fn to_config(&self) -> Result<GameConfig, String> {
        let mut config = match self.game.as_str() {
            "tictactoe" | "ttt" => GameConfig::tic_tac_toe(),
            "connect4" | "c4" => GameConfig::connect_four(),
            other => return Err(format!("unknown game: {other}")),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(win_length) = self.win_length {
            config.win_length = win_length;
        }
        if config.rows == 0 || config.cols == 0 || config.win_length == 0 {
            return Err("rows, columns and win length must all be positive".into());
        }
        if config.gravity && config.cols > 26 {
            return Err("gravity boards are limited to 26 lettered columns".into());
        }
        Ok(config)
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = match args.to_config() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{}", msg.red());
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // Iterative replay loop: each round owns a fresh controller.
    loop {
        if !play_match(config, &mut lines)? {
            break;
        }
        let again = match prompt("\nAnother game (y/n)? ", &mut lines)? {
            Some(reply) => reply,
            None => break,
        };
        if !again.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }
    println!("Thank you for playing!");
    Ok(())
}

/// Runs one match to its terminal state. Returns false if input ended
/// before the match did.
fn play_match(
    config: GameConfig,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<bool> {
    let mut game = GameController::new(config);
    println!("New game: {} goes first.\n", paint(Mark::X));
    render(game.board(), &config);

    loop {
        let mark = match game.state() {
            MatchState::InProgress(mark) => mark,
            _ => unreachable!("terminal states are handled below"),
        };

        println!("\n{}'s turn.", paint(mark));
        if config.gravity {
            let open: Vec<String> = game
                .board()
                .open_columns()
                .into_iter()
                .map(|(col, row)| ConnectFourMove { col, row: Some(row) }.to_string())
                .collect();
            println!("Available positions: {}", open.join(", "));
        }
        let input = match prompt(prompt_text(&config), lines)? {
            Some(input) => input,
            None => return Ok(false),
        };

        let raw = match parse_move(&config, &input) {
            Ok(raw) => raw,
            Err(reason) => {
                println!("{} Try again.", reason.to_string().red());
                continue;
            }
        };

        match game.apply_move(&raw) {
            Ok(receipt) => {
                render(game.board(), &config);
                match receipt.state {
                    MatchState::Won(winner) => {
                        println!("\n{} IS THE WINNER!!!", paint(winner));
                        return Ok(true);
                    }
                    MatchState::Draw => {
                        println!("\nDRAW! NOBODY WINS!");
                        return Ok(true);
                    }
                    MatchState::InProgress(_) => {}
                }
            }
            Err(reason) => println!("{} Try again.", reason.to_string().red()),
        }
    }
}

fn prompt_text(config: &GameConfig) -> &'static str {
    if config.gravity {
        "Enter column letter and row number (e.g. a1): "
    } else {
        "Enter row and column separated by a comma (e.g. 0,2): "
    }
}

fn parse_move(config: &GameConfig, input: &str) -> Result<RawMove, grid_duel::Reject> {
    if config.gravity {
        ConnectFourMove::from_str(input).map(RawMove::from)
    } else {
        TicTacToeMove::from_str(input).map(RawMove::from)
    }
}

/// Prints a prompt and reads one line. Returns `None` once stdin closes.
fn prompt(
    text: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn paint(mark: Mark) -> colored::ColoredString {
    match mark {
        Mark::X => "X".red().bold(),
        Mark::O => "O".yellow().bold(),
    }
}

fn cell_symbol(cell: Option<Mark>) -> colored::ColoredString {
    match cell {
        Some(mark) => paint(mark),
        None => " ".normal(),
    }
}

/// Draws the board in the style of the game being played: free boards as
/// a 0-indexed row/column grid, gravity boards bottom-up with lettered
/// columns.
fn render(board: &Board, config: &GameConfig) {
    if config.gravity {
        render_gravity(board);
    } else {
        render_free(board);
    }
}

fn render_free(board: &Board) {
    let mut header = String::from("|R\\C| ");
    for col in 0..board.cols() {
        header.push_str(&format!("{col} | "));
    }
    let separator = "-".repeat(header.len());
    println!("{header}");
    println!("{separator}");
    for row in 0..board.rows() {
        print!("| {row} | ");
        for col in 0..board.cols() {
            let cell = board.cell(grid_duel::Position { row, col });
            print!("{} | ", cell_symbol(cell));
        }
        println!();
        println!("{separator}");
    }
}

fn render_gravity(board: &Board) {
    // row 0 is the bottom, so draw from the top down with 1-based labels
    for row in (0..board.rows()).rev() {
        print!("| {} | ", row + 1);
        for col in 0..board.cols() {
            let cell = board.cell(grid_duel::Position { row, col });
            print!("{} | ", cell_symbol(cell));
        }
        println!();
        println!("{}", "-".repeat(6 + 4 * board.cols()));
    }
    let mut header = String::from("|R/C| ");
    for col in 0..board.cols() {
        header.push((b'a' + col as u8) as char);
        header.push_str(" | ");
    }
    println!("{header}");
}
