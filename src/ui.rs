#![cfg(feature = "std")]

//! Menu, input collection and grid rendering for terminal play. Everything
//! here talks to the core only through `Game`/`Board` and their read-only
//! accessors.

use std::io::{self, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{Cell, GameStatus, Placement},
    config::{EMPTY_GLYPH, MAX_SIZE, MIN_SIZE},
    game::Game,
};

/// A validated answer to a coordinate prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptInput {
    /// Player asked to quit.
    Quit,
    /// Zero-based index, translated from the 1-based value typed.
    Index(usize),
}

/// Parse one prompt line: `q` quits, otherwise an integer in [1, max]
/// translated to a zero-based index. `None` means re-prompt.
pub fn parse_index(input: &str, max: usize) -> Option<PromptInput> {
    let input = input.trim();
    if input == "q" {
        return Some(PromptInput::Quit);
    }
    let value: usize = input.parse().ok()?;
    if value >= 1 && value <= max {
        Some(PromptInput::Index(value - 1))
    } else {
        None
    }
}

/// Width of the widest row/column label, for grid alignment.
pub fn pad_width(size: usize) -> usize {
    let mut digits = 1;
    let mut rest = size / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

/// Print the grid with 1-based row and column headers.
pub fn print_grid(board: &Board) {
    let size = board.size();
    let pad = pad_width(size);
    println!();
    print!("{} ", " ".repeat(pad));
    for c in 0..size {
        print!("{:>width$}", c + 1, width = pad + 1);
    }
    println!("\n");
    for r in 0..size {
        print!("{:>width$}", r + 1, width = pad + 1);
        for c in 0..size {
            let glyph = match board.cell(r, c) {
                Ok(Cell::Taken(p)) => p.glyph(),
                _ => EMPTY_GLYPH,
            };
            print!("{:>width$}", glyph, width = pad + 1);
        }
        println!("\n");
    }
}

fn read_line() -> io::Result<String> {
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Prompt until the player gives a valid 1-based index or quits.
fn prompt_index(label: &str, max: usize) -> io::Result<PromptInput> {
    loop {
        print!("{}: ", label);
        let line = read_line()?;
        match parse_index(&line, max) {
            Some(input) => return Ok(input),
            None => println!("Invalid {}. Try again.", label.to_lowercase()),
        }
    }
}

/// Grid-size prompt: odd sizes only, size 1 rejected, sizes above
/// [`MAX_SIZE`] allowed with a warning. `None` means the player quit.
fn prompt_size() -> io::Result<Option<usize>> {
    loop {
        print!(
            "Enter desired grid size (e.g. {0} for {0}x{0}). Odd numbers only: ",
            MIN_SIZE
        );
        let line = read_line()?;
        let size: usize = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid selection.");
                continue;
            }
        };
        if size > MAX_SIZE {
            println!("Grids this large are unsupported (may look ugly).");
            print!("Continue anyway? (y/n): ");
            let answer = read_line()?;
            if answer.trim() == "y" {
                return Ok(Some(size));
            }
        } else if size % 2 == 0 {
            println!("Currently, the game only supports odd numbered grids.");
        } else if size == 1 {
            println!("That wouldn't be very interesting.");
        } else {
            return Ok(Some(size));
        }
    }
}

/// Main menu. Returns the chosen grid size, or `None` to quit.
pub fn main_menu() -> io::Result<Option<usize>> {
    println!("* Tic-Tac-Toe Game! *\n");
    loop {
        println!("Menu selection");
        println!("1) New Game");
        println!("2) Quit");
        print!("Enter selection: ");
        let line = read_line()?;
        match line.trim().parse::<u32>() {
            Ok(1) => return prompt_size(),
            Ok(2) => return Ok(None),
            _ => println!("Invalid selection."),
        }
    }
}

/// Play one game to completion. Returns `true` if the player wants to go
/// back to the menu, `false` to exit.
pub fn run_game(size: usize) -> io::Result<bool> {
    let mut game = match Game::new(size) {
        Ok(g) => g,
        Err(e) => {
            println!("Cannot start game: {}", e);
            return Ok(true);
        }
    };
    let end_message = "Thanks for playing!";

    while game.status() == GameStatus::InProgress {
        print_grid(game.board());
        println!("Player {}'s turn.", game.current_player().glyph());
        println!("Pick row and column to tick (q to quit)");

        let row = match prompt_index("Row", size)? {
            PromptInput::Quit => {
                println!("{}", end_message);
                return Ok(false);
            }
            PromptInput::Index(r) => r,
        };
        let col = match prompt_index("Column", size)? {
            PromptInput::Quit => {
                println!("{}", end_message);
                return Ok(false);
            }
            PromptInput::Index(c) => c,
        };

        match game.play(row, col) {
            Ok(Placement::Placed(_)) => {}
            Ok(Placement::Occupied) => println!("Cell is already occupied! Try again.\n"),
            Err(e) => println!("Error: {}", e),
        }
    }

    print_grid(game.board());
    match game.status() {
        GameStatus::Won(player) => println!("Player {} wins!", player.glyph()),
        GameStatus::Draw => println!("No one wins!"),
        GameStatus::InProgress => unreachable!("loop exits only on a finished game"),
    }

    println!("Press 1 to return to main menu, or any other key to exit.");
    print!("What do you want to do?: ");
    let line = read_line()?;
    if line.trim() == "1" {
        Ok(true)
    } else {
        println!("{}", end_message);
        Ok(false)
    }
}
