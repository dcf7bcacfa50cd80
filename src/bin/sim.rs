//! Random self-play simulator: both sides pick uniformly among the empty
//! cells until the game ends. Useful for eyeballing tally behaviour on odd
//! grid sizes and for reproducing games from a seed.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};
#[cfg(feature = "std")]
use tictactoe::{Cell, Game, GameStatus};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <size> <seed>", args[0]);
        std::process::exit(1);
    }
    let size: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(size).map_err(|e| anyhow::anyhow!(e))?;

    while game.status() == GameStatus::InProgress {
        let empty: Vec<(usize, usize)> = (0..size)
            .flat_map(|r| (0..size).map(move |c| (r, c)))
            .filter(|&(r, c)| matches!(game.board().cell(r, c), Ok(Cell::Empty)))
            .collect();
        let (row, col) = empty[rng.random_range(0..empty.len())];
        let placement = game.play(row, col).map_err(|e| anyhow::anyhow!(e))?;
        debug_assert!(placement.was_placed());
    }

    println!("{:?}", game.board());
    match game.status() {
        GameStatus::Won(player) => {
            println!("winner: {:?} in {} turns", player, game.turns())
        }
        GameStatus::Draw => println!("draw after {} turns", game.turns()),
        GameStatus::InProgress => unreachable!(),
    }
    Ok(())
}
