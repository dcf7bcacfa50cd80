#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tictactoe::{init_logging, is_conventional_size, ui, MAX_SIZE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Skip the menu and start a game on an NxN grid (odd, 3..=15).
    #[arg(long)]
    size: Option<usize>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.size {
        Some(size) => {
            if !is_conventional_size(size) {
                anyhow::bail!(
                    "--size must be an odd number between 3 and {}, got {}",
                    MAX_SIZE,
                    size
                );
            }
            while ui::run_game(size)? {}
        }
        None => {
            while let Some(size) = ui::main_menu()? {
                if !ui::run_game(size)? {
                    break;
                }
            }
            println!("Ending game...");
        }
    }
    Ok(())
}
