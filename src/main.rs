use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::ui::{print_greeting, print_player_view, render_board};
use sea_battle::{
    init_logging, AiPlayer, CliPlayer, GameConfig, GameEngine, Side, BOARD_SIZE, FLEET,
};

#[derive(Parser)]
#[command(author, version, about = "Sea Battle on the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play(GameArgs),
    /// Let two computer players fight it out and print the result.
    Sim(GameArgs),
}

#[derive(Args)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE, help = "Board width and height")]
    size: usize,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = FLEET.to_vec(),
        help = "Ship lengths placed on each board (e.g., --fleet 3,2,2,1,1,1,1)"
    )]
    fleet: Vec<usize>,
}

impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        GameConfig::new(self.size, self.fleet.clone()).context("invalid game configuration")
    }

    /// RNG for board generation and one for each computer player.
    fn rngs(&self) -> [SmallRng; 3] {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                [0, 1, 2].map(|i| SmallRng::seed_from_u64(s.wrapping_add(i)))
            }
            None => {
                let mut seed_rng = rand::rng();
                [0, 1, 2].map(|_| SmallRng::from_rng(&mut seed_rng))
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play(&args),
        Commands::Sim(args) => sim(&args),
    }
}

fn play(args: &GameArgs) -> anyhow::Result<()> {
    let config = args.config()?;
    let [mut board_rng, ai_rng, _] = args.rngs();

    print_greeting();
    let mut engine = GameEngine::setup(
        &config,
        Box::new(CliPlayer::stdio()),
        Box::new(AiPlayer::new(config.size(), ai_rng)),
        &mut board_rng,
    )?;

    while !engine.state().is_terminal() {
        print_player_view(&engine, Side::A);
        if engine.state().active_side() == Some(Side::B) {
            println!("{}", "-".repeat(24));
            println!("Enemy's turn!");
        }
        engine.play_turn()?;
    }

    print_player_view(&engine, Side::A);
    println!("{}", "-".repeat(24));
    match engine.winner() {
        Some(Side::A) => println!("Congratulations, you won!"),
        _ => println!("The enemy won!"),
    }
    Ok(())
}

fn sim(args: &GameArgs) -> anyhow::Result<()> {
    let config = args.config()?;
    let [mut board_rng, rng_a, rng_b] = args.rngs();

    let mut engine = GameEngine::setup(
        &config,
        Box::new(AiPlayer::new(config.size(), rng_a)),
        Box::new(AiPlayer::new(config.size(), rng_b)),
        &mut board_rng,
    )?;
    let winner = engine.run()?;

    for side in [Side::A, Side::B] {
        let mut board = engine.board(side).clone();
        board.set_hidden(false);
        println!("Side {:?} board ({} ships sunk):", side, board.sunk_count());
        print!("{}", render_board(&board));
    }
    println!("Side {:?} wins after {} shots", winner, engine.shots());
    Ok(())
}
