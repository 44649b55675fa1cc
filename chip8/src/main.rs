//! Headless Chip-8 runner
//!
//! Runs a ROM at a fixed clock speed and prints the display to the terminal.
//! Set `RUST_LOG=emu8=trace` to see every executed opcode.

use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use emu8::constants::STACK_DEPTH;
use emu8::{Chip8, Config, CLOCK_SPEED};

mod display;
mod run;

use display::TerminalDisplay;
use run::Settings;

/// Chip-8 emulator
#[derive(Parser, Debug)]
#[command(name = "chip8")]
#[command(about = "Runs a Chip-8 ROM in the terminal", long_about = None)]
struct Args {
    /// Path to the ROM file
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(short, long, default_value_t = CLOCK_SPEED)]
    clock_speed: u32,

    /// Stop after this many 60Hz frames (0 runs until the machine halts)
    #[arg(short, long, default_value_t = 0)]
    frames: u64,

    /// Seed for CXNN's random numbers
    #[arg(short, long)]
    seed: Option<u64>,

    /// Nested subroutine calls allowed before the stack overflows
    #[arg(long, default_value_t = STACK_DEPTH)]
    stack_depth: usize,

    /// Run as fast as possible instead of in real time
    #[arg(long)]
    fast: bool,

    /// Print the display whenever it changes
    #[arg(short, long)]
    render: bool,

    /// Print the display once the emulator stops
    #[arg(short, long)]
    dump: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let rom = fs::read(&args.rom)?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = Config {
        stack_depth: args.stack_depth,
    };
    let mut chip8 = Chip8::with_config(config, Box::new(rng))?;
    chip8.load_rom(&rom)?;
    info!("loaded {} ({} bytes)", args.rom.display(), rom.len());

    let settings = Settings {
        clock_speed: args.clock_speed,
        frames: args.frames,
        fast: args.fast,
        render: args.render,
    };
    let display = TerminalDisplay::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run::run(&mut chip8, &settings, &display, &mut out);

    if args.dump {
        display.render(&mut out, chip8.frame_buffer())?;
    }

    if let Err(e) = &result {
        eprintln!("chip8 halted at pc {:#06X}: {}", chip8.state().pc(), e);
    }
    result?;
    Ok(())
}
