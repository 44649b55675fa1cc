pub use chip8::{Chip8, Status};
pub use config::Config;
pub use constants::CLOCK_SPEED;
pub use error::{Chip8Error, Result};
pub use random::{RandomSource, Sequence};

mod chip8;
mod config;
pub mod constants;
mod error;
pub mod instruction;
pub mod opcode;
pub mod operations;
pub mod random;
pub mod state;
