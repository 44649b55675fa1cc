use thiserror::Error;

/// Everything that can stop a Chip-8 session.
///
/// None of these are recoverable: programs depend on exact addressing and
/// arithmetic, so the driver is expected to end the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Chip8Error {
    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBounds { address: usize },

    #[error("stack overflow: call nesting exceeded {depth} levels")]
    StackOverflow { depth: usize },

    #[error("stack underflow: returned from a subroutine with an empty call stack")]
    StackUnderflow,

    #[error("invalid opcode {opcode:#06X} at {pc:#06X}")]
    InvalidOpcode { opcode: u16, pc: u16 },

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("key {key:#04X} is not on the keypad")]
    InvalidKey { key: u8 },

    #[error("stack depth {depth} is not supported, must be between 1 and {max}")]
    InvalidStackDepth { depth: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
