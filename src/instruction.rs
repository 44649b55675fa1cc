use crate::error::Result;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::random::RandomSource;
use crate::state::State;

/// The signature shared by everything in `operations`.
pub type Operation =
    fn(op: &dyn Opcode, state: &mut State, rng: &mut dyn RandomSource) -> Result<ProgramCounter>;

/// Every instruction the interpreter understands, named after its operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Sys,
    Clr,
    Rts,
    Jump,
    Call,
    Ske,
    Skne,
    Skre,
    Load,
    Add,
    Mv,
    Or,
    And,
    Xor,
    Addr,
    Sub,
    Shr,
    Subn,
    Shl,
    Skrne,
    Loadi,
    Jumpi,
    Rand,
    Draw,
    Skpr,
    Skup,
    Moved,
    Keyd,
    Loads,
    Ld,
    Addi,
    Ldspr,
    Bcd,
    Stor,
    Read,
}

impl Instruction {
    /// Selects the Instruction for an Opcode, or None if nothing matches.
    pub fn decode(op: &dyn Opcode) -> Option<Self> {
        use Instruction::*;

        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clr,
            (0x0, 0x0, 0xE, 0xE) => Rts,
            (0x0, ..) => Sys,
            (0x1, ..) => Jump,
            (0x2, ..) => Call,
            (0x3, ..) => Ske,
            (0x4, ..) => Skne,
            (0x5, .., 0x0) => Skre,
            (0x6, ..) => Load,
            (0x7, ..) => Add,
            (0x8, .., 0x0) => Mv,
            (0x8, .., 0x1) => Or,
            (0x8, .., 0x2) => And,
            (0x8, .., 0x3) => Xor,
            (0x8, .., 0x4) => Addr,
            (0x8, .., 0x5) => Sub,
            (0x8, .., 0x6) => Shr,
            (0x8, .., 0x7) => Subn,
            (0x8, .., 0xE) => Shl,
            (0x9, .., 0x0) => Skrne,
            (0xA, ..) => Loadi,
            (0xB, ..) => Jumpi,
            (0xC, ..) => Rand,
            (0xD, ..) => Draw,
            (0xE, _, 0x9, 0xE) => Skpr,
            (0xE, _, 0xA, 0x1) => Skup,
            (0xF, _, 0x0, 0x7) => Moved,
            (0xF, _, 0x0, 0xA) => Keyd,
            (0xF, _, 0x1, 0x5) => Loads,
            (0xF, _, 0x1, 0x8) => Ld,
            (0xF, _, 0x1, 0xE) => Addi,
            (0xF, _, 0x2, 0x9) => Ldspr,
            (0xF, _, 0x3, 0x3) => Bcd,
            (0xF, _, 0x5, 0x5) => Stor,
            (0xF, _, 0x6, 0x5) => Read,
            _ => return None,
        };
        Some(instruction)
    }

    /// The function that carries the Instruction out.
    pub fn operation(self) -> Operation {
        match self {
            Instruction::Sys => sys,
            Instruction::Clr => clr,
            Instruction::Rts => rts,
            Instruction::Jump => jump,
            Instruction::Call => call,
            Instruction::Ske => ske,
            Instruction::Skne => skne,
            Instruction::Skre => skre,
            Instruction::Load => load,
            Instruction::Add => add,
            Instruction::Mv => mv,
            Instruction::Or => or,
            Instruction::And => and,
            Instruction::Xor => xor,
            Instruction::Addr => addr,
            Instruction::Sub => sub,
            Instruction::Shr => shr,
            Instruction::Subn => subn,
            Instruction::Shl => shl,
            Instruction::Skrne => skrne,
            Instruction::Loadi => loadi,
            Instruction::Jumpi => jumpi,
            Instruction::Rand => rand,
            Instruction::Draw => draw,
            Instruction::Skpr => skpr,
            Instruction::Skup => skup,
            Instruction::Moved => moved,
            Instruction::Keyd => keyd,
            Instruction::Loads => loads,
            Instruction::Ld => ld,
            Instruction::Addi => addi,
            Instruction::Ldspr => ldspr,
            Instruction::Bcd => bcd,
            Instruction::Stor => stor,
            Instruction::Read => read,
        }
    }
}
