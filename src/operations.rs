use crate::constants::{SPRITE_SHEET_ADDR, SPRITE_SIZE};
use crate::error::Result;
use crate::opcode::Opcode;
use crate::random::RandomSource;
use crate::state::State;

/// What an operation does to the program counter.
///
/// The pc already points past the executing opcode when an operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramCounter {
    /// carry on with the next opcode
    Next,
    /// skip the next opcode
    Skip,
    /// continue at an address
    Jump(u16),
    /// halt until a key is pressed, then store it in the register
    AwaitKey(u8),
}

use ProgramCounter::*;

fn skip_if(condition: bool) -> ProgramCounter {
    if condition {
        Skip
    } else {
        Next
    }
}

/// machine code routine at addr; modern interpreters ignore these
pub fn sys(
    _op: &dyn Opcode,
    _state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(Next)
}

/// clear
pub fn clr(
    _op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.clear_display();
    Ok(Next)
}

/// PC = STACK.pop()
pub fn rts(
    _op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(Jump(state.pop()?))
}

/// PC = addr
pub fn jump(
    op: &dyn Opcode,
    _state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(Jump(op.nnn()))
}

/// STACK.push(PC); PC = addr
pub fn call(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.push(state.pc())?;
    Ok(Jump(op.nnn()))
}

/// if Vx == nn then pc += 2
pub fn ske(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(skip_if(state.register(op.x()) == op.nn()))
}

/// if Vx != nn then pc += 2
pub fn skne(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(skip_if(state.register(op.x()) != op.nn()))
}

/// if Vx == Vy then pc += 2
pub fn skre(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(skip_if(state.register(op.x()) == state.register(op.y())))
}

/// Vx = nn
pub fn load(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_register(op.x(), op.nn());
    Ok(Next)
}

/// Vx += nn
/// Overflow wraps and VF is left alone
pub fn add(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let res = state.register(op.x()).wrapping_add(op.nn());
    state.set_register(op.x(), res);
    Ok(Next)
}

/// Vx = Vy
pub fn mv(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_register(op.x(), state.register(op.y()));
    Ok(Next)
}

/// Vx |= Vy
pub fn or(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_register(op.x(), state.register(op.x()) | state.register(op.y()));
    Ok(Next)
}

/// Vx &= Vy
pub fn and(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_register(op.x(), state.register(op.x()) & state.register(op.y()));
    Ok(Next)
}

/// Vx ^= Vy
pub fn xor(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_register(op.x(), state.register(op.x()) ^ state.register(op.y()));
    Ok(Next)
}

// The flag-setting operations below all write VF after Vx, so when x is F the
// flag wins over the result.

/// Vx += Vy; VF = overflow
pub fn addr(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let (res, over) = state.register(op.x()).overflowing_add(state.register(op.y()));
    state.set_register(op.x(), res);
    state.set_register(0xF, over as u8);
    Ok(Next)
}

/// Vx -= Vy; VF = !underflow
pub fn sub(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let (res, under) = state.register(op.x()).overflowing_sub(state.register(op.y()));
    state.set_register(op.x(), res);
    state.set_register(0xF, !under as u8);
    Ok(Next)
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let vx = state.register(op.x());
    state.set_register(op.x(), vx >> 1);
    state.set_register(0xF, vx & 0x1);
    Ok(Next)
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let (res, under) = state.register(op.y()).overflowing_sub(state.register(op.x()));
    state.set_register(op.x(), res);
    state.set_register(0xF, !under as u8);
    Ok(Next)
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let vx = state.register(op.x());
    state.set_register(op.x(), vx << 1);
    state.set_register(0xF, vx >> 7);
    Ok(Next)
}

/// if Vx != Vy then pc += 2
pub fn skrne(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(skip_if(state.register(op.x()) != state.register(op.y())))
}

/// I = addr
pub fn loadi(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_i(op.nnn());
    Ok(Next)
}

/// PC = V0 + addr
/// The sum can pass the end of memory, so it's cut back to 12 bits
pub fn jumpi(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(Jump((u16::from(state.register(0x0)) + op.nnn()) & 0xFFF))
}

/// Vx = rand_byte & nn
pub fn rand(
    op: &dyn Opcode,
    state: &mut State,
    rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_register(op.x(), rng.random_byte() & op.nn());
    Ok(Next)
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let x = usize::from(state.register(op.x()));
    let y = usize::from(state.register(op.y()));
    let sprite = state.read_block(state.i(), usize::from(op.n()))?.to_vec();

    let mut collision = false;
    for (row, byte) in sprite.iter().enumerate() {
        for bit in 0..8 {
            let on = (byte >> (7 - bit)) & 0x1 == 0x1;
            collision |= state.draw_pixel(x + bit, y + row, on);
        }
    }

    state.set_register(0xF, collision as u8);
    Ok(Next)
}

/// if Vx.pressed then pc += 2
pub fn skpr(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(skip_if(state.is_key_pressed(state.register(op.x()))))
}

/// if !Vx.pressed then pc += 2
pub fn skup(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(skip_if(!state.is_key_pressed(state.register(op.x()))))
}

/// Vx = DT
pub fn moved(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_register(op.x(), state.delay_timer());
    Ok(Next)
}

/// await keypress for Vx
pub fn keyd(
    op: &dyn Opcode,
    _state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    Ok(AwaitKey(op.x()))
}

/// DT = Vx
pub fn loads(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_delay_timer(state.register(op.x()));
    Ok(Next)
}

/// ST = Vx
pub fn ld(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_sound_timer(state.register(op.x()));
    Ok(Next)
}

/// I += Vx
pub fn addi(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    state.set_i(state.i().wrapping_add(u16::from(state.register(op.x()))));
    Ok(Next)
}

/// I = address of the sprite for the low nibble of Vx
/// See constants::SPRITE_SHEET
pub fn ldspr(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let digit = u16::from(state.register(op.x()) & 0xF);
    state.set_i(SPRITE_SHEET_ADDR + digit * SPRITE_SIZE);
    Ok(Next)
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let vx = state.register(op.x());
    state.write_block(state.i(), &[vx / 100, vx / 10 % 10, vx % 10])?;
    Ok(Next)
}

/// mem[I..=I+x] = V0..=Vx
/// I itself is left alone
pub fn stor(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let count = usize::from(op.x()) + 1;
    let registers = *state.registers();
    state.write_block(state.i(), &registers[..count])?;
    Ok(Next)
}

/// V0..=Vx = mem[I..=I+x]
/// I itself is left alone
pub fn read(
    op: &dyn Opcode,
    state: &mut State,
    _rng: &mut dyn RandomSource,
) -> Result<ProgramCounter> {
    let count = usize::from(op.x()) + 1;
    let values = state.read_block(state.i(), count)?.to_vec();
    for (x, value) in values.into_iter().enumerate() {
        state.set_register(x as u8, value);
    }
    Ok(Next)
}
