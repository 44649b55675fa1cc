/// Bytes of addressable memory.
pub const MEMORY_SIZE: usize = 4096;

/// Where ROMs are loaded and where execution begins.
/// 0x000..0x200 is reserved for the interpreter.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Default number of nested subroutine calls.
pub const STACK_DEPTH: usize = 12;

/// Hard capacity of the stack array; configured depths can't exceed it.
pub const MAX_STACK_DEPTH: usize = 16;

/// Instructions executed per second when the driver doesn't say otherwise.
pub const CLOCK_SPEED: u32 = 700;

/// Timers count down at this rate.
pub const TIMER_HZ: u32 = 60;

/// Address of the first glyph in `SPRITE_SHEET`.
pub const SPRITE_SHEET_ADDR: u16 = 0x000;

/// Bytes per glyph in `SPRITE_SHEET`.
pub const SPRITE_SIZE: u16 = 5;

/// # Sprite sheet
/// Hex digits 0..F as 8x5 monochrome glyphs. Only the high nibble of each row is lit.
/// ```text
/// 0xF0 ****
/// 0x90 *  *
/// 0x90 *  *
/// 0x90 *  *
/// 0xF0 ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
