use log::debug;

use crate::config::Config;
use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_COUNT, MAX_ROM_SIZE, MAX_STACK_DEPTH, MEMORY_SIZE,
    PROGRAM_START, REGISTER_COUNT, SPRITE_SHEET, SPRITE_SHEET_ADDR,
};
use crate::error::{Chip8Error, Result};

/// # Chip-8 FrameBuffer
/// One bool per pixel, indexed `[y][x]`.
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// The Chip-8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is also the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented at 60Hz
/// - the sound timer beeps while it's non-zero
///
/// ## Memory
/// - a stack of return addresses, 12 deep unless configured otherwise
/// - 4096 bytes of addressable memory, the sprite sheet lives at 0x000
/// - 32x64 frame buffer
///
/// ## Input
/// - 16 bools tracking the pressed status of keys 0..F
///
/// Nothing outside this module indexes the arrays directly; every accessor
/// either checks its bounds or masks its index to the array's size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    v: [u8; REGISTER_COUNT],
    i: u16,
    pc: u16,
    sp: usize,
    stack: [u16; MAX_STACK_DEPTH],
    stack_depth: usize,
    delay_timer: u8,
    sound_timer: u8,
    memory: [u8; MEMORY_SIZE],
    frame_buffer: FrameBuffer,
    draw_flag: bool,
    pressed_keys: [bool; KEY_COUNT],
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font = SPRITE_SHEET_ADDR as usize;
        memory[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; MAX_STACK_DEPTH],
            stack_depth: Config::default().stack_depth,
            delay_timer: 0,
            sound_timer: 0,
            memory,
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            pressed_keys: [false; KEY_COUNT],
        }
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        if config.stack_depth == 0 || config.stack_depth > MAX_STACK_DEPTH {
            return Err(Chip8Error::InvalidStackDepth {
                depth: config.stack_depth,
                max: MAX_STACK_DEPTH,
            });
        }
        Ok(State {
            stack_depth: config.stack_depth,
            ..State::new()
        })
    }

    /// Copies a ROM into memory at `PROGRAM_START`.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        debug!("loading {} byte ROM at {:#06X}", rom.len(), PROGRAM_START);
        self.write_block(PROGRAM_START, rom)
    }

    // Memory

    pub fn read_memory(&self, addr: u16) -> Result<u8> {
        self.memory
            .get(addr as usize)
            .copied()
            .ok_or(Chip8Error::OutOfBounds {
                address: addr as usize,
            })
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) -> Result<()> {
        match self.memory.get_mut(addr as usize) {
            Some(byte) => {
                *byte = value;
                Ok(())
            }
            None => Err(Chip8Error::OutOfBounds {
                address: addr as usize,
            }),
        }
    }

    /// `len` bytes starting at `addr`.
    pub fn read_block(&self, addr: u16, len: usize) -> Result<&[u8]> {
        let range = Self::block_range(addr, len)?;
        Ok(&self.memory[range])
    }

    /// Copies `bytes` into memory starting at `addr`. Nothing is written unless
    /// every byte fits.
    pub fn write_block(&mut self, addr: u16, bytes: &[u8]) -> Result<()> {
        let range = Self::block_range(addr, bytes.len())?;
        self.memory[range].copy_from_slice(bytes);
        Ok(())
    }

    /// The opcode at `addr`; memory is stored as bytes, but opcodes are 16 bits
    /// so we combine two subsequent bytes.
    pub fn fetch(&self, addr: u16) -> Result<u16> {
        let word = self.read_block(addr, 2)?;
        Ok(u16::from(word[0]) << 8 | u16::from(word[1]))
    }

    fn block_range(addr: u16, len: usize) -> Result<std::ops::Range<usize>> {
        let start = addr as usize;
        let end = start + len;
        if end > MEMORY_SIZE {
            // The first byte that falls outside memory.
            return Err(Chip8Error::OutOfBounds {
                address: start.max(MEMORY_SIZE),
            });
        }
        Ok(start..end)
    }

    // Stack

    pub fn push(&mut self, return_addr: u16) -> Result<()> {
        if self.sp >= self.stack_depth {
            return Err(Chip8Error::StackOverflow {
                depth: self.stack_depth,
            });
        }
        self.stack[self.sp] = return_addr;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }

    /// Number of return addresses currently on the stack.
    pub fn stack_depth(&self) -> usize {
        self.sp
    }

    /// Number of return addresses the stack can hold.
    pub fn stack_capacity(&self) -> usize {
        self.stack_depth
    }

    // Registers

    /// Vx, where `x` is taken as a nibble.
    pub fn register(&self, x: u8) -> u8 {
        self.v[usize::from(x & 0xF)]
    }

    pub fn set_register(&mut self, x: u8, value: u8) {
        self.v[usize::from(x & 0xF)] = value;
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.v
    }

    pub fn i(&self) -> u16 {
        self.i
    }

    pub fn set_i(&mut self, i: u16) {
        self.i = i;
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    // Display

    /// XORs the pixel at (x, y) with `on`, wrapping both coordinates onto the
    /// screen. Returns true if the pixel was erased (set -> unset).
    ///
    /// Only a lit sprite bit changes the display, so only that raises the draw flag.
    pub fn draw_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if !on {
            return false;
        }
        let pixel = &mut self.frame_buffer[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH];
        let erased = *pixel;
        *pixel = !*pixel;
        self.draw_flag = true;
        erased
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.frame_buffer[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    pub fn clear_display(&mut self) {
        self.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.draw_flag = true;
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    /// Whether the display changed since the flag was last cleared.
    pub fn draw_flag(&self) -> bool {
        self.draw_flag
    }

    pub fn clear_draw_flag(&mut self) {
        self.draw_flag = false;
    }

    // Timers

    /// One 60Hz tick; both timers stop at zero.
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer = value;
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer = value;
    }

    pub fn sound_active(&self) -> bool {
        self.sound_timer > 0
    }

    // Keypad

    /// Whether key `k` is held, where `k` is taken as a nibble.
    pub fn is_key_pressed(&self, k: u8) -> bool {
        self.pressed_keys[usize::from(k & 0xF)]
    }

    pub fn set_key(&mut self, k: u8, pressed: bool) -> Result<()> {
        match self.pressed_keys.get_mut(usize::from(k)) {
            Some(key) => {
                *key = pressed;
                Ok(())
            }
            None => Err(Chip8Error::InvalidKey { key: k }),
        }
    }

    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.pressed_keys = keys;
    }

    pub fn pressed_keys(&self) -> &[bool; KEY_COUNT] {
        &self.pressed_keys
    }

    /// The lowest-numbered key being held, if any.
    pub fn first_pressed_key(&self) -> Option<u8> {
        self.pressed_keys
            .iter()
            .position(|&pressed| pressed)
            .map(|k| k as u8)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
