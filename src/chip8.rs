use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::KEY_COUNT;
use crate::error::{Chip8Error, Result};
use crate::instruction::Instruction;
use crate::operations::ProgramCounter;
use crate::random::RandomSource;
use crate::state::{FrameBuffer, State};

/// What the CPU is doing between calls to `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Each `step` executes one instruction.
    Running,
    /// `FX0A` is waiting; each `step` only checks the keypad.
    WaitingForKey { register: u8 },
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - whether the CPU is running or waiting on a key
///  - the source of random bytes for `CXNN`
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    status: Status,
    rng: Box<dyn RandomSource>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRng::from_entropy()))
    }

    /// A Chip-8 drawing its random bytes from `rng`.
    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        Chip8 {
            state: State::new(),
            status: Status::Running,
            rng,
        }
    }

    pub fn with_config(config: Config, rng: Box<dyn RandomSource>) -> Result<Self> {
        Ok(Chip8 {
            state: State::with_config(&config)?,
            status: Status::Running,
            rng,
        })
    }

    /// Load a rom into memory at 0x200
    ///
    /// # Arguments
    /// * `rom` the raw contents of a ROM
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.state.load_rom(rom)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the FrameBuffer if the display should be redrawn, and lowers the
    /// draw flag so the same frame isn't handed out twice.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag() {
            self.state.clear_draw_flag();
            Some(*self.state.frame_buffer())
        } else {
            None
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        self.state.frame_buffer()
    }

    /// Whether a tone should be playing.
    pub fn sound_active(&self) -> bool {
        self.state.sound_active()
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) -> Result<()> {
        self.state.set_key(key, true)
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) -> Result<()> {
        self.state.set_key(key, false)
    }

    /// Replace the whole keypad at once
    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.state.set_keys(keys);
    }

    /// Advances the CPU by a single cycle
    /// - if awaiting a keypress, checks the keypad and executes nothing
    /// - otherwise gets and executes the next opcode
    ///
    /// Returns the status the CPU is left in.
    pub fn step(&mut self) -> Result<Status> {
        match self.status {
            Status::Running => self.execute()?,
            Status::WaitingForKey { register } => {
                if let Some(key) = self.state.first_pressed_key() {
                    debug!("key {:X} pressed, stored in V{:X}", key, register);
                    self.state.set_register(register, key);
                    self.status = Status::Running;
                }
            }
        }
        Ok(self.status)
    }

    /// One 60Hz timer tick; call it once per frame no matter how many steps ran.
    pub fn tick_timers(&mut self) {
        self.state.tick_timers();
    }

    /// Fetches, decodes and executes the opcode at the pc.
    fn execute(&mut self) -> Result<()> {
        let pc = self.state.pc();
        let op = self.state.fetch(pc)?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.registers(),
            self.state.i(),
            pc
        );

        let instruction =
            Instruction::decode(&op).ok_or(Chip8Error::InvalidOpcode { opcode: op, pc })?;
        if instruction == Instruction::Sys {
            warn!("ignoring machine code call {:04X} at {:04X}", op, pc);
        }

        // Operations see the pc past their own opcode; a failed one leaves it
        // on the opcode that failed.
        self.state.set_pc(pc.wrapping_add(2));
        let effect = match instruction.operation()(&op, &mut self.state, self.rng.as_mut()) {
            Ok(effect) => effect,
            Err(e) => {
                self.state.set_pc(pc);
                return Err(e);
            }
        };
        match effect {
            ProgramCounter::Next => {}
            ProgramCounter::Skip => self.state.set_pc(self.state.pc().wrapping_add(2)),
            ProgramCounter::Jump(addr) => self.state.set_pc(addr),
            ProgramCounter::AwaitKey(register) => {
                debug!("waiting for a key to store in V{:X}", register);
                self.status = Status::WaitingForKey { register };
            }
        }
        Ok(())
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
