use std::error::Error;
use std::io::Write;
use std::time::{Duration, Instant};

use log::{debug, info};

use emu8::constants::TIMER_HZ;
use emu8::{Chip8, Status};

use crate::display::TerminalDisplay;

/// Whether the emulator is still going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorStatus {
    Stop,
    Running,
    /// The program is blocked on `FX0A`.
    Paused,
}

/// How the frame loop paces and presents the machine.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Instructions per second.
    pub clock_speed: u32,
    /// Stop after this many frames; 0 runs until the machine halts.
    pub frames: u64,
    /// Don't sleep to match real time.
    pub fast: bool,
    /// Print the display every time it changes.
    pub render: bool,
}

/// Runs `chip8` one 60Hz frame at a time until `settings.frames` have passed
/// or the machine errors. Returns the number of frames run.
///
/// Each frame executes `clock_speed / 60` instructions and ticks the timers
/// once, so the timers keep their rate whatever the clock speed.
pub fn run(
    chip8: &mut Chip8,
    settings: &Settings,
    display: &TerminalDisplay,
    out: &mut dyn Write,
) -> Result<u64, Box<dyn Error>> {
    let steps_per_frame = (settings.clock_speed / TIMER_HZ).max(1);
    let frame_time = Duration::from_secs(1) / TIMER_HZ;

    let mut status = EmulatorStatus::Running;
    let mut sounding = false;
    let mut frames: u64 = 0;

    while status != EmulatorStatus::Stop {
        let frame_start = Instant::now();

        for _ in 0..steps_per_frame {
            let next = match chip8.step()? {
                Status::Running => EmulatorStatus::Running,
                Status::WaitingForKey { .. } => EmulatorStatus::Paused,
            };
            if next != status {
                debug!("emulator {:?} -> {:?}", status, next);
                status = next;
            }
        }
        chip8.tick_timers();

        if chip8.sound_active() != sounding {
            sounding = chip8.sound_active();
            debug!("sound {}", if sounding { "on" } else { "off" });
        }

        if let Some(frame) = chip8.take_frame() {
            if settings.render {
                display.render(out, &frame)?;
            }
        }

        frames += 1;
        if settings.frames != 0 && frames >= settings.frames {
            status = EmulatorStatus::Stop;
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if !settings.fast && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    info!("stopped after {} frames", frames);
    Ok(frames)
}
