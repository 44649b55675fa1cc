use std::io::{self, Write};

use emu8::constants::DISPLAY_WIDTH;
use emu8::state::FrameBuffer;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// In a terminal each pixel becomes one character, lit or unlit.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct TerminalDisplay {
    on: char,
    off: char,
}

impl TerminalDisplay {
    /// # Arguments
    /// * `on` the character drawn for a lit pixel
    /// * `off` the character drawn for an unlit pixel
    pub fn new(on: char, off: char) -> Self {
        TerminalDisplay { on, off }
    }

    /// Formats a Chip-8 FrameBuffer as text.
    ///
    /// Each row of the frame becomes one line; there's no trailing newline.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn frame_to_text(&self, frame: &FrameBuffer) -> String {
        let mut text = String::with_capacity(frame.len() * (DISPLAY_WIDTH + 1));
        for (y, row) in frame.iter().enumerate() {
            if y > 0 {
                text.push('\n');
            }
            text.extend(row.iter().map(|&lit| if lit { self.on } else { self.off }));
        }
        text
    }

    /// Writes the frame followed by a blank line.
    pub fn render(&self, out: &mut dyn Write, frame: &FrameBuffer) -> io::Result<()> {
        writeln!(out, "{}", self.frame_to_text(frame))?;
        writeln!(out)?;
        out.flush()
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new('█', ' ')
    }
}
