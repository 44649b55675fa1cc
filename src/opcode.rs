/// # Opcodes
///
/// Every Chip-8 instruction is a big-endian 16-bit word, read here as four nibbles
/// `[c x y n]`:
/// - `c` picks the broad category and is the only nibble every decode rule checks
/// - `n`, or the `y n` pair, tells apart instructions within categories 0x0, 0x5,
///   0x8, 0x9, 0xE and 0xF
///
/// The remaining nibbles are operands:
/// - `[_nnn]` a 12-bit address
/// - `[__nn]` an 8-bit immediate assigned to or compared with Vx
/// - `[_x__]` the register Vx, or the last register of the range V0..=Vx
/// - `[__y_]` the register Vy
/// - `[___n]` a 4-bit immediate (sprite height)
pub trait Opcode {
    /// All four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `[_x__]`
    fn x(&self) -> u8;

    /// `[__y_]`
    fn y(&self) -> u8;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__nn]`
    fn nn(&self) -> u8;

    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        ((self >> 12) as u8, self.x(), self.y(), self.n())
    }

    fn x(&self) -> u8 {
        ((self >> 8) & 0xF) as u8
    }

    fn y(&self) -> u8 {
        ((self >> 4) & 0xF) as u8
    }

    fn n(&self) -> u8 {
        (self & 0xF) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0xFF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0xFFF
    }
}
