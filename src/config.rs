use crate::constants::STACK_DEPTH;

/// Machine parameters that differ between interpreters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many return addresses the stack holds before `2NNN` overflows.
    /// References disagree (12 on the COSMAC VIP, 16 in later docs).
    pub stack_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stack_depth: STACK_DEPTH,
        }
    }
}
