use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// # Randomness
/// Supplies the bytes consumed by `CXNN`.
///
/// Implemented for the `rand` generators the driver uses, and for `Sequence` so
/// tests can predict what `CXNN` will store.
pub trait RandomSource {
    /// A byte drawn uniformly from 0..=255.
    fn random_byte(&mut self) -> u8;
}

impl RandomSource for StdRng {
    fn random_byte(&mut self) -> u8 {
        self.gen()
    }
}

impl RandomSource for ThreadRng {
    fn random_byte(&mut self) -> u8 {
        self.gen()
    }
}

/// Replays a fixed list of bytes forever.
#[derive(Debug, Clone)]
pub struct Sequence {
    bytes: Vec<u8>,
    next: usize,
}

impl Sequence {
    /// An empty list behaves like `[0]`.
    pub fn new(bytes: Vec<u8>) -> Self {
        let bytes = if bytes.is_empty() { vec![0] } else { bytes };
        Sequence { bytes, next: 0 }
    }
}

impl RandomSource for Sequence {
    fn random_byte(&mut self) -> u8 {
        let byte = self.bytes[self.next];
        self.next = (self.next + 1) % self.bytes.len();
        byte
    }
}
