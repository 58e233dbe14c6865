use crate::Seed;
use rand_core::{impls, Error, RngCore};

const INCREMENT: u32 = 0x6D2B79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Source of uniform values in [0, 1) consumed by the sampler.
pub trait UniformStream {
    fn next_unit(&mut self) -> f64;
}

/// Mulberry32. Every intermediate value is truncated to 32 bits, any other
/// width produces a different sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: Seed) -> Self {
        Self {
            state: seed.to_bits(),
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

impl UniformStream for Mulberry32 {
    fn next_unit(&mut self) -> f64 {
        self.next_f64()
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        Mulberry32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
