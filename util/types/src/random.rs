use crate::HexBytes;
use hexseq_error::EntropyError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// A cryptographically secure source of random bytes.
///
/// Every `RngCore + CryptoRng` is a source. Production code draws from [`OsRng`]; tests can
/// inject a seeded generator instead.
pub trait EntropySource {
    /// Fills `dest` entirely or fails. A failure must never be papered over with weaker bytes.
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<R: RngCore + CryptoRng> EntropySource for R {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.try_fill_bytes(dest)
            .map_err(|e| EntropyError(e.to_string()))
    }
}

impl HexBytes {
    /// `len` bytes drawn from `source`.
    pub fn random<S: EntropySource + ?Sized>(
        len: usize,
        source: &mut S,
    ) -> Result<HexBytes, EntropyError> {
        let mut buffer = vec![0u8; len];
        source.fill_entropy(&mut buffer)?;
        Ok(HexBytes::from_vec(buffer))
    }

    /// `len` bytes drawn from the operating system's secure generator.
    pub fn random_os(len: usize) -> Result<HexBytes, EntropyError> {
        HexBytes::random(len, &mut OsRng)
    }
}
