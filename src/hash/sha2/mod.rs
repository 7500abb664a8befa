//! SHA-256 and SHA-224 hash function implementations
//!
//! This module implements the 256-bit branch of the SHA-2 family as
//! specified in FIPS PUB 180-3. Both variants share one compression
//! function and incremental engine; they differ only in their initial
//! hash values and in how many state bytes the digest keeps.

use byteorder::{BigEndian, ByteOrder};
use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{validate, Error, Result};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

/// Block size in bytes shared by SHA-256 and SHA-224
pub const SHA256_BLOCK_SIZE: usize = 64;
/// SHA-256 digest size in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;
/// SHA-224 digest size in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

// The padding length field is a 64-bit count of message bits, so the
// message itself cannot exceed 2^61 - 1 bytes.
const MAX_MESSAGE_BYTES: u64 = (1 << 61) - 1;

// SHA-256 round constants: first 32 bits of the fractional parts of the
// cube roots of the first 64 primes.
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

// Initial hash values: first 32 bits of the fractional parts of the
// square roots of the first eight primes.
const SHA256_H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

// Initial hash values for SHA-224: bits 33..64 of the fractional parts of
// the square roots of the ninth through sixteenth primes.
const SHA224_H0: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// Marker type for SHA-256 algorithm parameters
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
}

/// Marker type for SHA-224 algorithm parameters
pub enum Sha224Algorithm {}

impl HashAlgorithm for Sha224Algorithm {
    const OUTPUT_SIZE: usize = SHA224_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-224";
}

/// The core FIPS 180-3 transformation of one 512-bit block.
///
/// Loads the block as sixteen big-endian words, extends the message
/// schedule to 64 words, runs the 64-round compression loop, and adds the
/// working variables back into the state mod 2^32.
fn compress(state: &mut [u32; 8], block: &[u8; SHA256_BLOCK_SIZE]) {
    // The message schedule is key-dependent material; wipe it on scope exit.
    let mut w = Zeroizing::new([0u32; 64]);

    compiler_fence(Ordering::SeqCst);

    for i in 0..16 {
        w[i] = BigEndian::read_u32(&block[i * 4..]);
    }

    for i in 16..64 {
        let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ (!e & g);
        let temp1 = h
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(K256[i])
            .wrapping_add(w[i]);
        let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);

    compiler_fence(Ordering::SeqCst);
}

/// Incremental state shared by SHA-256 and SHA-224.
///
/// Invariant: `buffer_idx < SHA256_BLOCK_SIZE` on return from every method,
/// and `buffer[..buffer_idx]` holds exactly the message bytes not yet
/// compressed.
#[derive(Clone, Zeroize)]
struct Sha256Engine {
    state: [u32; 8],
    buffer: [u8; SHA256_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
    finalized: bool,
}

impl Sha256Engine {
    fn new(iv: &[u32; 8]) -> Self {
        Sha256Engine {
            state: *iv,
            buffer: [0u8; SHA256_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
            finalized: false,
        }
    }

    fn absorb(&mut self, algorithm: &'static str, mut input: &[u8]) -> Result<()> {
        validate::not_finalized(self.finalized, algorithm)?;

        self.total_bytes = self
            .total_bytes
            .checked_add(input.len() as u64)
            .filter(|&total| total <= MAX_MESSAGE_BYTES)
            .ok_or(Error::InputTooLarge {
                algorithm,
                max_bytes: MAX_MESSAGE_BYTES,
            })?;

        // Complete a pending partial block before anything else.
        if self.buffer_idx > 0 {
            let fill = core::cmp::min(input.len(), SHA256_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];

            if self.buffer_idx < SHA256_BLOCK_SIZE {
                return Ok(());
            }
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.buffer_idx = 0;
        }

        // Whole blocks are compressed straight from the input.
        while let Some(block) = input.first_chunk::<SHA256_BLOCK_SIZE>() {
            compress(&mut self.state, block);
            input = &input[SHA256_BLOCK_SIZE..];
        }

        // Buffer the tail for the next call.
        if !input.is_empty() {
            self.buffer[..input.len()].copy_from_slice(input);
            self.buffer_idx = input.len();
        }

        Ok(())
    }

    fn finish(&mut self, algorithm: &'static str, digest: &mut [u8]) -> Result<()> {
        validate::not_finalized(self.finalized, algorithm)?;

        // total_bytes is capped at 2^61 - 1, so the bit count fits in 64 bits.
        let bit_len = self.total_bytes << 3;

        // Merkle-Damgard padding: 0x80, zeros to 56 mod 64, 64-bit bit length.
        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= SHA256_BLOCK_SIZE - 8 {
            for byte in &mut self.buffer[self.buffer_idx + 1..] {
                *byte = 0;
            }
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.buffer = [0u8; SHA256_BLOCK_SIZE];
        } else {
            for byte in &mut self.buffer[self.buffer_idx + 1..SHA256_BLOCK_SIZE - 8] {
                *byte = 0;
            }
        }
        BigEndian::write_u64(&mut self.buffer[SHA256_BLOCK_SIZE - 8..], bit_len);

        let block = self.buffer;
        compress(&mut self.state, &block);

        // Big-endian state words, truncated to the variant's digest size.
        for (i, chunk) in digest.chunks_exact_mut(4).enumerate() {
            BigEndian::write_u32(chunk, self.state[i]);
        }

        self.zeroize();
        self.finalized = true;
        Ok(())
    }
}

/// Streaming SHA-256 hash function state
///
/// The state is zeroized on finalization and on drop. `Clone` forks the
/// running state, allowing several messages with a common prefix to share
/// the prefix's compressions.
#[derive(Clone, Zeroize)]
pub struct Sha256 {
    engine: Sha256Engine,
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl HashFunction for Sha256 {
    type Algorithm = Sha256Algorithm;
    type Output = Digest<SHA256_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha256 {
            engine: Sha256Engine::new(&SHA256_H0),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.engine.absorb(Sha256Algorithm::ALGORITHM_ID, data)?;
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let mut digest = [0u8; SHA256_OUTPUT_SIZE];
        self.engine
            .finish(Sha256Algorithm::ALGORITHM_ID, &mut digest)?;
        Ok(Digest::new(digest))
    }
}

/// Streaming SHA-224 hash function state
///
/// Runs the SHA-256 compression function over the SHA-224 initial hash
/// values and keeps the first 28 digest bytes.
#[derive(Clone, Zeroize)]
pub struct Sha224 {
    engine: Sha256Engine,
}

impl Drop for Sha224 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl HashFunction for Sha224 {
    type Algorithm = Sha224Algorithm;
    type Output = Digest<SHA224_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha224 {
            engine: Sha256Engine::new(&SHA224_H0),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.engine.absorb(Sha224Algorithm::ALGORITHM_ID, data)?;
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let mut digest = [0u8; SHA224_OUTPUT_SIZE];
        self.engine
            .finish(Sha224Algorithm::ALGORITHM_ID, &mut digest)?;
        Ok(Digest::new(digest))
    }
}
