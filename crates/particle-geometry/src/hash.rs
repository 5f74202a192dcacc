//! Seeded hashing for reproducible per-particle randomness
//!
//! Scatter and noise vectors are recomputed every frame from a particle's
//! progress, so they must be pure functions of `(seed, salt)`.

/// Hash `(seed, salt)` to a float in [0, 1)
pub fn hash01(seed: f32, salt: u32) -> f32 {
    let mut h = seed.to_bits() ^ salt.wrapping_mul(0x9E37_79B9);
    // lowbias32 finaliser
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846C_A68B);
    h ^= h >> 16;
    // top 24 bits give an exactly representable f32 below 1.0
    (h >> 8) as f32 / (1u32 << 24) as f32
}

/// Hash to a float in [-1, 1)
pub fn hash_signed(seed: f32, salt: u32) -> f32 {
    hash01(seed, salt) * 2.0 - 1.0
}
