//! Sort backend implementations
//!
//! The comparison and portable network backends are always compiled. The AVX-512
//! backend is compiled with the `avx512` feature on x86_64 and checks CPU support
//! before touching a 512-bit register.

// Reference path
pub mod comparison;

// Portable sorting network (any target)
pub mod network;

#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
pub mod avx512;
