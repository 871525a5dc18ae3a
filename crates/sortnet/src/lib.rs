#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! median-sortnet: fixed-size window sorting for the PCM median filter
//!
//! This crate owns everything that happens to a single window once its samples
//! have been copied in: the working lane types, the 64-byte aligned scratch
//! window, and the interchangeable sort backends.
//!
//! # Window shapes
//!
//! Only two shapes exist, and each is bound to its own lane type:
//!
//! | Alias      | Lanes | Lane type | Register fit        |
//! |------------|-------|-----------|---------------------|
//! | [`Window8`]  | 8     | `f64`     | one 512-bit `__m512d` |
//! | [`Window16`] | 16    | `f32`     | one 512-bit `__m512`  |
//!
//! The pairing is enforced by [`FixedWindow`], which is implemented for these
//! two aliases and nothing else.
//!
//! # Backends
//!
//! - [`ComparisonBackend`]: generic comparison sort (reference path)
//! - [`NetworkBackend`]: portable branch-free bitonic sorting network
//! - `Avx512Backend`: the same network held in one AVX-512 register
//!   (`avx512` feature, x86_64 only)
//!
//! Every backend produces a bit-identical ordering for integer-derived input.
//! [`SortContext`] resolves a [`SortStrategy`] against the build and the running
//! CPU, and hands the monomorphised backend to a [`BackendVisitor`].
//!
//! # Example
//!
//! ```rust
//! use median_sortnet::{FixedWindow, NetworkBackend, Window8};
//!
//! let mut window = Window8::from_array([8.0, 1.0, 7.0, 2.0, 6.0, 3.0, 5.0, 4.0]);
//! window.sort_with::<NetworkBackend>();
//! assert_eq!(window.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//! ```

pub mod backend;
pub mod backends;
pub mod context;
pub mod dispatcher;
pub mod lane;
pub mod window;

pub use backend::SortBackend;
pub use backends::comparison::ComparisonBackend;
pub use backends::network::NetworkBackend;
pub use context::{BackendVisitor, SortContext};
pub use dispatcher::{
    BackendDispatcher, BackendType, CpuFeatures, ParseStrategyError, SortStrategy,
    UnavailableBackend,
};
pub use lane::Lane;
pub use window::{AlignedWindow, FixedWindow, Window16, Window8};

#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
pub use backends::avx512::Avx512Backend;

// The vectorised network is written against x86_64 AVX-512 only. Building it for any
// other target must fail loudly instead of quietly routing through another path.
#[cfg(all(feature = "avx512", not(target_arch = "x86_64")))]
compile_error!(
    "The avx512 feature is only supported on x86_64 targets. Disable it to use the portable network."
);
