//! AVX-512 sorting network backend (x86_64)
//!
//! A full window is exactly one 512-bit register: eight `f64` lanes in a `__m512d`
//! or sixteen `f32` lanes in a `__m512`. Each network layer is three instructions:
//!
//! 1. `permutexvar` brings every lane's partner (`i ^ mask`) alongside it
//! 2. `min` / `max` compute both outcomes of every compare-exchange at once
//! 3. `mask_blend` keeps the maximum in the upper lane of each pair and the
//!    minimum in the lower one
//!
//! The layer masks are shared with [`super::network`], so the register version and
//! the portable version execute the same comparators.
//!
//! # Requirements
//! - x86_64 with AVX-512F (Intel Skylake-X 2017+, AMD Zen 4 2022+)
//! - Compiled with the `avx512` feature flag
//!
//! CPU support is checked on every call through a cached `cpufeatures` token. A
//! call on a CPU without AVX-512F panics; it never runs another sorter in its
//! place.

#![cfg(all(feature = "avx512", target_arch = "x86_64"))]

use super::network::{LAYERS_16, LAYERS_8};
use crate::backend::SortBackend;
use crate::window::{Window16, Window8};
use core::arch::x86_64::*;
use core::mem::transmute;

cpufeatures::new!(cpuid_avx512f, "avx512f");

/// AVX-512 sorting network.
#[derive(Copy, Clone, Debug, Default)]
pub struct Avx512Backend;

impl Avx512Backend {
    /// Whether the running CPU supports AVX-512F.
    #[inline]
    pub fn is_supported() -> bool {
        cpuid_avx512f::get()
    }
}

impl SortBackend for Avx512Backend {
    #[inline]
    fn sort8(window: &mut Window8) {
        assert!(
            Self::is_supported(),
            "avx512 sort backend called on a CPU without AVX-512F"
        );
        // SAFETY: AVX-512F verified above; Window8 is 64-byte aligned.
        unsafe { sort8_avx512(window) }
    }

    #[inline]
    fn sort16(window: &mut Window16) {
        assert!(
            Self::is_supported(),
            "avx512 sort backend called on a CPU without AVX-512F"
        );
        // SAFETY: AVX-512F verified above; Window16 is 64-byte aligned.
        unsafe { sort16_avx512(window) }
    }

    fn name() -> &'static str {
        "avx512"
    }
}

/// Precomputed permutation and blend mask for one layer.
#[derive(Copy, Clone)]
struct PdLayer {
    partners: [i64; 8],
    upper: u8,
}

#[derive(Copy, Clone)]
struct PsLayer {
    partners: [i32; 16],
    upper: u16,
}

/// Bit `i` is set when lane `i` is the upper member of its pair.
const fn upper_lanes(mask: usize, lanes: usize) -> u16 {
    let mut bits = 0u16;
    let mut i = 0;
    while i < lanes {
        if (i ^ mask) < i {
            bits |= 1 << i;
        }
        i += 1;
    }
    bits
}

const fn pd_layers() -> [PdLayer; 6] {
    let mut out = [PdLayer {
        partners: [0; 8],
        upper: 0,
    }; 6];
    let mut k = 0;
    while k < LAYERS_8.len() {
        let mask = LAYERS_8[k];
        let mut i = 0;
        while i < 8 {
            out[k].partners[i] = (i ^ mask) as i64;
            i += 1;
        }
        out[k].upper = upper_lanes(mask, 8) as u8;
        k += 1;
    }
    out
}

const fn ps_layers() -> [PsLayer; 10] {
    let mut out = [PsLayer {
        partners: [0; 16],
        upper: 0,
    }; 10];
    let mut k = 0;
    while k < LAYERS_16.len() {
        let mask = LAYERS_16[k];
        let mut i = 0;
        while i < 16 {
            out[k].partners[i] = (i ^ mask) as i32;
            i += 1;
        }
        out[k].upper = upper_lanes(mask, 16);
        k += 1;
    }
    out
}

const PD_LAYERS: [PdLayer; 6] = pd_layers();
const PS_LAYERS: [PsLayer; 10] = ps_layers();

#[inline]
#[target_feature(enable = "avx512f")]
unsafe fn sort8_avx512(window: &mut Window8) {
    let ptr = window.as_mut_slice().as_mut_ptr();
    let mut v = _mm512_load_pd(ptr);

    for layer in PD_LAYERS.iter() {
        let partners: __m512i = transmute(layer.partners);
        let swapped = _mm512_permutexvar_pd(partners, v);
        let lo = _mm512_min_pd(v, swapped);
        let hi = _mm512_max_pd(v, swapped);
        v = _mm512_mask_blend_pd(layer.upper, lo, hi);
    }

    _mm512_store_pd(ptr, v);
}

#[inline]
#[target_feature(enable = "avx512f")]
unsafe fn sort16_avx512(window: &mut Window16) {
    let ptr = window.as_mut_slice().as_mut_ptr();
    let mut v = _mm512_load_ps(ptr);

    for layer in PS_LAYERS.iter() {
        let partners: __m512i = transmute(layer.partners);
        let swapped = _mm512_permutexvar_ps(partners, v);
        let lo = _mm512_min_ps(v, swapped);
        let hi = _mm512_max_ps(v, swapped);
        v = _mm512_mask_blend_ps(layer.upper, lo, hi);
    }

    _mm512_store_ps(ptr, v);
}
