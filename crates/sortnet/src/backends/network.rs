//! Portable bitonic sorting network
//!
//! A sorting network is a fixed sequence of compare-exchange operations, so its
//! control flow never depends on the data. Each layer pairs lane `i` with lane
//! `i ^ mask`; the lower lane keeps the minimum and the upper lane the maximum.
//!
//! The layer masks encode a bitonic sorter built from "flip" stages
//! (`mask = block - 1`, mirroring a block onto itself) followed by half-cleaners
//! (`mask = distance`):
//!
//! ```text
//! 8 lanes:   1 | 3 1 | 7 2 1                   (6 layers, 24 comparators)
//! 16 lanes:  1 | 3 1 | 7 2 1 | 15 4 2 1        (10 layers, 80 comparators)
//! ```
//!
//! Because every layer is a full permutation of disjoint pairs, the same tables
//! drive the single-register AVX-512 backend.

use crate::backend::SortBackend;
use crate::lane::Lane;
use crate::window::{Window16, Window8};

/// XOR partner masks for the 8-lane network, in execution order.
pub const LAYERS_8: [usize; 6] = [1, 3, 1, 7, 2, 1];

/// XOR partner masks for the 16-lane network, in execution order.
pub const LAYERS_16: [usize; 10] = [1, 3, 1, 7, 2, 1, 15, 4, 2, 1];

/// Branch-free sorting network over lane `min`/`max`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NetworkBackend;

impl SortBackend for NetworkBackend {
    #[inline]
    fn sort8(window: &mut Window8) {
        run_network(window.as_mut_slice(), &LAYERS_8);
    }

    #[inline]
    fn sort16(window: &mut Window16) {
        run_network(window.as_mut_slice(), &LAYERS_16);
    }

    fn name() -> &'static str {
        "network"
    }
}

#[inline(always)]
fn run_network<T: Lane>(lanes: &mut [T], layers: &[usize]) {
    for &mask in layers {
        for low in 0..lanes.len() {
            let high = low ^ mask;
            if high > low {
                let a = lanes[low];
                let b = lanes[high];
                lanes[low] = a.lane_min(b);
                lanes[high] = a.lane_max(b);
            }
        }
    }
}
