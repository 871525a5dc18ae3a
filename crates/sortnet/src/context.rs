//! SortContext: unified entry point for backend-generic code
//!
//! Callers describe the work they want done once, as a [`BackendVisitor`], and the
//! context runs it monomorphised for the backend it resolved at construction. The
//! per-window loop never branches on the backend choice.
//!
//! # Example
//!
//! ```rust
//! use median_sortnet::{BackendVisitor, FixedWindow, SortBackend, SortContext, SortStrategy, Window8};
//!
//! struct SortOne(Window8);
//!
//! impl BackendVisitor for SortOne {
//!     type Output = Window8;
//!
//!     fn visit<B: SortBackend>(mut self) -> Window8 {
//!         self.0.sort_with::<B>();
//!         self.0
//!     }
//! }
//!
//! let ctx = SortContext::new(SortStrategy::Network).unwrap();
//! let sorted = ctx.dispatch(SortOne(Window8::from_array([3.0, 1.0, 2.0, 0.0, 7.0, 6.0, 5.0, 4.0])));
//! assert_eq!(sorted.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
//! ```

use crate::backend::SortBackend;
use crate::backends::comparison::ComparisonBackend;
use crate::backends::network::NetworkBackend;
use crate::dispatcher::{BackendDispatcher, BackendType, SortStrategy, UnavailableBackend};

#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
use crate::backends::avx512::Avx512Backend;

/// Work to run against whichever backend a [`SortContext`] selected.
pub trait BackendVisitor {
    /// Result of the work.
    type Output;

    /// Run the work with backend `B`.
    fn visit<B: SortBackend>(self) -> Self::Output;
}

/// A resolved sort backend.
///
/// Construction performs all strategy and CPU checks; afterwards the backend is
/// fixed for the lifetime of the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortContext {
    backend: BackendType,
}

impl SortContext {
    /// Resolve `strategy` against this build and the running CPU.
    pub fn new(strategy: SortStrategy) -> Result<Self, UnavailableBackend> {
        Self::with_dispatcher(&BackendDispatcher::new(), strategy)
    }

    /// Resolve `strategy` through an explicit dispatcher.
    pub fn with_dispatcher(
        dispatcher: &BackendDispatcher,
        strategy: SortStrategy,
    ) -> Result<Self, UnavailableBackend> {
        dispatcher
            .resolve(strategy)
            .map(|backend| Self { backend })
    }

    /// The selected backend.
    #[inline]
    pub fn backend_type(&self) -> BackendType {
        self.backend
    }

    /// Identifier of the selected backend.
    #[inline]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Run `visitor` with the selected backend.
    #[inline]
    pub fn dispatch<V: BackendVisitor>(&self, visitor: V) -> V::Output {
        match self.backend {
            BackendType::Comparison => visitor.visit::<ComparisonBackend>(),
            BackendType::Network => visitor.visit::<NetworkBackend>(),
            #[cfg(all(feature = "avx512", target_arch = "x86_64"))]
            BackendType::Avx512 => visitor.visit::<Avx512Backend>(),
            // Unreachable: the dispatcher never resolves a backend this build lacks.
            #[cfg(not(all(feature = "avx512", target_arch = "x86_64")))]
            BackendType::Avx512 => visitor.visit::<NetworkBackend>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::CpuFeatures;

    struct Name;

    impl BackendVisitor for Name {
        type Output = &'static str;

        fn visit<B: SortBackend>(self) -> &'static str {
            B::name()
        }
    }

    #[test]
    fn test_dispatch_reaches_selected_backend() {
        let ctx = SortContext::new(SortStrategy::Comparison).unwrap();
        assert_eq!(ctx.dispatch(Name), "comparison");

        let ctx = SortContext::new(SortStrategy::Network).unwrap();
        assert_eq!(ctx.dispatch(Name), "network");
    }

    #[test]
    fn test_backend_name_matches_visitor() {
        let ctx = SortContext::new(SortStrategy::Auto).unwrap();
        assert_eq!(ctx.backend_name(), ctx.dispatch(Name));
    }

    #[test]
    fn test_unavailable_avx512_is_rejected() {
        let dispatcher = BackendDispatcher::with_features(CpuFeatures {
            has_avx512_f: false,
        });
        assert!(SortContext::with_dispatcher(&dispatcher, SortStrategy::Avx512).is_err());
    }

    #[test]
    fn test_claimed_avx512_only_resolves_on_capable_host() {
        let dispatcher = BackendDispatcher::with_features(CpuFeatures { has_avx512_f: true });
        let runnable = BackendType::Avx512.is_compiled() && CpuFeatures::detect().has_avx512_f;
        let ctx = SortContext::with_dispatcher(&dispatcher, SortStrategy::Avx512);
        assert_eq!(ctx.is_ok(), runnable);

        if let Ok(ctx) = ctx {
            assert_eq!(ctx.dispatch(Name), "avx512");
        }
    }
}
