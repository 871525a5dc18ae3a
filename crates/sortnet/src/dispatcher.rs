//! Backend selection
//!
//! This module turns a requested [`SortStrategy`] into a concrete [`BackendType`]
//! using two facts: which backends this build compiled, and which instruction
//! sets the running CPU reports.
//!
//! An explicit request that cannot be honoured is an error. Only
//! [`SortStrategy::Auto`] is free to choose, and every candidate it chooses from
//! produces the same output.

use core::fmt;
use core::str::FromStr;

/// CPU feature detection results
///
/// Represents the SIMD capabilities relevant to the sort backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuFeatures {
    /// AVX-512 Foundation (x86_64)
    pub has_avx512_f: bool,
}

impl CpuFeatures {
    /// Detect CPU features at runtime
    ///
    /// # Platform Behavior
    /// - **x86_64**: CPUID detection through `cpufeatures` (cached after the first call)
    /// - **other targets**: all fields false
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            cpufeatures::new!(cpuid_avx512f, "avx512f");
            Self {
                has_avx512_f: cpuid_avx512f::get(),
            }
        }

        #[cfg(not(target_arch = "x86_64"))]
        {
            Self {
                has_avx512_f: false,
            }
        }
    }
}

/// Concrete sort backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendType {
    /// Comparison sort (reference path, always available)
    Comparison,

    /// Portable sorting network (always available)
    Network,

    /// AVX-512 sorting network (x86_64, `avx512` feature)
    Avx512,
}

impl BackendType {
    /// All backend types, in the order they are listed to users.
    pub const ALL: [BackendType; 3] = [Self::Comparison, Self::Network, Self::Avx512];

    /// Identifier used in logs and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Comparison => "comparison",
            Self::Network => "network",
            Self::Avx512 => "avx512",
        }
    }

    /// Whether this build contains the backend.
    pub const fn is_compiled(self) -> bool {
        match self {
            Self::Comparison | Self::Network => true,
            Self::Avx512 => cfg!(all(feature = "avx512", target_arch = "x86_64")),
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested sort strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortStrategy {
    /// Fastest available network backend
    #[default]
    Auto,

    /// Force the comparison sort
    Comparison,

    /// Force the portable network
    Network,

    /// Force the AVX-512 network; fails if unavailable
    Avx512,
}

impl SortStrategy {
    /// Identifier used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Comparison => "comparison",
            Self::Network => "network",
            Self::Avx512 => "avx512",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort strategy (expected auto, comparison, network or avx512)")]
pub struct ParseStrategyError;

impl FromStr for SortStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "comparison" | "qsort" => Ok(Self::Comparison),
            "network" => Ok(Self::Network),
            "avx512" => Ok(Self::Avx512),
            _ => Err(ParseStrategyError),
        }
    }
}

/// A requested backend that cannot run here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnavailableBackend {
    /// The backend was not compiled into this build.
    #[error("the {0} sort backend is not compiled into this build")]
    NotCompiled(BackendType),

    /// The backend is compiled but the CPU lacks the instruction set.
    #[error("the {0} sort backend is not supported by this CPU")]
    Unsupported(BackendType),
}

/// Resolves sort strategies against the build and the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendDispatcher {
    features: CpuFeatures,
}

impl BackendDispatcher {
    /// Create a dispatcher for the running CPU.
    pub fn new() -> Self {
        Self {
            features: CpuFeatures::detect(),
        }
    }

    /// Create a dispatcher restricted to `features`.
    ///
    /// The set is intersected with what the running CPU reports, so it can only
    /// turn backends off. Claiming an instruction set the CPU lacks still
    /// resolves to [`UnavailableBackend::Unsupported`].
    pub fn with_features(features: CpuFeatures) -> Self {
        let host = CpuFeatures::detect();
        Self {
            features: CpuFeatures {
                has_avx512_f: features.has_avx512_f && host.has_avx512_f,
            },
        }
    }

    /// The feature set this dispatcher resolves against.
    pub const fn features(&self) -> CpuFeatures {
        self.features
    }

    /// Whether `backend` can run on this build and CPU.
    pub const fn is_available(&self, backend: BackendType) -> bool {
        match backend {
            BackendType::Comparison | BackendType::Network => true,
            BackendType::Avx512 => backend.is_compiled() && self.features.has_avx512_f,
        }
    }

    /// Resolve a strategy to a concrete backend.
    ///
    /// `Auto` picks AVX-512 when compiled and supported, otherwise the portable
    /// network. Explicit requests are honoured exactly or rejected.
    pub fn resolve(&self, strategy: SortStrategy) -> Result<BackendType, UnavailableBackend> {
        let requested = match strategy {
            SortStrategy::Auto => {
                return Ok(if self.is_available(BackendType::Avx512) {
                    BackendType::Avx512
                } else {
                    BackendType::Network
                });
            }
            SortStrategy::Comparison => BackendType::Comparison,
            SortStrategy::Network => BackendType::Network,
            SortStrategy::Avx512 => BackendType::Avx512,
        };

        if !requested.is_compiled() {
            Err(UnavailableBackend::NotCompiled(requested))
        } else if !self.is_available(requested) {
            Err(UnavailableBackend::Unsupported(requested))
        } else {
            Ok(requested)
        }
    }
}

impl Default for BackendDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_SIMD: CpuFeatures = CpuFeatures {
        has_avx512_f: false,
    };

    const WITH_AVX512: CpuFeatures = CpuFeatures { has_avx512_f: true };

    #[test]
    fn test_auto_without_avx512_uses_network() {
        let dispatcher = BackendDispatcher::with_features(NO_SIMD);
        assert_eq!(
            dispatcher.resolve(SortStrategy::Auto),
            Ok(BackendType::Network)
        );
    }

    #[test]
    fn test_explicit_requests_are_honoured() {
        let dispatcher = BackendDispatcher::with_features(NO_SIMD);
        assert_eq!(
            dispatcher.resolve(SortStrategy::Comparison),
            Ok(BackendType::Comparison)
        );
        assert_eq!(
            dispatcher.resolve(SortStrategy::Network),
            Ok(BackendType::Network)
        );
    }

    #[test]
    fn test_avx512_unavailable_is_an_error() {
        let dispatcher = BackendDispatcher::with_features(NO_SIMD);
        let err = dispatcher.resolve(SortStrategy::Avx512).unwrap_err();
        if BackendType::Avx512.is_compiled() {
            assert_eq!(err, UnavailableBackend::Unsupported(BackendType::Avx512));
        } else {
            assert_eq!(err, UnavailableBackend::NotCompiled(BackendType::Avx512));
        }
    }

    #[test]
    fn test_auto_with_avx512_features() {
        let dispatcher = BackendDispatcher::with_features(WITH_AVX512);
        let expected = if BackendType::Avx512.is_compiled() && CpuFeatures::detect().has_avx512_f {
            BackendType::Avx512
        } else {
            BackendType::Network
        };
        assert_eq!(dispatcher.resolve(SortStrategy::Auto), Ok(expected));
    }

    #[test]
    fn test_claimed_features_cannot_exceed_host() {
        let host = CpuFeatures::detect();
        let dispatcher = BackendDispatcher::with_features(WITH_AVX512);
        assert_eq!(dispatcher.features(), host);

        let resolved = dispatcher.resolve(SortStrategy::Avx512);
        if !BackendType::Avx512.is_compiled() {
            assert_eq!(resolved, Err(UnavailableBackend::NotCompiled(BackendType::Avx512)));
        } else if !host.has_avx512_f {
            assert_eq!(resolved, Err(UnavailableBackend::Unsupported(BackendType::Avx512)));
        } else {
            assert_eq!(resolved, Ok(BackendType::Avx512));
        }
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("auto".parse::<SortStrategy>(), Ok(SortStrategy::Auto));
        assert_eq!("qsort".parse::<SortStrategy>(), Ok(SortStrategy::Comparison));
        assert_eq!("network".parse::<SortStrategy>(), Ok(SortStrategy::Network));
        assert_eq!("avx512".parse::<SortStrategy>(), Ok(SortStrategy::Avx512));
        assert_eq!("bogus".parse::<SortStrategy>(), Err(ParseStrategyError));
    }
}
