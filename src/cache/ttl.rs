//! TTL Presets Module
//!
//! Named per-resource-kind lifetimes so route handlers share one tuning
//! table instead of scattering magic numbers.

// == Cache TTL Presets ==
/// Lifetime classes for cached upstream payloads.
///
/// Each API resource kind maps to exactly one preset:
/// - `Volatile`: fallback album lookups and other short-lived data
/// - `Search`: search results
/// - `Charts`: top charts, which change rarely
/// - `Lyrics`: lyrics never change for a given track, so they get the
///   longest lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTtl {
    Volatile,
    Search,
    Charts,
    Lyrics,
}

impl CacheTtl {
    // == As Seconds ==
    /// Returns the preset's lifetime in seconds.
    pub const fn as_secs(self) -> u64 {
        match self {
            CacheTtl::Volatile => 60,
            CacheTtl::Search => 300,
            CacheTtl::Charts => 1800,
            CacheTtl::Lyrics => 86_400,
        }
    }
}
