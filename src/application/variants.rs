// SPDX-License-Identifier: MPL-2.0
//! Message resolution for requests sent without a message.

use crate::domain::notification::{Kind, NotificationRequest, ResolvedNotification};
use crate::domain::variants;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::fmt;

/// Picks a default message uniformly at random from the kind's pool.
///
/// The random source is owned and seedable so tests can assert which
/// variant gets picked.
pub struct VariantPicker {
    rng: StdRng,
}

impl VariantPicker {
    /// Creates a picker seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Creates a picker with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns one message of `kind`'s pool.
    pub fn pick(&mut self, kind: Kind) -> &'static str {
        let pool = variants::pool(kind);
        pool.choose(&mut self.rng).copied().unwrap_or(pool[0])
    }

    /// Resolves `request`: a non-empty message passes through unchanged,
    /// an empty one is replaced by a pool entry.
    pub fn resolve(&mut self, request: NotificationRequest) -> ResolvedNotification {
        let fallback = if request.message().is_empty() {
            self.pick(request.kind()).to_string()
        } else {
            String::new()
        };
        request.resolve_with(fallback)
    }
}

impl Default for VariantPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VariantPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantPicker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn empty_message_resolves_from_the_kind_pool() {
        let mut picker = VariantPicker::seeded(7);
        for kind in Kind::ALL {
            for _ in 0..50 {
                let resolved = picker.resolve(NotificationRequest::new(kind));
                assert!(!resolved.message().is_empty());
                assert!(
                    variants::pool(kind).contains(&resolved.message()),
                    "{kind}: {:?} not in pool",
                    resolved.message()
                );
            }
        }
    }

    #[test]
    fn explicit_message_passes_through() {
        let mut picker = VariantPicker::seeded(1);
        let request = NotificationRequest::new(Kind::Error)
            .with_title("Build")
            .with_message("linker exploded");
        let resolved = picker.resolve(request);
        assert_eq!(resolved.message(), "linker exploded");
        assert_eq!(resolved.title(), "Build");
        assert_eq!(resolved.kind(), Kind::Error);
    }

    #[test]
    fn same_seed_picks_same_sequence() {
        let mut a = VariantPicker::seeded(42);
        let mut b = VariantPicker::seeded(42);
        let first: Vec<_> = (0..20).map(|_| a.pick(Kind::Waiting)).collect();
        let second: Vec<_> = (0..20).map(|_| b.pick(Kind::Waiting)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn picks_spread_over_the_pool() {
        let mut picker = VariantPicker::seeded(3);
        let seen: HashSet<_> = (0..500).map(|_| picker.pick(Kind::Success)).collect();
        // Uniform choice over 15 entries hits well over half of them in 500 draws.
        assert!(seen.len() > variants::POOL_SIZE / 2);
    }
}
