//! Placeholder screen content.
//!
//! Shown when a guarded screen's session data is not yet available; a
//! silent-degradation stand-in, not an error surface.

use crate::router::PlaceholderReason;

/// Display model for the placeholder screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderView {
    pub headline: &'static str,
    pub detail: &'static str,
}

/// Builds the placeholder view for a routing degradation reason.
pub fn build(reason: PlaceholderReason) -> PlaceholderView {
    PlaceholderView {
        headline: "Just a moment",
        detail: reason.message(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::router::PlaceholderReason;

    #[test]
    fn every_reason_has_distinct_detail() {
        let reasons = [
            PlaceholderReason::MissingUser,
            PlaceholderReason::MissingFamily,
            PlaceholderReason::MissingMembership,
        ];
        for pair in reasons.windows(2) {
            assert_ne!(build(pair[0]).detail, build(pair[1]).detail);
        }
    }
}
