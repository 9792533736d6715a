// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scan modes, scan results, and participant capability flags.

/// What a scan should do with the overlaps it finds.
///
/// The mode is threaded explicitly through every scan call. There is no
/// stored "should I announce" state anywhere: two interleaved scans on the
/// same instance can never leak announcement behavior into each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Report whether any overlap exists. No side effects.
    Silent,
    /// Report the first overlapping partner in snapshot order, if any.
    /// No side effects.
    FirstMatch,
    /// Report whether any overlap exists, and announce every overlapping
    /// partner — exactly once per partner per scan call — to both sides'
    /// contact state.
    Announce,
}

/// Result of a broad-phase scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanResult<K> {
    /// Whether any overlap was found (`Silent` and `Announce` modes).
    Overlapping(bool),
    /// The first overlapping partner in snapshot order (`FirstMatch` mode).
    First(Option<K>),
}

impl<K: Copy> ScanResult<K> {
    /// Whether the scan found at least one overlap.
    pub fn any(&self) -> bool {
        match self {
            Self::Overlapping(found) => *found,
            Self::First(first) => first.is_some(),
        }
    }

    /// The first overlapping partner, for `FirstMatch` results.
    ///
    /// `None` for the other modes, which do not record which partner hit.
    pub fn first(&self) -> Option<K> {
        match self {
            Self::First(first) => *first,
            Self::Overlapping(_) => None,
        }
    }
}

bitflags::bitflags! {
    /// Per-participant capability flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ParticipantFlags: u8 {
        /// The participant takes part in pairwise checks. When cleared, every
        /// check involving this entity short-circuits to "no collision" —
        /// a disabled participant is a normal, checked condition, not an
        /// error.
        const COLLIDABLE   = 0b0000_0001;
        /// The participant wants `exit` notifications from the cycle-end
        /// retire pass. Enters are always delivered; exits are opt-in.
        const EXIT_EVENTS  = 0b0000_0010;
    }
}

impl Default for ParticipantFlags {
    fn default() -> Self {
        Self::COLLIDABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_collidable_without_exits() {
        let flags = ParticipantFlags::default();
        assert!(flags.contains(ParticipantFlags::COLLIDABLE));
        assert!(!flags.contains(ParticipantFlags::EXIT_EVENTS));
    }

    #[test]
    fn scan_result_accessors() {
        assert!(ScanResult::<u32>::Overlapping(true).any());
        assert!(!ScanResult::<u32>::Overlapping(false).any());
        assert_eq!(ScanResult::<u32>::Overlapping(true).first(), None);

        let first = ScanResult::First(Some(9_u32));
        assert!(first.any());
        assert_eq!(first.first(), Some(9));
        assert!(!ScanResult::<u32>::First(None).any());
    }
}
