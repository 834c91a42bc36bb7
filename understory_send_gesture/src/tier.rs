// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Priority of an outgoing message, chosen by how far the draft is swiped.
///
/// Tiers are ordered `Respectful < Conversational < TimeSensitive`. Hosts map
/// each tier to their own colors; [`PriorityTier::haptic`] gives the feedback
/// strength that accompanies a change into the tier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriorityTier {
    /// Low urgency. Also reported whenever the preview is outside the drop zone.
    #[default]
    Respectful,
    /// Normal back-and-forth.
    Conversational,
    /// Needs attention now.
    TimeSensitive,
}

impl PriorityTier {
    /// All tiers, lowest first.
    pub const ALL: [Self; 3] = [Self::Respectful, Self::Conversational, Self::TimeSensitive];

    /// Haptic strength played when the gesture changes into this tier.
    #[must_use]
    pub const fn haptic(self) -> HapticIntensity {
        match self {
            Self::Respectful => HapticIntensity::Light,
            Self::Conversational => HapticIntensity::Medium,
            Self::TimeSensitive => HapticIntensity::Strong,
        }
    }
}

/// Strength of a haptic pulse requested from the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HapticIntensity {
    /// A faint tick.
    Light,
    /// A noticeable bump.
    Medium,
    /// A firm thud.
    Strong,
}
