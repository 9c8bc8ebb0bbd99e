//! Qualitative impact severity ladder

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered severity categories, mildest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    Negligible,
    #[serde(rename = "Very Small")]
    VerySmall,
    Small,
    Moderate,
    Large,
    #[serde(rename = "Very Large")]
    VeryLarge,
    Massive,
    Catastrophic,
    Global,
    Extinction,
}

impl SeverityTier {
    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Negligible => "Negligible",
            Self::VerySmall => "Very Small",
            Self::Small => "Small",
            Self::Moderate => "Moderate",
            Self::Large => "Large",
            Self::VeryLarge => "Very Large",
            Self::Massive => "Massive",
            Self::Catastrophic => "Catastrophic",
            Self::Global => "Global",
            Self::Extinction => "Extinction",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rung of the ladder; `upper_bound_kilotons` is exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityBand {
    pub upper_bound_kilotons: f64,
    pub tier: SeverityTier,
    pub description: &'static str,
    pub historical_comparison: &'static str,
}

/// Ascending ladder; the last rung has no upper limit
pub const SEVERITY_LADDER: [SeverityBand; 10] = [
    SeverityBand {
        upper_bound_kilotons: 0.001,
        tier: SeverityTier::Negligible,
        description: "Small meteorite - burns up in atmosphere",
        historical_comparison: "Typical shooting star",
    },
    SeverityBand {
        upper_bound_kilotons: 0.01,
        tier: SeverityTier::VerySmall,
        description: "Small meteorite impact",
        historical_comparison: "Car-sized object",
    },
    SeverityBand {
        upper_bound_kilotons: 0.1,
        tier: SeverityTier::Small,
        description: "Local damage possible",
        historical_comparison: "House-sized object",
    },
    SeverityBand {
        upper_bound_kilotons: 1.0,
        tier: SeverityTier::Moderate,
        description: "City block damage",
        historical_comparison: "Chelyabinsk meteor (2013)",
    },
    SeverityBand {
        upper_bound_kilotons: 15.0,
        tier: SeverityTier::Large,
        description: "City-wide destruction",
        historical_comparison: "Hiroshima bomb equivalent",
    },
    SeverityBand {
        upper_bound_kilotons: 100.0,
        tier: SeverityTier::VeryLarge,
        description: "Regional devastation",
        historical_comparison: "Large nuclear weapon",
    },
    SeverityBand {
        upper_bound_kilotons: 1000.0,
        tier: SeverityTier::Massive,
        description: "Country-wide effects",
        historical_comparison: "Tunguska event (1908)",
    },
    SeverityBand {
        upper_bound_kilotons: 10_000.0,
        tier: SeverityTier::Catastrophic,
        description: "Continental damage",
        historical_comparison: "Large hydrogen bomb",
    },
    SeverityBand {
        upper_bound_kilotons: 100_000.0,
        tier: SeverityTier::Global,
        description: "Global climate effects",
        historical_comparison: "K-Pg boundary impactor scale",
    },
    SeverityBand {
        upper_bound_kilotons: f64::INFINITY,
        tier: SeverityTier::Extinction,
        description: "Mass extinction event",
        historical_comparison: "Dinosaur extinction level",
    },
];

/// Classify an impact energy in kilotons; first band whose bound exceeds
/// the energy wins, anything else (including NaN) is Extinction.
pub fn classify_severity(energy_kilotons: f64) -> &'static SeverityBand {
    SEVERITY_LADDER
        .iter()
        .find(|band| energy_kilotons < band.upper_bound_kilotons)
        .unwrap_or(&SEVERITY_LADDER[SEVERITY_LADDER.len() - 1])
}
