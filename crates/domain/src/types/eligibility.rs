//! Presenter licensing types
//!
//! The batch verdict is the logical AND over every host and every present
//! alternate host check; a single violation fails the whole batch.

use serde::{Deserialize, Serialize};

use crate::constants::LICENSED_TIER_CODE;
use crate::impl_domain_enum_conversions;

/// Provider account tier, decoded from the numeric `type` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LicenseTier {
    Basic,
    Licensed,
    OnPrem,
    Unknown(u8),
}

impl LicenseTier {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Basic,
            LICENSED_TIER_CODE => Self::Licensed,
            3 => Self::OnPrem,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Licensed => LICENSED_TIER_CODE,
            Self::OnPrem => 3,
            Self::Unknown(code) => code,
        }
    }

    /// Only licensed accounts may host independently.
    pub fn is_licensed(self) -> bool {
        matches!(self, Self::Licensed)
    }
}

/// Account as returned by the provider's lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderAccount {
    pub id: String,
    pub email: Option<String>,
    pub tier: LicenseTier,
}

/// Which presenter slot of a class an account fills.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HostRole {
    Host,
    AlternateHost,
}

impl_domain_enum_conversions!(HostRole {
    Host => "host",
    AlternateHost => "alternate_host",
});

/// Why an account failed the license gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum IneligibilityReason {
    /// Account exists but is not on the licensed tier.
    Unlicensed { tier: LicenseTier },
    /// Lookup failed (unknown user, transport error, bad response).
    LookupFailed(String),
}

impl std::fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unlicensed { tier } => {
                write!(f, "account is not licensed (tier code {})", tier.code())
            }
            Self::LookupFailed(message) => write!(f, "account lookup failed: {message}"),
        }
    }
}

/// One offending account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EligibilityViolation {
    pub user: String,
    pub class_id: String,
    pub role: HostRole,
    pub reason: IneligibilityReason,
}

/// Batch-level outcome of the license gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EligibilityVerdict {
    /// Number of account lookups performed.
    pub checked: usize,
    pub violations: Vec<EligibilityViolation>,
}

impl EligibilityVerdict {
    pub fn is_eligible(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn record_pass(&mut self) {
        self.checked += 1;
    }

    pub fn record_violation(&mut self, violation: EligibilityViolation) {
        self.checked += 1;
        self.violations.push(violation);
    }
}
