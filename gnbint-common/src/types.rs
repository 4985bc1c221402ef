//! Core integrator types: TAC, gNB name, PLMN configuration and unit status.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidTac;

/// Tracking Area Code.
///
/// A 24-bit identifier (range 0-16777215) for a cellular tracking area.
/// Operators configure it as hexadecimal text; it is published and displayed
/// as a decimal integer.
///
/// Deserialization goes through [`Tac::new`], so a wider value never
/// becomes a `Tac`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tac(u32);

impl Tac {
    /// Largest value representable in the 24-bit TAC field.
    pub const MAX: u32 = 0xFF_FFFF;

    /// Creates a TAC from a raw value, returning `None` above 24 bits.
    pub const fn new(value: u32) -> Option<Self> {
        if value > Self::MAX {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the numeric value.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Decodes a TAC from its hexadecimal configuration text.
    ///
    /// Surrounding whitespace, a leading `+` and a `0x`/`0X` prefix are
    /// accepted. Absent or blank input, non-hex characters and values wider
    /// than 24 bits are rejected. No fallback value is ever substituted here;
    /// callers decide what absence means.
    ///
    /// # Example
    ///
    /// ```
    /// use gnbint_common::Tac;
    ///
    /// assert_eq!(Tac::decode(Some("012")).unwrap().value(), 18);
    /// assert!(Tac::decode(Some("gg")).is_err());
    /// assert!(Tac::decode(None).is_err());
    /// ```
    pub fn decode(raw: Option<&str>) -> Result<Self, InvalidTac> {
        let text = raw.unwrap_or_default().trim();
        if text.is_empty() {
            return Err(InvalidTac::Empty);
        }

        let unsigned = text.strip_prefix('+').unwrap_or(text);
        let digits = unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
            .unwrap_or(unsigned);

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidTac::NotHex(text.to_string()));
        }

        // Leading zeros never change the value but would overflow the parse.
        let significant = digits.trim_start_matches('0');
        if significant.len() > 6 {
            return Err(InvalidTac::OutOfRange(text.to_string()));
        }
        if significant.is_empty() {
            return Ok(Self(0));
        }

        let value = u32::from_str_radix(significant, 16)
            .map_err(|_| InvalidTac::NotHex(text.to_string()))?;
        Self::new(value).ok_or_else(|| InvalidTac::OutOfRange(text.to_string()))
    }
}

impl TryFrom<u32> for Tac {
    type Error = InvalidTac;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InvalidTac::OutOfRange(value.to_string()))
    }
}

impl From<Tac> for u32 {
    fn from(tac: Tac) -> Self {
        tac.0
    }
}

impl fmt::Debug for Tac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tac({:#08x})", self.0)
    }
}

impl fmt::Display for Tac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Tac {
    fn default() -> Self {
        Self(1)
    }
}

/// Canonical gNB identifier published for discovery by the core network.
///
/// Always `{model-name}-gnb-{app-name}`; never stored, rebuilt on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GnbName(String);

impl GnbName {
    /// Builds the gNB name from the deployment-scope (model) name and the
    /// application name.
    pub fn build(scope_name: &str, app_name: &str) -> Self {
        Self(format!("{scope_name}-gnb-{app_name}"))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name is non-empty.
    pub fn has_value(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for GnbName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<GnbName> for String {
    fn from(name: GnbName) -> Self {
        name.0
    }
}

/// PLMN configuration published by the core network.
///
/// Owned by the peer application; the integrator only reads it back and
/// formats it for operators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlmnConfig {
    /// Mobile Country Code (3 digits)
    pub mcc: String,
    /// Mobile Network Code (2-3 digits)
    pub mnc: String,
    /// Slice/Service Type
    pub sst: u8,
}

impl PlmnConfig {
    /// Creates a new PLMN configuration.
    pub fn new(mcc: impl Into<String>, mnc: impl Into<String>, sst: u8) -> Self {
        Self {
            mcc: mcc.into(),
            mnc: mnc.into(),
            sst,
        }
    }
}

impl fmt::Display for PlmnConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'mcc': '{}', 'mnc': '{}', 'sst': {}}}",
            self.mcc, self.mnc, self.sst
        )
    }
}

/// Formats a PLMN list as a comma-separated operator-facing string.
pub fn format_plmns(plmns: &[PlmnConfig]) -> String {
    plmns
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Health of the unit as reported to the operator.
///
/// The resolver only ever produces `Active`, `Waiting` and `Blocked`;
/// `Maintenance` and `Unknown` exist so a host snapshot can carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum UnitStatus {
    /// Everything needed is in place; the detail is informational.
    Active(String),
    /// Waiting on another application to provide something.
    Waiting(String),
    /// Operator intervention (relating, reconfiguring) is required.
    Blocked(String),
    /// The unit is performing work on its own.
    Maintenance(String),
    /// No status has been set yet.
    #[default]
    Unknown,
}

impl UnitStatus {
    /// Creates an active status with the given detail.
    pub fn active(detail: impl Into<String>) -> Self {
        UnitStatus::Active(detail.into())
    }

    /// Creates a waiting status with the given reason.
    pub fn waiting(reason: impl Into<String>) -> Self {
        UnitStatus::Waiting(reason.into())
    }

    /// Creates a blocked status with the given reason.
    pub fn blocked(reason: impl Into<String>) -> Self {
        UnitStatus::Blocked(reason.into())
    }

    /// Returns the lower-case status name.
    pub fn name(&self) -> &'static str {
        match self {
            UnitStatus::Active(_) => "active",
            UnitStatus::Waiting(_) => "waiting",
            UnitStatus::Blocked(_) => "blocked",
            UnitStatus::Maintenance(_) => "maintenance",
            UnitStatus::Unknown => "unknown",
        }
    }

    /// Returns the status message, empty for `Unknown`.
    pub fn message(&self) -> &str {
        match self {
            UnitStatus::Active(m)
            | UnitStatus::Waiting(m)
            | UnitStatus::Blocked(m)
            | UnitStatus::Maintenance(m) => m,
            UnitStatus::Unknown => "",
        }
    }

    /// Returns true for `Active`.
    pub fn is_active(&self) -> bool {
        matches!(self, UnitStatus::Active(_))
    }

    /// Returns true for `Blocked`.
    pub fn is_blocked(&self) -> bool {
        matches!(self, UnitStatus::Blocked(_))
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message().is_empty() {
            f.write_str(self.name())
        } else {
            write!(f, "{}: {}", self.name(), self.message())
        }
    }
}
