// ── Site identity and tenant record ──
//
// SiteId is the foundation of every scoped lookup: dataset slices, ID
// counters, and filters all key on it. A site is one hospital/facility
// whose data must never leak into another site's view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── SiteId ──────────────────────────────────────────────────────────

/// Opaque identifier for a site tenant.
///
/// Freshly registered sites get a UUID-backed id; ids loaded from a
/// snapshot keep whatever string they were stored with. Consumers only
/// compare and display -- the contents carry no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(String);

impl SiteId {
    /// Generate a fresh random id.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SiteId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<String> for SiteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SiteId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ── SiteTheme ───────────────────────────────────────────────────────

/// Accent theme a site's screens render with.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SiteTheme {
    #[default]
    Teal,
    Indigo,
    Amber,
    Crimson,
}

// ── Site ────────────────────────────────────────────────────────────

/// A tenant: one hospital or facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    /// Short uppercase code (e.g., "NGH"). Appears in generated record
    /// ids and is the human-facing selector for activation.
    pub code: String,
    /// Human-friendly display name.
    pub name: String,
    /// Departments this site operates.
    pub departments: Vec<String>,
    /// Accent theme for this site's screens.
    pub theme: SiteTheme,
    /// Licensed bed capacity, used by occupancy analytics.
    pub beds: u32,
}

impl Site {
    /// Create a site with a fresh id. Codes are normalized to uppercase
    /// so activation and generated ids are case-stable.
    pub fn new(code: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self {
            id: SiteId::random(),
            code: code.as_ref().trim().to_uppercase(),
            name: name.into(),
            departments: Vec::new(),
            theme: SiteTheme::default(),
            beds: 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn site_id_round_trips_through_display() {
        let id = SiteId::random();
        let parsed: SiteId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn site_new_normalizes_code() {
        let site = Site::new(" ngh ", "Northgate General");
        assert_eq!(site.code, "NGH");
    }

    #[test]
    fn theme_parses_case_insensitively() {
        let theme: SiteTheme = "Indigo".parse().unwrap();
        assert_eq!(theme, SiteTheme::Indigo);
    }

    #[test]
    fn site_id_serde_is_transparent() {
        let id = SiteId::from("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
    }
}
