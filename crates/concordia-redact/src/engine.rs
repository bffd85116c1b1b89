//! Pattern-based PII masking for report text.
//!
//! Two span classes are masked, matching what actually shows up in Korean
//! employment contract scans:
//!
//! - resident registration numbers — `\d{6}[-\s]?[1-4]\d{6}`, masked as
//!   `******-*******`
//! - mobile phone numbers — `010[-\s]?\d{3,4}[-\s]?\d{4}`, masked as
//!   `010-****-****`
//!
//! The patterns deliberately use no word boundaries: Hangul counts as a
//! word character, so a number glued to surrounding Korean text (e.g.
//! "연락처010-1234-5678로") would escape a `\b`-anchored pattern.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use concordia_core::traits::TextRedactor;

static RESIDENT_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{6}[-\s]?[1-4]\d{6}").expect("resident id pattern is a valid regex")
});

static MOBILE_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"010[-\s]?\d{3,4}[-\s]?\d{4}").expect("mobile phone pattern is a valid regex")
});

const RESIDENT_ID_MASK: &str = "******-*******";
const MOBILE_PHONE_MASK: &str = "010-****-****";

/// The CONCORDIA PII filter.
///
/// Stateless and idempotent: the masks contain no digits, so text that has
/// already been through the filter passes through unchanged.
pub struct PatternRedactor;

impl PatternRedactor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PatternRedactor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRedactor for PatternRedactor {
    /// Mask every resident id and mobile phone number in `text`.
    ///
    /// Resident ids are masked first: a 13-digit run must never survive
    /// long enough to be partially consumed as a phone number. Only match
    /// counts are logged, never the matched text.
    fn redact(&self, text: &str) -> String {
        let resident_ids = RESIDENT_ID.find_iter(text).count();
        let first_pass = RESIDENT_ID.replace_all(text, RESIDENT_ID_MASK);

        let phones = MOBILE_PHONE.find_iter(&first_pass).count();
        let cleaned = MOBILE_PHONE.replace_all(&first_pass, MOBILE_PHONE_MASK);

        if resident_ids + phones > 0 {
            debug!(resident_ids, phones, "sensitive spans masked");
        }
        cleaned.into_owned()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
