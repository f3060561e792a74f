//! Platform conversion for decoded saves.
//!
//! PC and mobile builds of the game count rubies at different scales: one
//! PC ruby is worth ten mobile rubies. Converting a save to the other
//! platform rescales the balance and rewrites both the `platform` and
//! `saveOrigin` tags.

use crate::save::SaveRecord;
use std::fmt;

/// Ruby scale factor between the PC and mobile platforms.
pub const RUBY_SCALE: u64 = 10;

/// A save platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Pc,
    Mobile,
}

impl Platform {
    /// The tag stored in the `platform` and `saveOrigin` record fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Mobile => "mobile",
        }
    }

    /// Parse a record tag. Returns `None` for tags outside the known set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pc" => Some(Platform::Pc),
            "mobile" => Some(Platform::Mobile),
            _ => None,
        }
    }

    /// The other member of the two-valued platform set.
    pub fn other(self) -> Self {
        match self {
            Platform::Pc => Platform::Mobile,
            Platform::Mobile => Platform::Pc,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a record to the given platform, rescaling rubies.
///
/// Converting into PC floor-divides the balance by [`RUBY_SCALE`];
/// converting into mobile multiplies by it. The PC-direction division is
/// lossy for balances that are not a multiple of ten; that is observable
/// game behavior and is preserved as-is.
pub fn convert_to(record: &SaveRecord, target: Platform) -> SaveRecord {
    let rubies = match target {
        Platform::Pc => record.rubies / RUBY_SCALE,
        // Balances near u64::MAX would wrap; clamp instead.
        Platform::Mobile => record.rubies.saturating_mul(RUBY_SCALE),
    };
    SaveRecord {
        rubies,
        platform: target.as_str().to_string(),
        save_origin: target.as_str().to_string(),
    }
}

/// Convert a record to the opposite platform.
///
/// A record whose platform tag is anything other than `"pc"` converts
/// toward PC, matching the original converter's handling of unknown tags.
pub fn convert(record: &SaveRecord) -> SaveRecord {
    let target = match Platform::from_tag(&record.platform) {
        Some(platform) => platform.other(),
        None => Platform::Pc,
    };
    convert_to(record, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rubies: u64, platform: &str) -> SaveRecord {
        SaveRecord {
            rubies,
            platform: platform.to_string(),
            save_origin: platform.to_string(),
        }
    }

    #[test]
    fn test_pc_to_mobile_multiplies() {
        let converted = convert(&record(100, "pc"));
        assert_eq!(converted.rubies, 1000);
        assert_eq!(converted.platform, "mobile");
        assert_eq!(converted.save_origin, "mobile");
    }

    #[test]
    fn test_mobile_to_pc_floors() {
        let converted = convert(&record(105, "mobile"));
        assert_eq!(converted.rubies, 10);
        assert_eq!(converted.platform, "pc");
        assert_eq!(converted.save_origin, "pc");
    }

    #[test]
    fn test_origin_rewritten_even_when_different() {
        let mut rec = record(50, "pc");
        rec.save_origin = "mobile".to_string();
        let converted = convert(&rec);
        assert_eq!(converted.platform, "mobile");
        assert_eq!(converted.save_origin, "mobile");
    }

    #[test]
    fn test_toggle_exact_for_multiples_of_ten() {
        let original = record(200, "pc");
        let back = convert(&convert(&original));
        assert_eq!(back, original);
    }

    #[test]
    fn test_toggle_lossy_otherwise() {
        // 105 mobile -> 10 pc -> 100 mobile; the remainder is gone.
        let back = convert(&convert(&record(105, "mobile")));
        assert_eq!(back.rubies, 100);
    }

    #[test]
    fn test_unknown_platform_converts_to_pc() {
        let converted = convert(&record(42, "console"));
        assert_eq!(converted.platform, "pc");
        assert_eq!(converted.rubies, 4);
    }

    #[test]
    fn test_huge_balance_saturates() {
        let converted = convert_to(&record(u64::MAX, "pc"), Platform::Mobile);
        assert_eq!(converted.rubies, u64::MAX);
    }

    #[test]
    fn test_platform_tags() {
        assert_eq!(Platform::from_tag("pc"), Some(Platform::Pc));
        assert_eq!(Platform::from_tag("mobile"), Some(Platform::Mobile));
        assert_eq!(Platform::from_tag("PC"), None);
        assert_eq!(Platform::Pc.other(), Platform::Mobile);
        assert_eq!(Platform::Mobile.other(), Platform::Pc);
    }
}
