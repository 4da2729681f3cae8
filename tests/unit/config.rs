//! Assertion level resolution and tier gating.

use stdaux::{AssertLevel, ConfigError, Tier, ASSERT_LEVEL};

#[test]
fn test_build_level_matches_environment() {
    let ndebug = cfg!(feature = "ndebug")
        || option_env!("STDAUX_NDEBUG").is_some_and(|v| v != "0");
    let expected = AssertLevel::resolve(ndebug, option_env!("STDAUX_MORE_ASSERTS"))
        .expect("build script accepted this level");
    assert_eq!(ASSERT_LEVEL, expected);
}

#[test]
fn test_resolution_table() {
    assert_eq!(AssertLevel::resolve(false, None), Ok(AssertLevel::BASELINE));
    assert_eq!(AssertLevel::resolve(false, Some("0")), Ok(AssertLevel::OFF));
    assert_eq!(AssertLevel::resolve(false, Some("2")), Ok(AssertLevel::VERBOSE));
    assert_eq!(AssertLevel::resolve(false, Some(" 7 ")), Ok(AssertLevel::new(7)));
    assert_eq!(AssertLevel::resolve(true, Some("9")), Ok(AssertLevel::OFF));
    assert_eq!(AssertLevel::resolve(true, Some("junk")), Ok(AssertLevel::OFF));
}

#[test]
fn test_resolution_rejects_bad_levels() {
    assert!(matches!(
        AssertLevel::resolve(false, Some("-1")),
        Err(ConfigError::InvalidLevel { .. })
    ));
    assert!(matches!(
        AssertLevel::resolve(false, Some("")),
        Err(ConfigError::InvalidLevel { .. })
    ));
    assert!(matches!(
        AssertLevel::resolve(false, Some("256")),
        Err(ConfigError::LevelOutOfRange { .. })
    ));
    let message = AssertLevel::resolve(false, Some("256")).unwrap_err().to_string();
    assert!(message.contains("255"), "{}", message);
}

#[test]
fn test_every_level_against_every_tier() {
    for level in 0..=8u8 {
        let level = AssertLevel::new(level);
        assert_eq!(level.enables(Tier::BASELINE), level.get() >= 1);
        for n in 2..=8u8 {
            assert_eq!(
                level.enables(Tier::optional(n)),
                level.get() >= n,
                "level {} tier {}",
                level,
                n
            );
        }
        assert_eq!(level.keeps_diagnostics(), level.get() >= 2);
    }
}

#[test]
fn test_tier_display() {
    assert_eq!(Tier::BASELINE.to_string(), "baseline");
    assert_eq!(Tier::optional(3).to_string(), "tier-3");
    assert!(Tier::BASELINE < Tier::optional(2));
}

#[test]
#[should_panic(expected = "optional tiers start at 2")]
fn test_optional_tier_below_two_panics() {
    let _ = Tier::optional(std::hint::black_box(1));
}
