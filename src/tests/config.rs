use super::Config;
use crate::heading::HeadingLevels;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.file_extensions, ["md"]);
    assert_eq!(cfg.heading_levels(), HeadingLevels::default());
    assert!(cfg.animate_header);
    assert!((cfg.header_threshold - 10.0).abs() < f64::EPSILON);
    assert!((cfg.spy_offset - 85.0).abs() < f64::EPSILON);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let cfg = Config::from_toml("animate_header = false\nprimary_level = 1\nsecondary_level = 2\n")
        .unwrap();
    assert!(!cfg.animate_header);
    assert_eq!(
        cfg.heading_levels(),
        HeadingLevels {
            primary: 1,
            secondary: 2
        }
    );
    assert_eq!(cfg.logo, "tocspy");
    assert_eq!(cfg.file_extensions, ["md"]);
}

#[test]
fn test_empty_file_matches_defaults() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
}
