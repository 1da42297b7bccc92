//! # Configuration Tests
//!
//! ISA string parsing, JSON deserialization, and defaults.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvsim_isa::common::ConfigError;
use rvsim_isa::config::{Extension, ExtensionSet, IsaConfig};

#[test]
fn test_default_config_enables_every_extension() {
    let config = IsaConfig::default();
    assert_eq!(config.isa, "rv64gcv_zba_zbb_zbc_zbe_zbf_zbm_zbp_zbr_zbs_zbt");
    assert_eq!(config.extensions().unwrap(), ExtensionSet::all());
}

#[test]
fn test_general_shorthand_expands() {
    let set = ExtensionSet::from_isa_string("rv64g").unwrap();
    let expected: Vec<Extension> = vec![
        Extension::I,
        Extension::M,
        Extension::A,
        Extension::F,
        Extension::D,
        Extension::Zicsr,
        Extension::Zifencei,
    ];
    assert_eq!(set.iter().collect::<Vec<_>>(), expected);
}

#[rstest]
#[case("rv64i", &[Extension::I])]
#[case("rv32imc", &[Extension::I, Extension::M, Extension::C])]
#[case(
    "RV64IMAC_Zicsr",
    &[Extension::I, Extension::M, Extension::A, Extension::C, Extension::Zicsr]
)]
#[case("rv64iv_zba_zbs", &[Extension::I, Extension::V, Extension::Zba, Extension::Zbs])]
fn test_isa_string_parses(#[case] isa: &str, #[case] expected: &[Extension]) {
    let set = ExtensionSet::from_isa_string(isa).unwrap();
    assert_eq!(set, expected.iter().copied().collect::<ExtensionSet>());
}

#[rstest]
#[case("x86_64")]
#[case("rv128i")]
#[case("")]
fn test_bad_prefix_rejected(#[case] isa: &str) {
    let err = ExtensionSet::from_isa_string(isa).unwrap_err();
    assert!(matches!(err, ConfigError::BadPrefix(_)), "{err}");
}

#[test]
fn test_missing_base_rejected() {
    let err = ExtensionSet::from_isa_string("rv64mac").unwrap_err();
    assert!(matches!(err, ConfigError::MissingBase(_)), "{err}");
}

#[rstest]
#[case("rv64iq", "q")]
#[case("rv64i_zfoo", "zfoo")]
#[case("rv64i_m", "m")]
fn test_unknown_extension_rejected(#[case] isa: &str, #[case] unknown: &str) {
    match ExtensionSet::from_isa_string(isa) {
        Err(ConfigError::UnknownExtension(name)) => assert_eq!(name, unknown),
        other => panic!("expected UnknownExtension, got {other:?}"),
    }
}

#[rstest]
#[case("rv64i_")]
#[case("rv64i__zba")]
fn test_empty_segment_rejected(#[case] isa: &str) {
    let err = ExtensionSet::from_isa_string(isa).unwrap_err();
    assert!(matches!(err, ConfigError::EmptySegment(_)), "{err}");
}

#[test]
fn test_from_json_reads_isa() {
    let config = IsaConfig::from_json(r#"{ "isa": "rv64imac_zba" }"#).unwrap();
    let set = config.extensions().unwrap();
    assert!(set.contains(Extension::Zba));
    assert!(set.contains(Extension::C));
    assert!(!set.contains(Extension::F));
    assert!(!set.contains(Extension::Zicsr));
}

#[test]
fn test_from_json_missing_field_uses_default() {
    let config = IsaConfig::from_json("{}").unwrap();
    assert_eq!(config, IsaConfig::default());
}

#[test]
fn test_from_json_malformed_document() {
    let err = IsaConfig::from_json(r#"{ "isa": 64 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "{err}");
}

#[test]
fn test_extension_set_operations() {
    let mut set = ExtensionSet::empty();
    assert!(set.is_empty());
    set.insert(Extension::M);
    let set = set.with(Extension::I);
    assert!(set.contains(Extension::I));
    assert!(set.contains(Extension::M));
    assert!(!set.contains(Extension::A));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![Extension::I, Extension::M]);
}

#[test]
fn test_extension_display_matches_isa_name() {
    for ext in Extension::ALL {
        assert_eq!(ext.to_string(), ext.isa_name());
    }
    assert_eq!(Extension::Zifencei.to_string(), "zifencei");
}
