//! Configure/reset semantics at the extractor level: sequential apply-then-
//! fail, no rollback, and lazy re-derived defaults.

mod common;

use common::{sorted_file_names, wav_chunk, write_resource};
use wavcarve::config::{ConfigValue, DEFAULT_EXTENSION};
use wavcarve::error::WavCarveError;
use wavcarve::extract::Extractor;

#[test]
fn unknown_option_fails_and_keeps_prior_overrides() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let input = write_resource(temp_dir.path(), "bank.dat", b"data");
    let out_dir = temp_dir.path().join("out");
    let mut extractor = Extractor::new(&input).expect("extractor");

    let err = extractor
        .configure([
            ("out_dir", ConfigValue::from(out_dir.clone())),
            ("max_volume", ConfigValue::from("11")),
        ])
        .expect_err("must fail");

    assert!(matches!(err, WavCarveError::UnknownConfigOption(key) if key == "max_volume"));
    // the override applied before the failing key stays applied
    assert_eq!(extractor.config().out_dir().expect("out dir"), out_dir);
}

#[test]
fn empty_prefix_fails_after_earlier_keys_apply() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let input = write_resource(temp_dir.path(), "bank.dat", b"data");
    let out_dir = temp_dir.path().join("out");
    let mut extractor = Extractor::new(&input).expect("extractor");

    let err = extractor
        .configure([
            ("out_dir", ConfigValue::from(out_dir.clone())),
            ("out_file_name_prefix", ConfigValue::from("")),
        ])
        .expect_err("must fail");

    assert!(matches!(
        err,
        WavCarveError::InvalidConfigValue {
            option: "out_file_name_prefix",
            ..
        }
    ));
    assert_eq!(extractor.config().out_dir().expect("out dir"), out_dir);
    // the rejected value never lands; the derived prefix survives
    assert_eq!(extractor.config().out_file_name_prefix(), "bank_");
}

#[test]
fn reset_config_restores_defaults_and_rederives_prefix() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let input = write_resource(temp_dir.path(), "soundbank.dat", b"data");
    let mut extractor = Extractor::new(&input).expect("extractor");
    extractor
        .configure([
            ("out_file_name_prefix", ConfigValue::from("custom_")),
            ("out_file_extension", ConfigValue::from(".wave")),
            ("debug_skip_write", ConfigValue::from(true)),
        ])
        .expect("configure");

    extractor.reset_config().expect("reset");

    assert_eq!(extractor.config().out_file_name_prefix(), "soundbank_");
    assert_eq!(extractor.config().out_file_extension(), DEFAULT_EXTENSION);
    assert!(!extractor.config().debug_skip_write());
    assert!(extractor.config().debug_enable_log());
}

#[test]
fn invalid_out_dir_override_is_rejected() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let input = write_resource(temp_dir.path(), "bank.dat", b"data");
    let bad_dir = temp_dir.path().join("missing").join("deeper");
    let mut extractor = Extractor::new(&input).expect("extractor");

    let err = extractor
        .configure([("out_dir", ConfigValue::from(bad_dir))])
        .expect_err("must fail");

    assert!(matches!(
        err,
        WavCarveError::InvalidConfigValue {
            option: "out_dir",
            ..
        }
    ));
}

#[test]
fn overrides_applied_before_failure_shape_extraction() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let input = write_resource(temp_dir.path(), "bank.dat", &wav_chunk(b"payload"));
    let out_dir = temp_dir.path().join("out");
    let mut extractor = Extractor::new(&input).expect("extractor");

    extractor
        .configure([("out_dir", ConfigValue::from(out_dir.clone()))])
        .expect("configure");
    let err = extractor
        .configure([
            ("out_file_name_prefix", ConfigValue::from("keep_")),
            ("loudness", ConfigValue::from(true)),
        ])
        .expect_err("must fail");
    assert!(matches!(err, WavCarveError::UnknownConfigOption(_)));

    extractor.extract().expect("extract");
    assert_eq!(sorted_file_names(&out_dir), vec!["keep_0.wav"]);
}
