// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lightcone_app_core::config::{ConfigError, ConfigService, ConfigStore};
use lightcone_app_core::config_port::{ConfigPort, PREFS_KEY};
use lightcone_app_core::memory::MemoryConfigStore;
use lightcone_app_core::prefs::{PrefsError, RelativityPrefs, DEFAULT_REFERENCE_SPEED};
use lightcone_core::{RuntimeConfigError, MAX_BETA};

#[test]
fn missing_prefs_load_as_defaults() {
    let service = ConfigService::new(MemoryConfigStore::new());
    let prefs = service.load_prefs().expect("load");
    assert_eq!(prefs, RelativityPrefs::default());
    assert_eq!(prefs.observer.reference_speed, DEFAULT_REFERENCE_SPEED);
    assert_eq!(prefs.observer.max_beta, MAX_BETA);
    assert!(prefs.validate().is_ok());
}

#[test]
fn saved_prefs_come_back() {
    let service = ConfigService::new(MemoryConfigStore::new());
    let mut prefs = RelativityPrefs::default();
    prefs.observer.reference_speed = 12.5;
    prefs.pipeline.parallel = true;
    prefs.validator.markers = ["left".into(), "right".into()];
    service.save_prefs(&prefs).expect("save");
    assert_eq!(service.store().keys(), vec![PREFS_KEY.to_owned()]);
    assert_eq!(service.load_prefs().expect("load"), prefs);
}

#[test]
fn partial_json_fills_in_defaults() {
    let store = MemoryConfigStore::new();
    store
        .save_raw(PREFS_KEY, br#"{ "observer": { "reference_speed": 3.0 } }"#)
        .expect("save");
    let prefs = ConfigService::new(&store).load_prefs().expect("load");
    assert_eq!(prefs.observer.reference_speed, 3.0);
    assert_eq!(prefs.observer.max_beta, MAX_BETA);
    assert_eq!(prefs.validator, RelativityPrefs::default().validator);
}

#[test]
fn empty_blob_is_treated_as_missing() {
    let store = MemoryConfigStore::new();
    store.save_raw(PREFS_KEY, b"").expect("save");
    let service = ConfigService::new(&store);
    assert_eq!(service.load_prefs().expect("load"), RelativityPrefs::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let store = MemoryConfigStore::new();
    store.save_raw(PREFS_KEY, b"{ not json").expect("save");
    let err = ConfigService::new(&store).load_prefs().unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn bad_keys_are_refused() {
    let store = MemoryConfigStore::new();
    assert!(matches!(
        store.save_raw("../escape", b"{}"),
        Err(ConfigError::InvalidKey(_))
    ));
    assert!(matches!(store.load_raw("absent"), Err(ConfigError::NotFound)));
}

#[test]
fn validation_rejects_bad_fields() {
    let mut prefs = RelativityPrefs::default();
    prefs.observer.reference_speed = 0.0;
    assert_eq!(prefs.validate(), Err(PrefsError::ReferenceSpeed(0.0)));

    let mut prefs = RelativityPrefs::default();
    prefs.observer.max_beta = 1.0;
    assert_eq!(
        prefs.validate(),
        Err(PrefsError::Runtime(RuntimeConfigError::MaxBeta(1.0)))
    );

    let mut prefs = RelativityPrefs::default();
    prefs.validator.tolerance = -1.0;
    assert_eq!(
        prefs.validate(),
        Err(PrefsError::Runtime(RuntimeConfigError::Tolerance(-1.0)))
    );

    let mut prefs = RelativityPrefs::default();
    prefs.validator.markers = ["same".into(), "same".into()];
    assert!(matches!(prefs.validate(), Err(PrefsError::Markers(_, _))));
}

#[test]
fn runtime_config_carries_the_prefs() {
    let mut prefs = RelativityPrefs::default();
    prefs.observer.max_beta = 0.9;
    prefs.pipeline.parallel = true;
    prefs.validator.tolerance = 0.01;
    let cfg = prefs.to_runtime_config().expect("valid");
    assert_eq!(cfg.max_beta(), 0.9);
    assert!(cfg.parallel());
    assert_eq!(cfg.validator_tolerance(), 0.01);
}
