// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn defaults_when_unset() {
    std::env::remove_var("ARANGO_URL");
    std::env::remove_var("ARANGO_USER");
    std::env::remove_var("ARANGO_PASSWORD");

    let config = EnvConfig::from_env();

    assert_eq!(config.arango_url, DEFAULT_ARANGO_URL);
    assert_eq!(config.arango_user, DEFAULT_ARANGO_USER);
    assert_eq!(config.arango_password, None);
}

#[test]
#[serial]
fn reads_overrides() {
    std::env::set_var("ARANGO_URL", "http://db.internal:8529");
    std::env::set_var("ARANGO_USER", "hermes");
    std::env::set_var("ARANGO_PASSWORD", "secret");

    let config = EnvConfig::from_env();

    assert_eq!(config.arango_url, "http://db.internal:8529");
    assert_eq!(config.arango_user, "hermes");
    assert_eq!(config.arango_password.as_deref(), Some("secret"));

    std::env::remove_var("ARANGO_URL");
    std::env::remove_var("ARANGO_USER");
    std::env::remove_var("ARANGO_PASSWORD");
}
