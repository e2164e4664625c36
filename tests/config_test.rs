// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! Tests for environment-based server configuration
//!
//! These tests mutate process environment variables, so they are serialized
//! to avoid cross-test interference.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serial_test::serial;
use std::env;
use vitalia_wellness_server::config::environment::{Environment, LogLevel, ServerConfig};

fn clear_config_env() {
    for key in ["HTTP_PORT", "HOST", "LOG_LEVEL", "ENVIRONMENT", "CORS_ORIGINS"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors_origins, vec!["*".to_owned()]);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_config_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("HOST", "0.0.0.0");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ORIGINS", "https://app.vitalia.health,https://admin.vitalia.health");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 9090);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.environment.is_production());
    assert_eq!(config.cors_origins.len(), 2);
    assert_eq!(config.bind_address(), "0.0.0.0:9090");

    clear_config_env();
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_port() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");

    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
}
