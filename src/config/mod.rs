// ABOUTME: Configuration module for deployment-specific settings
// ABOUTME: Organizes environment-variable driven runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! Configuration management
//!
//! Configuration is environment-only: every knob is an environment variable
//! with a development-friendly default, parsed once at startup.

/// Environment configuration management
pub mod environment;

pub use environment::ServerConfig;
