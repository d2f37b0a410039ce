// ABOUTME: Configuration module for front-end settings read from the environment
// ABOUTME: Re-exports server and upload configuration alongside the engine's plan configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! Configuration module for `NutreGen`
//!
//! - **Environment**: marker table source, upload limits, deployment environment
//! - **Plan**: calorie table and macro rules, owned by the intelligence crate

/// Environment and front-end configuration
pub mod environment;

pub use environment::{Environment, ServerConfig, UploadConfig};
pub use nutregen_intelligence::config::{ConfigError, MacroRounding, PlanConfig};
