// ABOUTME: Core types and constants for the NutreGen plan-derivation engine
// ABOUTME: Foundation crate with error handling, lifestyle/plan models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

#![deny(unsafe_code)]

//! # `NutreGen` Core
//!
//! Foundation crate providing shared types and constants for the `NutreGen`
//! plan-derivation engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Lifestyle input (raw form and typed), macro split, meals, and plan records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (lifestyle input, macros, meal suggestions, plan result)
pub mod models;
