// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors
// ABOUTME: Re-exports helper modules for nutregen-cli
// ABOUTME: Provides access to reference-table setup and JSON output utilities

pub mod display;
pub mod tables;
