// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors
// ABOUTME: Re-exports command modules for nutregen-cli
// ABOUTME: Provides access to plan derivation and reference-data commands

pub mod plan;
pub mod reference;
