// ABOUTME: Helper modules for trainplan-cli
// ABOUTME: Provides output rendering utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
