// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! bedev: writes standard editor and lint configuration into a project.

pub mod cli;
pub mod config;
pub mod console;
pub mod descriptor;
pub mod error;
pub mod init;
pub mod installer;
pub mod paths;

pub use error::{Error, Result};

#[cfg(test)]
pub mod test_utils;
