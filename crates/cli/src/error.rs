// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! Error types for bedev operations.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Every failure is fatal to the invocation; variants only carry context.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to locate the running executable")]
    CurrentExe(#[source] std::io::Error),

    #[error("failed to read package descriptor {path}")]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse package descriptor {path}")]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read template {path}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize lint configuration")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    InstallFailed { program: String, status: ExitStatus },

    #[error("failed to write console output")]
    Console(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
