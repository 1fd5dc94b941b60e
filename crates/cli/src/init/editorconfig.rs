// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! `.editorconfig` initializer: copies the bundled template verbatim.

use std::io::Write;

use crate::console::Console;
use crate::error::{Error, Result};
use crate::init::InitContext;
use crate::paths::{self, EDITORCONFIG_FILE};

pub fn init<W: Write>(ctx: &InitContext<'_>, console: &mut Console<W>) -> Result<()> {
    let template = paths::template_path(ctx.root);
    let content = std::fs::read(&template)
        .map_err(|source| Error::Template { path: template.clone(), source })?;

    let target = ctx.cwd.join(EDITORCONFIG_FILE);
    console.writing(&target)?;
    if ctx.dry {
        return Ok(());
    }

    // Existing files are replaced without asking.
    std::fs::write(&target, content).map_err(|source| Error::Write { path: target, source })
}
