//! Behavioral specs for `bedev init`.

mod editorconfig;
