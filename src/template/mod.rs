//! Text template rendering.
//!
//! This module provides pure `{{field}}` substitution over flat string
//! mappings, plus the seniority certificate built on top of it. There
//! are no conditionals, loops, or expressions; this is string
//! substitution, not a templating language.

mod certificate;
mod renderer;

pub use certificate::{SENIORITY_CERTIFICATE_TEMPLATE, SigningInfo, seniority_certificate};
pub use renderer::{placeholders, render};
