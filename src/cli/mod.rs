//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod docs;
pub mod lookup;
pub mod render;

pub use args::{CheckArgs, Cli, Commands, LookupArgs, RenderArgs};
