//! Help Center (helpcenter)
//!
//! Terminal rendition of a help-center page with two validated search forms.
//!
//! This is the library root, split along the Pure Core / Impure Shell
//! architecture: `model` and `state` are pure, `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
