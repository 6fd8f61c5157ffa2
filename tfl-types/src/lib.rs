//! Types for the line status endpoints of the TfL Unified API.
//!
//! Only the parts of the (rather sprawling) response that something in
//! trainsplorer actually looks at are modelled; everything else is ignored
//! by serde.

mod fns;
pub mod line;
#[cfg(test)]
mod tests;

pub use line::*;
