//! Command handlers for tqloot CLI

pub mod configure;
pub mod flush;
pub mod slots;
