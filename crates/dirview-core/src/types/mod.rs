//! Core types for Dirview

mod bucket;
mod setting;
mod user;

pub use bucket::*;
pub use setting::*;
pub use user::*;
