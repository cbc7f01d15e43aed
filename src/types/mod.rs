// src/types/mod.rs
pub mod raw;
pub mod resume;
pub mod settings;

pub use raw::RawResumeRecord;
pub use resume::*;
pub use settings::{DisplaySettings, ResolvedSettings};
