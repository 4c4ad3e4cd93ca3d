//! Schema pipeline — turns resume data in any historical shape into the one
//! canonical record every downstream consumer depends on.

pub mod canonical;
pub mod normalizer;
pub mod paths;
pub mod validator;

pub use canonical::CanonicalResume;
pub use normalizer::{normalize, normalize_str};
pub use validator::validate;
