//! Concrete proof calculi

pub mod resolution;
pub mod tableaux;

pub use resolution::PropResolution;
pub use tableaux::PropTableaux;
