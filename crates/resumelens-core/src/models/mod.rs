//! Domain models shared across crates.

pub mod analysis;
pub mod upload;

pub use analysis::{AnalyzeRequest, AnalyzeResponse, ExperienceLevel, ResumeAnalysis};
pub use upload::UploadGrant;
