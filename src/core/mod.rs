pub mod policy;
pub mod report;

pub use crate::domain::generations::GenerationsInfo;
pub use crate::domain::model::{Generation, GenerationName, SupportPeriod, SupportTimeline};
pub use crate::domain::ports::SupportPolicy;
pub use crate::utils::error::Result;
