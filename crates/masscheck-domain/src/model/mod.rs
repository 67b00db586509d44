//! Domain model types

pub mod case;
pub mod norm;
pub mod result;
pub mod status;

pub use case::Case;
pub use norm::{max_mass_for, Norm, ParseNormError};
pub use result::{BatchResult, CaseResult, ChartPoint};
pub use status::{CaseStatus, StatusColor};
