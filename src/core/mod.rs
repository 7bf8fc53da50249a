pub mod actions;
pub mod router;

pub use crate::domain::model::{ActionOutcome, ApiResponse};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
