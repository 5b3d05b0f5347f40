pub mod badge;
pub mod error;
pub mod level;
pub mod metrics;

pub use badge::*;
pub use error::*;
pub use level::*;
pub use metrics::*;
