//! Runtime adapters and the reporting surface of a run.

pub mod api;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_delay;

pub use api::{render_header, render_text, OutputFormat, RunSummary};
#[cfg(feature = "tokio-runtime")]
pub use tokio_delay::TokioDelay;
