//! Shared fakes for exercising orchestration without a real scheduler or
//! copy mechanism.

mod fake_scheduler;
mod fake_transfer;

pub use fake_scheduler::{RecordingScheduler, SubmittedJob};
pub use fake_transfer::RecordingTransfer;
