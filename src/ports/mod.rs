mod scheduler;
mod transfer;

pub use scheduler::{JobHandle, JobResources, JobScheduler};
pub use transfer::FileTransfer;
