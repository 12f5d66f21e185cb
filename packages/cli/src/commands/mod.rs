pub mod build;
pub mod init;
pub mod sync;

pub use build::{build, BuildArgs};
pub use init::{init, InitArgs};
pub use sync::{sync, SyncArgs};
