pub mod init;

pub use init::{execute_init, InitOutcome};
