mod init;

pub use init::{default_filter, init_telemetry};
