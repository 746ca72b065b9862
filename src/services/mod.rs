pub mod server;
pub mod standings;
