pub mod apply;
pub mod config;
pub mod employee;
pub mod export;
pub mod extract;
pub mod init;
pub mod log;
pub mod new;
pub mod set;
pub mod show;
