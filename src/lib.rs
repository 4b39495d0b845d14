pub mod collision;
pub mod compute;
pub mod config;
pub mod difficulty;
pub mod entities;
pub mod error;
pub mod frame;
pub mod input;
pub mod logging;
pub mod motion;
