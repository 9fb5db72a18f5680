pub mod catalog;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod mvi;
pub mod shutdown;
pub mod ui;
