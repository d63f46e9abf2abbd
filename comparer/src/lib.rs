pub mod app;
pub mod cli;
pub mod consts;
pub mod errors;
