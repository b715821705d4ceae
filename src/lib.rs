pub mod analyst;
pub mod config;
pub mod gateway;
pub mod secrets;
