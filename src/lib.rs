pub mod cleanup;
pub mod commands;
pub mod environment;
pub mod manifest;
pub mod resolve;
pub mod runtime;
