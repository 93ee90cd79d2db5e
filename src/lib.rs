pub mod logger;
pub mod settings;

pub mod application_port;
pub mod application_impl;
