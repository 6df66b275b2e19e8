pub mod comment_use_cases;
pub mod domain;
pub mod ports;
pub mod service;
