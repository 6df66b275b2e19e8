pub mod domain;
pub mod ports;
pub mod seed_runner;
pub mod seeder;

pub use seed_runner::run_seed;
pub use seeder::{SeedError, SeedOptions, SeedReport, Seeder};
