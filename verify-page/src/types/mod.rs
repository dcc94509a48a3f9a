mod environment;

pub use environment::{Config, Environment};
