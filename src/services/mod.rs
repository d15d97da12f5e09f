pub mod fetch_config;

pub use fetch_config::FetchConfig;
