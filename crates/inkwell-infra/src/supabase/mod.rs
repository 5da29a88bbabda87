//! Hosted store accessed over its PostgREST HTTP interface.

mod config;
mod repo;

pub use config::SupabaseConfig;
pub use repo::SupabasePostRepository;
