//! # Inkwell Infrastructure
//!
//! Concrete implementations of the `PostRepository` port defined in `inkwell-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All stores enabled
//! - `minimal` - In-memory store only
//! - `postgres` - Direct PostgreSQL access via SeaORM
//! - `supabase` - Hosted store through its PostgREST endpoint

pub mod database;

#[cfg(feature = "supabase")]
pub mod supabase;

pub use database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresPostRepository};

#[cfg(feature = "supabase")]
pub use supabase::{SupabaseConfig, SupabasePostRepository};
