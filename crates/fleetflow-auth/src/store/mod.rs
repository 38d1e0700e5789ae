//! The account roster.

pub mod roster;
pub mod seed;

pub use roster::UserStore;
pub use seed::seed_roster;
