//! Account entities and role enumeration.

pub mod model;
pub mod role;

pub use model::{Account, NewAccount};
pub use role::Role;
