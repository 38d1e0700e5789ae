//! Password comparison, policy, and strength classification.

pub mod policy;
pub mod strength;
pub mod verifier;

pub use policy::PasswordPolicy;
pub use strength::PasswordStrength;
pub use verifier::verify_password;
