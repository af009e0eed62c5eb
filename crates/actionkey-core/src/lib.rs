pub mod action;
pub mod error;
pub mod manifest;

pub use action::{define_action, ActionToken, Namespace, Subactions};
pub use error::{ActionKeyError, Result};
pub use manifest::Manifest;
