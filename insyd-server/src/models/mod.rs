//! Domain models with validation at construction
//!
//! Request input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod notification;
pub mod validation;
pub mod window;

pub use notification::NewNotification;
pub use validation::ValidationError;
pub use window::{Window, WindowParams};
