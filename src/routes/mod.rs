/// Health check route that reports the server as healthy whenever it is running.
pub mod health;

/// Route returning the fixed list of meals.
pub mod meals;

pub use health::*;
pub use meals::*;
