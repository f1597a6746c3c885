pub mod bundled;
pub mod error;
pub mod resolver;
pub mod routing;
pub mod service;
pub mod theme;
