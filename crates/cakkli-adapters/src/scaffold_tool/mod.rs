//! External frontend scaffold tool adapters.

mod vite;

pub use vite::ViteScaffold;
