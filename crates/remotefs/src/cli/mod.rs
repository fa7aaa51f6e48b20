pub mod app;
pub mod get;

pub use app::{App, Commands, GlobalArgs};
