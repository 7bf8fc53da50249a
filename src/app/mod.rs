pub mod shell;
pub mod views;

pub use shell::{App, Page};
pub use views::{buyer_routes, View};
