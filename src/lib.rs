pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use adapters::HttpTransport;
pub use app::{buyer_routes, App, Page, View};
pub use config::{toml_config::FileConfig, ClientConfig};
pub use core::actions::{Action, ActionHandle, BuyerClient};
pub use core::router::{Route, Router};
pub use domain::model::{
    ActionOutcome, Address, ApiResponse, BuyerLoginRequest, BuyerSignUpRequest,
};
pub use utils::error::{ClientError, Result};
