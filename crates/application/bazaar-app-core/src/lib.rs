pub mod alerts;
pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod error;
pub mod kernel;
pub mod orders;
pub mod persistence;
pub mod ports;
pub mod session;
pub mod viewmodel;

pub use alerts::{AlertPresenter, AlertQueue};
pub use app::{build_application, AdminApplication, HttpDashboardSource};
pub use app_core::*;
pub use domain::{AppState, DashboardState, RequestId, HOME_PATH};
pub use error::AccessError;
pub use kernel::{AdminKernel, Stores};
pub use orders::OrderStore;
pub use persistence::RedbSelectionRepo;
pub use ports::*;
pub use session::{AuthOverlay, AuthStep};
pub use viewmodel::*;
