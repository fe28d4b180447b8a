#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod identity_service;
pub mod progress_service;
pub mod sandbox;

pub use app_services::AppServices;
pub use catalog::LessonCatalog;
pub use error::{AppServicesError, CatalogError};
pub use identity_service::IdentityService;
pub use progress_service::ProgressService;
pub use sandbox::{DocumentSlot, PreviewDocument, RenderTarget, SandboxRuntime};
