//! Devscope Core - In-application developer overlay
//!
//! Two debug windows drawn over a running host application with egui:
//!
//! - [`HierarchyBrowser`] - walk loaded scenes down to a node's components,
//!   toggling node activity and component enabled flags live
//! - [`MemoryObjectLister`] - list every live instance of a type with its
//!   retained size, sortable and paginated
//!
//! # Architecture
//!
//! - [`host`] - traits the host runtime implements ([`SceneGraph`],
//!   [`ObjectReflection`], [`MemoryInstrumentation`])
//! - [`DevOverlay`] - hotkeys and lazy ownership of both windows
//! - [`SandboxHost`] - in-memory host used by tests and the viewer

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod host;
pub mod memory;
pub mod overlay;
pub mod sandbox;
#[cfg(test)]
pub mod test_utils;
mod widgets;

pub use config::OverlayConfig;
pub use error::{ConfigError, LookupError};
pub use hierarchy::{HierarchyAction, HierarchyBrowser, Navigation, NavigationCursor};
pub use host::{MemoryInstrumentation, NoInstrumentation, ObjectReflection, SceneGraph};
pub use memory::{MemoryObjectLister, TypeQuery};
pub use overlay::DevOverlay;
pub use sandbox::{SandboxComponent, SandboxHost};
