//! Command surface for the notelink reference-copying engine.
//!
//! This crate is the thin layer between a host application and
//! [`notelink_core`]: a fixed table of named copy commands with enablement
//! checks, a dispatcher that wires the core pipeline to the host
//! collaborators, a declarative settings editing surface, and a file-backed
//! fallback settings store.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use notelink_commands::{load_settings, Command, Dispatcher, FileSettingsStore};
//!
//! # async fn example(
//! #     workspace: Arc<dyn notelink_core::host::WorkspaceView>,
//! #     links: Arc<dyn notelink_core::host::LinkComposer>,
//! #     clipboard: Arc<dyn notelink_core::host::ClipboardSink>,
//! #     notifier: Arc<dyn notelink_core::host::Notifier>,
//! # ) -> notelink_core::error::Result<()> {
//! let store = FileSettingsStore::default_location()?;
//! let settings = load_settings(&store).await;
//!
//! let dispatcher = Dispatcher::new(settings, workspace, links, clipboard, notifier);
//!
//! // Register every command with the host
//! for spec in Command::all() {
//!     println!("{}: {}", spec.id, spec.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod panel;
pub mod store;

// Re-export commonly used types
pub use commands::{Command, CommandContext, CommandSpec, Dispatcher};
pub use panel::{FieldKind, SettingsField, SettingsPanel};
pub use store::{load_settings, FileSettingsStore};
