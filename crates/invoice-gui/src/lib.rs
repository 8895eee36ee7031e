//! Invoice Hub - GUI Library
//!
//! Application types for the Invoice Hub desktop front end. The invoice data
//! and all state transitions live in `invoice-workspace`; this crate renders
//! it and maps user interaction onto workspace commands.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

pub use error::GuiError;
