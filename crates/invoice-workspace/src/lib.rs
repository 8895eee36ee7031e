//! Session state and behavior for Invoice Hub.
//!
//! [`Workspace`] owns the invoice list, the form draft, the current view, the
//! search term and the preview selection. Front ends send it [`Command`]s
//! through [`Workspace::dispatch`] and render from the returned
//! [`WorkspaceEvent`]s and the workspace's query methods.
//!
//! # Example
//!
//! ```
//! use invoice_workspace::{Command, DraftField, ItemField, View, Workspace};
//!
//! let mut ws = Workspace::default();
//! ws.dispatch(Command::NewInvoice)?;
//! ws.dispatch(Command::SetField(DraftField::ClientName, "Acme".into()))?;
//! ws.dispatch(Command::SetField(DraftField::ClientEmail, "ap@acme.test".into()))?;
//! ws.dispatch(Command::SetField(DraftField::DueDate, "2025-12-01".into()))?;
//! ws.dispatch(Command::UpdateItem { index: 0, field: ItemField::Description, value: "Support".into() })?;
//! ws.dispatch(Command::UpdateItem { index: 0, field: ItemField::Rate, value: "250".into() })?;
//! ws.dispatch(Command::SubmitForm)?;
//!
//! assert_eq!(ws.view(), View::Dashboard);
//! assert_eq!(ws.invoices().last().map(|i| i.id.to_string()), Some("003".to_string()));
//! # Ok::<(), invoice_workspace::WorkspaceError>(())
//! ```

pub mod command;
pub mod config;
pub mod draft;
pub mod error;
pub mod event;
pub mod ids;
pub mod preview;
pub mod render;
pub mod search;
pub mod view;
mod workspace;

pub use command::Command;
pub use config::WorkspaceConfig;
pub use draft::{DATE_FORMAT, Draft, DraftField, ItemEdit, ItemField, LineItemDraft, NumericInput};
pub use error::{DraftError, ItemIssue, ItemProblem, WorkspaceError};
pub use event::{Notice, NoticeLevel, WorkspaceEvent};
pub use ids::{IdAllocator, IdPolicy};
pub use preview::{InvoicePreview, PreviewRow};
pub use render::{DocumentRenderer, PdfStub, RenderError, RenderRequest, RenderedDocument};
pub use search::search;
pub use view::{FormMode, View};
pub use workspace::{Clock, Workspace};
