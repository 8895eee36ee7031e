//! The invoice workspace: owned state plus the command reducer.

use std::fmt;

use chrono::{Local, NaiveDate};
use invoice_model::{Decimal, Invoice, InvoiceId, InvoiceStats, sample_invoices};
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::config::WorkspaceConfig;
use crate::draft::{Draft, DraftField, ItemEdit, ItemField};
use crate::error::WorkspaceError;
use crate::event::WorkspaceEvent;
use crate::ids::{IdAllocator, IdPolicy};
use crate::preview::InvoicePreview;
use crate::render::{DocumentRenderer, PdfStub, RenderRequest};
use crate::search::search;
use crate::view::{FormMode, View};

/// Source of "today" for new drafts.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// All session state: invoices, the form draft, navigation and selection.
///
/// Every change goes through [`Workspace::dispatch`]. Derived values (totals,
/// stats, the filtered list, the preview) are computed on request.
pub struct Workspace {
    invoices: Vec<Invoice>,
    draft: Draft,
    view: View,
    search: String,
    preview: Option<InvoiceId>,
    ids: IdAllocator,
    renderer: Box<dyn DocumentRenderer>,
    clock: Clock,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("invoices", &self.invoices.len())
            .field("view", &self.view)
            .field("search", &self.search)
            .field("preview", &self.preview)
            .field("id_policy", &self.ids.policy())
            .field("renderer", &self.renderer.name())
            .finish_non_exhaustive()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(&WorkspaceConfig::default())
    }
}

impl Workspace {
    pub fn new(config: &WorkspaceConfig) -> Self {
        let invoices = if config.seed_samples {
            sample_invoices()
        } else {
            Vec::new()
        };
        Self::with_invoices(config.id_policy, invoices)
    }

    /// Start from an explicit invoice list.
    pub fn with_invoices(policy: IdPolicy, invoices: Vec<Invoice>) -> Self {
        let mut ids = IdAllocator::new(policy);
        invoices.iter().for_each(|invoice| ids.observe(invoice.id));
        let clock: Clock = local_today;
        info!(
            count = invoices.len(),
            policy = %policy,
            "Workspace initialized"
        );
        Self {
            invoices,
            draft: Draft::new(clock()),
            view: View::Dashboard,
            search: String::new(),
            preview: None,
            ids,
            renderer: Box::new(PdfStub),
            clock,
        }
    }

    pub fn with_renderer(mut self, renderer: impl DocumentRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Replace the date source; the current draft is reset against it.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.draft = Draft::new(clock());
        self
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn invoice(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Invoices matching the current search term, in list order.
    pub fn filtered(&self) -> Vec<&Invoice> {
        search(&self.search, &self.invoices)
    }

    pub fn stats(&self) -> InvoiceStats {
        InvoiceStats::from_invoices(&self.invoices)
    }

    /// Live total of the form.
    pub fn draft_total(&self) -> Decimal {
        self.draft.total()
    }

    pub fn preview_id(&self) -> Option<InvoiceId> {
        self.preview
    }

    /// Preview of the selected invoice, if the overlay is open.
    pub fn preview(&self) -> Option<InvoicePreview> {
        self.preview
            .and_then(|id| self.invoice(id))
            .map(InvoicePreview::build)
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Apply one command.
    ///
    /// On error nothing has changed.
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<WorkspaceEvent>, WorkspaceError> {
        if command.is_draft_edit() {
            debug!(?command, "Draft edit");
        }
        match command {
            Command::ShowDashboard => Ok(self.show(View::Dashboard)),
            Command::NewInvoice => Ok(self.new_invoice()),
            Command::EditInvoice(id) => self.edit_invoice(id),
            Command::CancelForm => Ok(self.cancel_form()),
            Command::SetField(field, value) => Ok(self.set_field(field, value)),
            Command::SetStatus(status) => {
                self.draft.set_status(status);
                Ok(vec![WorkspaceEvent::DraftChanged])
            }
            Command::AddItem => {
                self.draft.add_item();
                Ok(vec![WorkspaceEvent::DraftChanged])
            }
            Command::RemoveItem(index) => Ok(if self.draft.remove_item(index) {
                vec![WorkspaceEvent::DraftChanged]
            } else {
                Vec::new()
            }),
            Command::UpdateItem {
                index,
                field,
                value,
            } => Ok(self.update_item(index, field, value)),
            Command::SubmitForm => self.submit(),
            Command::DeleteInvoice(id) => self.delete(id),
            Command::SetSearch(term) => Ok(self.set_search(term)),
            Command::OpenPreview(id) => self.open_preview(id),
            Command::ClosePreview => Ok(self.close_preview()),
            Command::RequestDocument(id) => self.request_document(id),
        }
    }

    fn show(&mut self, view: View) -> Vec<WorkspaceEvent> {
        if self.view == view {
            return Vec::new();
        }
        debug!(from = ?self.view, to = ?view, "View changed");
        self.view = view;
        vec![WorkspaceEvent::ViewChanged(view)]
    }

    fn reset_draft(&mut self) -> WorkspaceEvent {
        let today = self.today();
        self.draft.reset(today);
        WorkspaceEvent::DraftReset
    }

    fn new_invoice(&mut self) -> Vec<WorkspaceEvent> {
        let mut events = vec![self.reset_draft()];
        events.extend(self.show(View::Create(FormMode::New)));
        events
    }

    fn edit_invoice(&mut self, id: InvoiceId) -> Result<Vec<WorkspaceEvent>, WorkspaceError> {
        let invoice = self.invoice(id).ok_or(WorkspaceError::UnknownInvoice(id))?;
        self.draft = Draft::from_invoice(invoice);
        let mut events = vec![WorkspaceEvent::DraftChanged];
        events.extend(self.show(View::Create(FormMode::Editing(id))));
        Ok(events)
    }

    fn cancel_form(&mut self) -> Vec<WorkspaceEvent> {
        let mut events = vec![self.reset_draft()];
        events.extend(self.show(View::Dashboard));
        events
    }

    fn set_field(&mut self, field: DraftField, value: String) -> Vec<WorkspaceEvent> {
        self.draft.set_field(field, value);
        vec![WorkspaceEvent::DraftChanged]
    }

    fn update_item(&mut self, index: usize, field: ItemField, value: String) -> Vec<WorkspaceEvent> {
        match self.draft.update_item(index, field, value) {
            ItemEdit::Applied => vec![WorkspaceEvent::DraftChanged],
            ItemEdit::Flagged => vec![
                WorkspaceEvent::DraftChanged,
                WorkspaceEvent::ItemFlagged { index, field },
            ],
            ItemEdit::OutOfRange => Vec::new(),
        }
    }

    fn submit(&mut self) -> Result<Vec<WorkspaceEvent>, WorkspaceError> {
        let View::Create(mode) = self.view else {
            return Err(WorkspaceError::FormClosed);
        };

        let valid = self.draft.validate().inspect_err(|err| {
            warn!(error = %err, "Invoice submit rejected");
        })?;

        let event = match mode {
            FormMode::Editing(id) => {
                let slot = self
                    .invoices
                    .iter_mut()
                    .find(|invoice| invoice.id == id)
                    .ok_or(WorkspaceError::UnknownInvoice(id))?;
                *slot = valid.into_invoice(id);
                info!(%id, total = %slot.total(), "Invoice updated");
                WorkspaceEvent::InvoiceUpdated(id)
            }
            FormMode::New => {
                let id = self.ids.allocate(&self.invoices)?;
                let invoice = valid.into_invoice(id);
                info!(%id, client = %invoice.client_name, total = %invoice.total(), "Invoice created");
                self.invoices.push(invoice);
                WorkspaceEvent::InvoiceCreated(id)
            }
        };

        let mut events = vec![event, self.reset_draft()];
        events.extend(self.show(View::Dashboard));
        Ok(events)
    }

    fn delete(&mut self, id: InvoiceId) -> Result<Vec<WorkspaceEvent>, WorkspaceError> {
        let position = self
            .invoices
            .iter()
            .position(|invoice| invoice.id == id)
            .ok_or(WorkspaceError::UnknownInvoice(id))?;
        self.invoices.remove(position);
        info!(%id, remaining = self.invoices.len(), "Invoice deleted");

        let mut events = vec![WorkspaceEvent::InvoiceDeleted(id)];
        if self.preview == Some(id) {
            events.extend(self.close_preview());
        }
        if self.view.editing() == Some(id) {
            // The draft stays and would now submit as a new invoice.
            events.extend(self.show(View::Create(FormMode::New)));
        }
        Ok(events)
    }

    fn set_search(&mut self, term: String) -> Vec<WorkspaceEvent> {
        if self.search == term {
            return Vec::new();
        }
        debug!(term = %term, "Search changed");
        self.search = term;
        vec![WorkspaceEvent::SearchChanged]
    }

    fn open_preview(&mut self, id: InvoiceId) -> Result<Vec<WorkspaceEvent>, WorkspaceError> {
        if self.invoice(id).is_none() {
            return Err(WorkspaceError::UnknownInvoice(id));
        }
        debug!(%id, "Preview opened");
        self.preview = Some(id);
        Ok(vec![WorkspaceEvent::PreviewOpened(id)])
    }

    fn close_preview(&mut self) -> Vec<WorkspaceEvent> {
        match self.preview.take() {
            Some(_) => vec![WorkspaceEvent::PreviewClosed],
            None => Vec::new(),
        }
    }

    fn request_document(&self, id: InvoiceId) -> Result<Vec<WorkspaceEvent>, WorkspaceError> {
        let invoice = self.invoice(id).ok_or(WorkspaceError::UnknownInvoice(id))?;
        let request = RenderRequest::new(invoice);
        debug!(%id, total = %request.total, renderer = self.renderer.name(), "Rendering document");

        match self.renderer.render(&request) {
            Ok(document) => {
                info!(%id, file = %document.file_name, bytes = document.bytes.len(), "Document rendered");
                Ok(vec![WorkspaceEvent::DocumentReady {
                    id,
                    file_name: document.file_name,
                }])
            }
            Err(err) if err.is_unavailable() => Ok(vec![WorkspaceEvent::DocumentUnavailable(id)]),
            Err(err) => {
                warn!(%id, error = %err, "Document rendering failed");
                Err(err.into())
            }
        }
    }
}
