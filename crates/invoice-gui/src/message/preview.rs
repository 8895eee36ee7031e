//! Preview overlay messages.

#[derive(Debug, Clone)]
pub enum PreviewMessage {
    /// Download PDF for the previewed invoice
    Download,
    Close,
}
