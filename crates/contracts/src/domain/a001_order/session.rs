use super::upload::UploadOutcome;
use serde::{Deserialize, Serialize};

/// Sequence number handed out for each upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UploadTicket(pub u64);

/// What the file status line shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    Idle,
    Analyzing { file_name: String },
    Ready { file_name: String },
    Failed,
}

impl FileStatus {
    pub fn text(&self) -> String {
        match self {
            FileStatus::Idle => "No file selected".to_string(),
            FileStatus::Analyzing { file_name } => format!("Analyzing {}...", file_name),
            FileStatus::Ready { file_name } => format!("Ready: {}", file_name),
            FileStatus::Failed => "Error Analyzing File".to_string(),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, FileStatus::Analyzing { .. })
    }
}

/// Per-page-view order state shared by the upload flow and the price form.
///
/// Every upload takes a ticket; only the newest ticket may write back, so a
/// slow response for an earlier file can never overwrite a later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSession {
    page_count: u32,
    status: FileStatus,
    issued: u64,
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSession {
    pub fn new() -> Self {
        Self {
            page_count: 0,
            status: FileStatus::Idle,
            issued: 0,
        }
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn status(&self) -> &FileStatus {
        &self.status
    }

    /// Badge text, shown only once a document has been analyzed
    pub fn badge_text(&self) -> Option<String> {
        match self.status {
            FileStatus::Ready { .. } => Some(format!("Pages: {}", self.page_count)),
            _ => None,
        }
    }

    /// Start analyzing `file_name` and return the ticket its response must carry.
    pub fn begin_upload(&mut self, file_name: &str) -> UploadTicket {
        self.issued += 1;
        self.status = FileStatus::Analyzing {
            file_name: file_name.to_string(),
        };
        UploadTicket(self.issued)
    }

    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply a response. Returns `false` and leaves the session untouched when
    /// the ticket is stale.
    pub fn apply(&mut self, ticket: UploadTicket, outcome: &UploadOutcome) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match outcome {
            Ok(pages) => {
                let file_name = match &self.status {
                    FileStatus::Analyzing { file_name } => file_name.clone(),
                    _ => String::new(),
                };
                self.page_count = *pages;
                self.status = FileStatus::Ready { file_name };
            }
            Err(_) => {
                self.page_count = 0;
                self.status = FileStatus::Failed;
            }
        }
        true
    }

    /// Back to "no file": zero pages, idle status. Any in-flight upload is
    /// invalidated. Calling it repeatedly is harmless.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.page_count = 0;
        self.status = FileStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::pricing::{recompute, PricingInputs, PricingMode};
    use crate::shared::SyncError;

    fn per_page_total(session: &OrderSession) -> u64 {
        let inputs = PricingInputs {
            mode: PricingMode::PerPage,
            base_rate: 0.0,
            paper_value: "2".to_string(),
            side_value: "1".to_string(),
            copies: "3".to_string(),
            page_count: session.page_count(),
        };
        recompute(&inputs, &[], &[]).total
    }

    #[test]
    fn test_successful_upload() {
        let mut session = OrderSession::new();
        let ticket = session.begin_upload("thesis.pdf");
        assert!(session.status().is_busy());
        assert_eq!(session.status().text(), "Analyzing thesis.pdf...");
        assert_eq!(session.badge_text(), None);

        assert!(session.apply(ticket, &Ok(12)));
        assert_eq!(session.page_count(), 12);
        assert_eq!(session.status().text(), "Ready: thesis.pdf");
        assert_eq!(session.badge_text().as_deref(), Some("Pages: 12"));
    }

    #[test]
    fn test_failure_resets_pages() {
        let mut session = OrderSession::new();
        let first = session.begin_upload("a.pdf");
        session.apply(first, &Ok(8));

        let second = session.begin_upload("b.pdf");
        assert!(session.apply(second, &Err(SyncError::Application(None))));
        assert_eq!(session.page_count(), 0);
        assert_eq!(session.status(), &FileStatus::Failed);
        assert_eq!(session.badge_text(), None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut session = OrderSession::new();
        let slow = session.begin_upload("first.pdf");
        let fast = session.begin_upload("second.pdf");

        assert!(session.apply(fast, &Ok(3)));
        assert!(!session.apply(slow, &Ok(99)));
        assert_eq!(session.page_count(), 3);
        assert_eq!(session.status().text(), "Ready: second.pdf");
    }

    #[test]
    fn test_reset_after_upload() {
        let mut session = OrderSession::new();
        let ticket = session.begin_upload("notes.pdf");
        session.apply(ticket, &Ok(20));
        assert_eq!(per_page_total(&session), 120);

        session.reset();
        assert_eq!(session.page_count(), 0);
        assert_eq!(per_page_total(&session), 0);
        assert_eq!(session.status().text(), "No file selected");

        let snapshot = session.clone();
        session.reset();
        assert_eq!(session.page_count(), snapshot.page_count());
        assert_eq!(session.status(), snapshot.status());
    }

    #[test]
    fn test_reset_invalidates_in_flight_upload() {
        let mut session = OrderSession::new();
        let ticket = session.begin_upload("late.pdf");
        session.reset();
        assert!(!session.apply(ticket, &Ok(5)));
        assert_eq!(session.page_count(), 0);
        assert_eq!(session.status(), &FileStatus::Idle);
    }
}
