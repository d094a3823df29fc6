use chrono::NaiveDate;
use contracts::domain::common::EntityId;
use contracts::usecases::u501_print_labels::LabelPrintRequest;
use thiserror::Error;

use super::selection::SelectionSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintPhase {
    /// Nothing selected
    Browsing,
    /// At least one product selected, no dialog open
    Selecting,
    /// Print dialog open
    Configuring,
    /// Print request in flight
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    #[error("印刷する商品を選択してください")]
    EmptySelection,
    #[error("PDFを生成中です。しばらくお待ちください")]
    AlreadySubmitting,
    #[error("印刷設定が開かれていません")]
    NotConfiguring,
}

/// Label selection plus the print dialog lifecycle.
///
/// The selection survives printing, cancelling and section switches; only the
/// products reload prunes it.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintWorkflow {
    selection: SelectionSet,
    phase: PrintPhase,
    /// The dialog was closed while its request was still pending.
    detached: bool,
}

impl Default for PrintWorkflow {
    fn default() -> Self {
        Self {
            selection: SelectionSet::default(),
            phase: PrintPhase::Browsing,
            detached: false,
        }
    }
}

impl PrintWorkflow {
    pub fn phase(&self) -> PrintPhase {
        self.phase
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    fn in_dialog(&self) -> bool {
        matches!(self.phase, PrintPhase::Configuring | PrintPhase::Submitting)
    }

    fn settle(&mut self) {
        self.phase = if self.selection.is_empty() {
            PrintPhase::Browsing
        } else {
            PrintPhase::Selecting
        };
    }

    pub fn toggle(&mut self, id: EntityId) -> bool {
        let selected = self.selection.toggle(id);
        if !self.in_dialog() {
            self.settle();
        }
        selected
    }

    /// Prune ids of products that are gone after a reload.
    pub fn retain_existing(&mut self, existing: &[EntityId]) -> usize {
        let dropped = self.selection.retain_existing(existing);
        if !self.in_dialog() {
            self.settle();
        }
        dropped
    }

    /// Open the print dialog. Rejected before any request when nothing is selected.
    pub fn begin_print(&mut self) -> Result<(), PrintError> {
        if self.phase == PrintPhase::Submitting {
            return Err(PrintError::AlreadySubmitting);
        }
        if self.selection.is_empty() {
            return Err(PrintError::EmptySelection);
        }
        self.phase = PrintPhase::Configuring;
        Ok(())
    }

    /// Build the print request and mark it in flight. A second submit while
    /// the first is pending is rejected.
    pub fn submit(
        &mut self,
        expiry_date: Option<NaiveDate>,
        label_setting_id: Option<EntityId>,
    ) -> Result<LabelPrintRequest, PrintError> {
        match self.phase {
            PrintPhase::Configuring => {}
            PrintPhase::Submitting => return Err(PrintError::AlreadySubmitting),
            PrintPhase::Browsing | PrintPhase::Selecting => return Err(PrintError::NotConfiguring),
        }
        if self.selection.is_empty() {
            return Err(PrintError::EmptySelection);
        }
        self.phase = PrintPhase::Submitting;
        Ok(LabelPrintRequest {
            product_ids: self.selection.ids(),
            expiry_date,
            label_setting_id,
        })
    }

    /// The PDF arrived; the dialog closes and the selection is kept.
    pub fn finish_ok(&mut self) {
        if self.phase == PrintPhase::Submitting {
            self.detached = false;
            self.settle();
        }
    }

    /// The request failed; the dialog stays open for a retry unless it was
    /// already closed.
    pub fn finish_err(&mut self) {
        if self.phase != PrintPhase::Submitting {
            return;
        }
        if std::mem::take(&mut self.detached) {
            self.settle();
        } else {
            self.phase = PrintPhase::Configuring;
        }
    }

    /// The dialog was closed without printing. A pending request keeps the
    /// workflow in `Submitting` until it completes, so no second one can start.
    pub fn cancel(&mut self) {
        match self.phase {
            PrintPhase::Submitting => self.detached = true,
            PrintPhase::Configuring => self.settle(),
            PrintPhase::Browsing | PrintPhase::Selecting => {}
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == PrintPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn selected(ids: &[EntityId]) -> PrintWorkflow {
        let mut wf = PrintWorkflow::default();
        for &id in ids {
            wf.toggle(id);
        }
        wf
    }

    #[test]
    fn test_toggle_moves_between_browsing_and_selecting() {
        let mut wf = PrintWorkflow::default();
        assert_eq!(wf.phase(), PrintPhase::Browsing);
        wf.toggle(3);
        assert_eq!(wf.phase(), PrintPhase::Selecting);
        wf.toggle(3);
        assert_eq!(wf.phase(), PrintPhase::Browsing);
    }

    #[test]
    fn test_empty_selection_cannot_open_dialog() {
        let mut wf = PrintWorkflow::default();
        assert_eq!(wf.begin_print(), Err(PrintError::EmptySelection));
        assert_eq!(wf.phase(), PrintPhase::Browsing);
        assert_eq!(
            PrintError::EmptySelection.to_string(),
            "印刷する商品を選択してください"
        );
    }

    #[test]
    fn test_print_keeps_selection() {
        let mut wf = selected(&[3, 7]);
        wf.begin_print().unwrap();
        assert_eq!(wf.phase(), PrintPhase::Configuring);

        let date = NaiveDate::from_ymd_opt(2025, 12, 1);
        let request = wf.submit(date, None).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"product_ids": [3, 7], "expiry_date": "2025-12-01"})
        );
        assert_eq!(wf.phase(), PrintPhase::Submitting);

        wf.finish_ok();
        assert_eq!(wf.phase(), PrintPhase::Selecting);
        assert_eq!(wf.selection().ids(), vec![3, 7]);
    }

    #[test]
    fn test_duplicate_submit_rejected() {
        let mut wf = selected(&[1]);
        wf.begin_print().unwrap();
        assert!(wf.submit(None, Some(5)).is_ok());
        assert_eq!(wf.submit(None, Some(5)), Err(PrintError::AlreadySubmitting));
        assert_eq!(wf.begin_print(), Err(PrintError::AlreadySubmitting));
    }

    #[test]
    fn test_failure_returns_to_dialog() {
        let mut wf = selected(&[1]);
        wf.begin_print().unwrap();
        wf.submit(None, None).unwrap();
        wf.finish_err();
        assert_eq!(wf.phase(), PrintPhase::Configuring);
        assert!(wf.submit(None, None).is_ok());
    }

    #[test]
    fn test_submit_requires_open_dialog() {
        let mut wf = selected(&[1]);
        assert_eq!(wf.submit(None, None), Err(PrintError::NotConfiguring));
    }

    #[test]
    fn test_cancel_and_toggles_inside_dialog() {
        let mut wf = selected(&[1]);
        wf.begin_print().unwrap();
        wf.toggle(1);
        assert_eq!(wf.phase(), PrintPhase::Configuring);
        assert_eq!(wf.submit(None, None), Err(PrintError::EmptySelection));
        wf.cancel();
        assert_eq!(wf.phase(), PrintPhase::Browsing);
        // Late completion after the dialog was closed changes nothing.
        wf.finish_ok();
        assert_eq!(wf.phase(), PrintPhase::Browsing);
    }

    #[test]
    fn test_closing_dialog_mid_request_blocks_a_second_print() {
        let mut wf = selected(&[3]);
        wf.begin_print().unwrap();
        wf.submit(None, None).unwrap();

        wf.cancel();
        assert_eq!(wf.phase(), PrintPhase::Submitting);
        assert_eq!(wf.begin_print(), Err(PrintError::AlreadySubmitting));

        wf.finish_ok();
        assert_eq!(wf.phase(), PrintPhase::Selecting);
        assert!(wf.begin_print().is_ok());
        assert!(wf.submit(None, None).is_ok());
        assert!(wf.is_submitting());
    }

    #[test]
    fn test_failure_after_dialog_closed_settles() {
        let mut wf = selected(&[3]);
        wf.begin_print().unwrap();
        wf.submit(None, None).unwrap();
        wf.cancel();
        wf.finish_err();
        assert_eq!(wf.phase(), PrintPhase::Selecting);

        // The next dialog failing keeps it open again.
        wf.begin_print().unwrap();
        wf.submit(None, None).unwrap();
        wf.finish_err();
        assert_eq!(wf.phase(), PrintPhase::Configuring);
    }

    #[test]
    fn test_prune_settles_phase() {
        let mut wf = selected(&[4]);
        assert_eq!(wf.retain_existing(&[1, 2]), 1);
        assert_eq!(wf.phase(), PrintPhase::Browsing);
    }
}
