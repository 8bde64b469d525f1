use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;

/// Phase of the dialog's timed CSS transition.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// DOM measurements the shell takes when a modal open is requested.
///
/// The core only compares them; measuring is the shell's job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMetrics {
    pub content_height: u32,
    pub viewport_height: u32,
    pub scrollbar_width: u32,
}

impl PageMetrics {
    /// Whether hiding the page scrollbar while the modal is open would shift
    /// the layout and needs to be compensated for.
    pub fn needs_scrollbar_compensation(&self) -> bool {
        self.content_height > self.viewport_height
    }
}

/// State of the single tracked dialog.
///
/// Exactly one modal can be anywhere between Opening and Closing; the
/// surrounding page never stacks dialogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalState {
    pub phase: ModalPhase,
    /// Element id of the dialog being shown, kept until the closing
    /// animation finishes (the element keeps its `open` attribute that long).
    pub modal_id: Option<String>,
    /// Width reserved for the hidden page scrollbar, if any.
    pub scrollbar_compensation_px: Option<u32>,
    /// Handle of the running transition timer. A superseded transition's
    /// timer no longer matches and its late fire is ignored.
    pub animation_timer: Option<TimerId>,
}

impl ModalState {
    /// The document-level "modal is open" marker: set from the moment the
    /// opening animation starts until the closing animation ends.
    pub fn is_marked_open(&self) -> bool {
        !matches!(self.phase, ModalPhase::Closed)
    }

    pub fn is_opening(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, ModalPhase::Closing)
    }

    /// Outside clicks dismiss the dialog only while it is fully open.
    pub fn accepts_dismissal(&self) -> bool {
        matches!(self.phase, ModalPhase::Open)
    }
}
