/// Notifications a question view sends to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionEvent {
    /// The observable selection, or an "other" text value, changed through
    /// user interaction. Carries no payload; the host reads current state
    /// back through `QuestionView::selection`.
    SelectionChanged,
}
