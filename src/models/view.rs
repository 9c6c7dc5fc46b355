/// Which of the two top-level screens is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Question list.
    #[default]
    List,
    /// New question form.
    Form,
}

impl ViewMode {
    pub fn title(self) -> &'static str {
        match self {
            ViewMode::List => "View Questions",
            ViewMode::Form => "New Question",
        }
    }
}
