#[derive(Debug, Clone, thiserror::Error)]
#[error("{reason}")]
pub struct TemplateError {
    reason: Reason,
}

/// Why a pattern was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Reason {
    #[error(".format must be last")]
    FormatNotLast,
    #[error(":variable cannot follow *glob")]
    VariableAfterGlob,
    #[error("multiple *glob not allowed")]
    MultipleGlobs,
    #[error("capture name can not be empty")]
    EmptyName,
    #[error("query string can not appear in a template")]
    QueryString,
}

impl TemplateError {
    pub(crate) fn new(reason: Reason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }
}
