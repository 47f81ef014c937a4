/// Normalized outcome of one fetch.
///
/// Inert data: construction and accessors never fail. `Failure` always
/// carries a human-readable message and may carry stale data, though the
/// repository always leaves that slot empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult<T> {
    Success { data: Option<T> },
    Failure { data: Option<T>, message: String },
}

impl<T> FetchResult<T> {
    pub fn success(data: Option<T>) -> Self {
        FetchResult::Success { data }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        FetchResult::Failure {
            data: None,
            message: message.into(),
        }
    }

    pub fn failure_with_data(data: Option<T>, message: impl Into<String>) -> Self {
        FetchResult::Failure {
            data,
            message: message.into(),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchResult::Success { data } | FetchResult::Failure { data, .. } => data.as_ref(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FetchResult::Success { .. } => None,
            FetchResult::Failure { message, .. } => Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchResult::Failure { .. })
    }
}
