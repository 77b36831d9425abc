//! Request validation.
//!
//! Raw client input is checked here before anything touches the store or the
//! provider. Every violated rule is collected so the caller sees them all at
//! once.

use database::HistoryFilter;

use crate::error::{Result, ServiceError};

/// Minimum prompt length in characters, after trimming.
pub const PROMPT_MIN_CHARS: usize = 10;
/// Maximum prompt length in characters, after trimming.
pub const PROMPT_MAX_CHARS: usize = 5000;
/// Page used when none is given.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when none is given.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest allowed page size.
pub const MAX_LIMIT: u32 = 50;

pub const PROMPT_REQUIRED: &str = "Prompt is required";
pub const PROMPT_LENGTH: &str = "Prompt must be between 10 and 5000 characters";
pub const LANGUAGE_REQUIRED: &str = "Language is required";
pub const USER_ID_INTEGER: &str = "User ID must be an integer";
pub const PAGE_POSITIVE: &str = "Page must be a positive integer";
pub const PAGE_TOO_LARGE: &str = "Page must not exceed 4294967295";
pub const LIMIT_RANGE: &str = "Limit must be between 1 and 50";

/// A generation request as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub language: String,
    /// Raw user ID text; `None` when the client sent none.
    pub user_id: Option<String>,
}

impl GenerationRequest {
    /// Request without a user.
    pub fn new(prompt: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            language: language.into(),
            user_id: None,
        }
    }

    /// Attach a user ID.
    pub fn with_user(mut self, user_id: impl ToString) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }
}

/// A generation request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGeneration {
    /// Trimmed prompt.
    pub prompt: String,
    /// Trimmed language name.
    pub language: String,
    pub user_id: Option<i64>,
}

/// Check a generation request.
pub fn validate_generation(request: &GenerationRequest) -> Result<ValidGeneration> {
    let mut errors = Vec::new();

    let prompt = request.prompt.trim();
    let prompt_chars = prompt.chars().count();
    if prompt_chars == 0 {
        errors.push(PROMPT_REQUIRED.to_string());
    } else if !(PROMPT_MIN_CHARS..=PROMPT_MAX_CHARS).contains(&prompt_chars) {
        errors.push(PROMPT_LENGTH.to_string());
    }

    let language = request.language.trim();
    if language.is_empty() {
        errors.push(LANGUAGE_REQUIRED.to_string());
    }

    let user_id = match request.user_id.as_deref() {
        None => None,
        Some(raw) => match parse_integer(raw) {
            Some(id) => Some(id),
            None => {
                errors.push(USER_ID_INTEGER.to_string());
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    Ok(ValidGeneration {
        prompt: prompt.to_string(),
        language: language.to_string(),
        user_id,
    })
}

/// History query parameters as received from a client.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub language: Option<String>,
    pub user_id: Option<String>,
}

/// Validated paging and filter criteria for one history read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCriteria {
    pub page: u32,
    pub limit: u32,
    pub filter: HistoryFilter,
}

impl Default for HistoryCriteria {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            filter: HistoryFilter::all(),
        }
    }
}

impl HistoryCriteria {
    /// Rows to skip before this page.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

/// Turn raw history parameters into query criteria.
pub fn history_criteria(query: &HistoryQuery) -> Result<HistoryCriteria> {
    let mut errors = Vec::new();
    let mut criteria = HistoryCriteria::default();

    if let Some(raw) = present(&query.page) {
        match parse_integer(raw) {
            Some(page) if page < 1 => errors.push(PAGE_POSITIVE.to_string()),
            Some(page) => match u32::try_from(page) {
                Ok(page) => criteria.page = page,
                Err(_) => errors.push(PAGE_TOO_LARGE.to_string()),
            },
            None if is_unsigned_digits(raw) => errors.push(PAGE_TOO_LARGE.to_string()),
            None => errors.push(PAGE_POSITIVE.to_string()),
        }
    }

    if let Some(raw) = present(&query.limit) {
        match parse_integer(raw).and_then(|limit| u32::try_from(limit).ok()) {
            Some(limit) if (1..=MAX_LIMIT).contains(&limit) => criteria.limit = limit,
            _ => errors.push(LIMIT_RANGE.to_string()),
        }
    }

    if let Some(raw) = present(&query.user_id) {
        match parse_integer(raw) {
            Some(id) => criteria.filter.user_id = Some(id),
            None => errors.push(USER_ID_INTEGER.to_string()),
        }
    }

    if let Some(language) = present(&query.language) {
        criteria.filter.language = Some(language.to_string());
    }

    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    Ok(criteria)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

// Digits that overflowed `i64` are still a positive integer.
fn is_unsigned_digits(raw: &str) -> bool {
    let raw = raw.trim().strip_prefix('+').unwrap_or(raw.trim());
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) && raw.bytes().any(|b| b != b'0')
}
