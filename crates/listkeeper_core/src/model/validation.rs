//! Name validation rules for lists and items.
//!
//! # Responsibility
//! - Check candidate names against uniqueness and length rules.
//!
//! # Invariants
//! - Validation is pure: no logging, no mutation.
//! - Inputs are expected to be trimmed by the caller.
//! - Length is counted in Unicode scalar values, not bytes.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum list name length (inclusive).
pub const LIST_NAME_MIN_CHARS: usize = 2;
/// Maximum list name length (inclusive).
pub const LIST_NAME_MAX_CHARS: usize = 99;
/// Minimum item name length (inclusive).
pub const ITEM_NAME_MIN_CHARS: usize = 1;
/// Maximum item name length (inclusive).
pub const ITEM_NAME_MAX_CHARS: usize = 100;

/// What kind of entity a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    List,
    Item,
}

impl NameKind {
    fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Item => "Item",
        }
    }
}

/// Rejection reasons for a candidate list or item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidationError {
    /// Another list already uses this exact name.
    DuplicateName,
    /// Name length falls outside the allowed inclusive range.
    InvalidLength {
        kind: NameKind,
        actual: usize,
        min: usize,
        max: usize,
    },
}

impl Display for NameValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName => write!(f, "You already have a list with that name."),
            Self::InvalidLength { kind, min, max, .. } => write!(
                f,
                "{} name must be between {min} and {max} characters.",
                kind.label()
            ),
        }
    }
}

impl Error for NameValidationError {}

/// Validates a list name against length bounds and the names already in use.
///
/// The duplicate check runs first, so an exact match is reported as
/// `DuplicateName` even when its length is also out of range.
pub fn validate_list_name<'a>(
    candidate: &str,
    existing_names: impl IntoIterator<Item = &'a str>,
) -> Result<(), NameValidationError> {
    if existing_names.into_iter().any(|name| name == candidate) {
        return Err(NameValidationError::DuplicateName);
    }
    check_length(
        NameKind::List,
        candidate,
        LIST_NAME_MIN_CHARS,
        LIST_NAME_MAX_CHARS,
    )
}

/// Validates an item name against length bounds.
pub fn validate_item_name(candidate: &str) -> Result<(), NameValidationError> {
    check_length(
        NameKind::Item,
        candidate,
        ITEM_NAME_MIN_CHARS,
        ITEM_NAME_MAX_CHARS,
    )
}

fn check_length(
    kind: NameKind,
    candidate: &str,
    min: usize,
    max: usize,
) -> Result<(), NameValidationError> {
    let actual = candidate.chars().count();
    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(NameValidationError::InvalidLength {
            kind,
            actual,
            min,
            max,
        })
    }
}
