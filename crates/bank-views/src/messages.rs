//! Error-to-text mapping for the rendered screens
//!
//! Every view owns a [`MessageCatalog`]: a fallback string plus optional
//! per-kind overrides. A failure is turned into text here and nowhere
//! else.

use bank_core::{ClientError, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    fallback: String,
    overrides: Vec<(ErrorKind, String)>,
}

impl MessageCatalog {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            overrides: Vec::new(),
        }
    }

    /// Fixed text for one error kind, shown even when the API sent a detail
    pub fn with(mut self, kind: ErrorKind, message: impl Into<String>) -> Self {
        self.overrides.retain(|(k, _)| *k != kind);
        self.overrides.push((kind, message.into()));
        self
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Text shown for `error`
    ///
    /// Order: validation message, kind override, server detail, fallback.
    pub fn resolve(&self, error: &ClientError) -> String {
        if let ClientError::Validation(message) = error {
            return message.clone();
        }

        let kind = error.kind();
        if let Some((_, message)) = self.overrides.iter().find(|(k, _)| *k == kind) {
            return message.clone();
        }

        match error.detail() {
            Some(detail) => detail.to_string(),
            None => self.fallback.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MessageCatalog {
        MessageCatalog::new("Ошибка загрузки данных счета.")
            .with(ErrorKind::NotFound, "Счет не найден.")
    }

    #[test]
    fn test_override_beats_detail() {
        let error = ClientError::NotFound {
            detail: Some("Account not found".to_string()),
        };
        assert_eq!(catalog().resolve(&error), "Счет не найден.");
    }

    #[test]
    fn test_detail_beats_fallback() {
        let error = ClientError::Conflict {
            detail: Some("Insufficient funds".to_string()),
        };
        assert_eq!(catalog().resolve(&error), "Insufficient funds");
    }

    #[test]
    fn test_fallback_without_detail() {
        let error = ClientError::Network("connection refused".to_string());
        assert_eq!(catalog().resolve(&error), "Ошибка загрузки данных счета.");
    }

    #[test]
    fn test_validation_shows_own_message() {
        let catalog = catalog().with(ErrorKind::Validation, "ignored");
        let error = ClientError::Validation("Некорректный идентификатор счета.".to_string());
        assert_eq!(catalog.resolve(&error), "Некорректный идентификатор счета.");
    }

    #[test]
    fn test_with_replaces_existing_override() {
        let catalog = catalog().with(ErrorKind::NotFound, "Нет такого счета");
        let error = ClientError::NotFound { detail: None };
        assert_eq!(catalog.resolve(&error), "Нет такого счета");
    }
}
