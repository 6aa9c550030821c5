//! Plain-text screens

use std::fmt;

use crate::messages::MessageCatalog;
use crate::state::ViewState;

pub const LOADING_TEXT: &str = "Загрузка...";
pub const NO_DATA_TEXT: &str = "Нет данных для отображения";

/// One titled block of `label: value` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub fields: Vec<(String, String)>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: &str, value: impl fmt::Display) -> Self {
        self.fields.push((label.to_string(), value.to_string()));
        self
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Everything a view shows at one moment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub loading: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub empty: Option<String>,
    pub cards: Vec<Card>,
    pub lines: Vec<String>,
}

impl Screen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Screen for a fetched resource
    ///
    /// `Ready` data is turned into cards with `cards`; other states become
    /// the loading line, the resolved error or the empty message.
    pub fn from_state<T, F>(
        title: impl Into<String>,
        state: &ViewState<T>,
        catalog: &MessageCatalog,
        empty_text: &str,
        cards: F,
    ) -> Self
    where
        F: FnOnce(&T) -> Vec<Card>,
    {
        let mut screen = Screen::new(title);
        match state {
            ViewState::Loading => screen.loading = true,
            ViewState::Failed(error) => screen.error = Some(catalog.resolve(error)),
            ViewState::Empty => screen.empty = Some(empty_text.to_string()),
            ViewState::Ready(data) => screen.cards = cards(data),
        }
        screen
    }

    pub fn card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn notice(mut self, notice: Option<&str>) -> Self {
        if notice.is_some() {
            self.notice = notice.map(str::to_string);
        }
        self
    }

    /// Shows `error`, keeping an earlier error if `error` is `None`
    pub fn error(mut self, error: Option<String>) -> Self {
        if error.is_some() {
            self.error = error;
        }
        self
    }

    pub fn card_titles(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.title.as_str()).collect()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;

        if self.loading {
            writeln!(f, "{}", LOADING_TEXT)?;
        }
        if let Some(notice) = &self.notice {
            writeln!(f, "{}", notice)?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "Ошибка: {}", error)?;
        }
        if let Some(empty) = &self.empty {
            writeln!(f, "{}", empty)?;
        }
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }

        for card in &self.cards {
            writeln!(f)?;
            writeln!(f, "[{}]", card.title)?;
            for (label, value) in &card.fields {
                writeln!(f, "  {}: {}", label, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_core::ClientError;

    #[test]
    fn test_display_layout() {
        let screen = Screen::new("Банки")
            .notice(Some("Банк успешно создан!"))
            .card(Card::new("A").field("БИК", "AAAABY2X").field("Адрес", "Minsk"));

        let text = screen.to_string();
        assert!(text.starts_with("Банки\n=====\n"));
        assert!(text.contains("Банк успешно создан!"));
        assert!(text.contains("[A]\n  БИК: AAAABY2X\n  Адрес: Minsk\n"));
    }

    #[test]
    fn test_from_state() {
        let catalog = MessageCatalog::new("Ошибка загрузки данных");

        let loading: ViewState<Vec<i32>> = ViewState::Loading;
        let screen = Screen::from_state("x", &loading, &catalog, NO_DATA_TEXT, |_| Vec::new());
        assert!(screen.loading);
        assert!(screen.to_string().contains(LOADING_TEXT));

        let failed: ViewState<Vec<i32>> = ViewState::Failed(ClientError::Server {
            status: 500,
            detail: None,
        });
        let screen = Screen::from_state("x", &failed, &catalog, NO_DATA_TEXT, |_| Vec::new());
        assert_eq!(screen.error.as_deref(), Some("Ошибка загрузки данных"));
        assert!(screen.cards.is_empty());

        let empty: ViewState<Vec<i32>> = ViewState::Empty;
        let screen = Screen::from_state("x", &empty, &catalog, NO_DATA_TEXT, |_| Vec::new());
        assert_eq!(screen.empty.as_deref(), Some(NO_DATA_TEXT));
    }

    #[test]
    fn test_card_lookup() {
        let card = Card::new("Счет #1").field("Баланс", "10.50");
        assert_eq!(card.value("Баланс"), Some("10.50"));
        assert_eq!(card.value("Статус"), None);
    }
}
