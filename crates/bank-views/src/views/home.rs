use async_trait::async_trait;
use bank_client::ApiClient;

use super::View;
use crate::render::Screen;
use crate::state::LoadingFlag;

#[derive(Debug, Default)]
pub struct HomeView;

#[async_trait]
impl View for HomeView {
    async fn load(&mut self, _client: &ApiClient) {}

    fn render(&self) -> Screen {
        Screen::new("Главная страница")
            .line("Добро пожаловать в систему управления банками!")
            .line("")
            .line("Банки: /banks")
            .line("Вход: /login")
            .line("Регистрация: /registration")
            .line("Профиль: /profile")
            .line("Счета: /profile/accounts")
    }

    fn loading_flag(&self) -> LoadingFlag {
        LoadingFlag::new()
    }
}

#[derive(Debug)]
pub struct NotFoundView {
    path: String,
}

impl NotFoundView {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

#[async_trait]
impl View for NotFoundView {
    async fn load(&mut self, _client: &ApiClient) {}

    fn render(&self) -> Screen {
        Screen::new("404 - Страница не найдена").line(format!("Путь: {}", self.path))
    }

    fn loading_flag(&self) -> LoadingFlag {
        LoadingFlag::new()
    }
}
