//! Login and registration forms

use async_trait::async_trait;
use bank_client::ApiClient;
use bank_core::models::{AccessToken, LoginForm, Profile, Registration};
use bank_core::ErrorKind;

use super::View;
use crate::cards::ToCard;
use crate::messages::MessageCatalog;
use crate::render::Screen;
use crate::resource::FormView;
use crate::state::LoadingFlag;

pub struct LoginView {
    form: FormView<AccessToken>,
}

impl LoginView {
    pub fn new() -> Self {
        let catalog = MessageCatalog::new("Непредвиденная ошибка при входе")
            .with(ErrorKind::Unauthorized, "Неверный номер телефона или пароль")
            .with(ErrorKind::NotFound, "Пользователь не найден");
        Self {
            form: FormView::new(catalog),
        }
    }

    pub fn form(&self) -> &FormView<AccessToken> {
        &self.form
    }

    /// Log in; the token lands in the client's session
    pub async fn submit(&mut self, client: &ApiClient, form: LoginForm) -> bool {
        self.form
            .submit(client.login(&form), "Вход выполнен успешно!")
            .await
    }
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for LoginView {
    async fn load(&mut self, _client: &ApiClient) {}

    fn render(&self) -> Screen {
        let screen = Screen::new("Вход")
            .notice(self.form.notice())
            .error(self.form.error());

        if self.form.created().is_some() {
            screen.line("Сессия сохранена")
        } else {
            screen.line("Поля: номер телефона, пароль")
        }
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.form.loading_flag()
    }
}

pub struct RegistrationView {
    form: FormView<Profile>,
}

impl RegistrationView {
    pub fn new() -> Self {
        let catalog = MessageCatalog::new("Ошибка при регистрации. Попробуйте позже.")
            .with(
                ErrorKind::Conflict,
                "Пользователь с таким номером уже существует.",
            );
        Self {
            form: FormView::new(catalog),
        }
    }

    pub fn form(&self) -> &FormView<Profile> {
        &self.form
    }

    pub async fn submit(&mut self, client: &ApiClient, registration: Registration) -> bool {
        self.form
            .submit(client.register(&registration), "Регистрация успешна!")
            .await
    }
}

impl Default for RegistrationView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for RegistrationView {
    async fn load(&mut self, _client: &ApiClient) {}

    fn render(&self) -> Screen {
        let screen = Screen::new("Регистрация")
            .notice(self.form.notice())
            .error(self.form.error());

        match self.form.created() {
            Some(profile) => screen.card(profile.to_card()),
            None => screen.line(
                "Поля: имя, номер паспорта, телефон, email, пароль, иностранный пользователь",
            ),
        }
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.form.loading_flag()
    }
}
