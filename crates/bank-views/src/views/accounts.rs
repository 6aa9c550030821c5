//! Account list, account detail and the staff view of a user's accounts

use async_trait::async_trait;
use bank_client::ApiClient;
use bank_core::models::{Account, AccountCreate, AccountStatus};
use bank_core::{ClientError, ErrorKind};

use super::{param_id, View};
use crate::cards::{cards, ToCard};
use crate::messages::MessageCatalog;
use crate::render::{Screen, NO_DATA_TEXT};
use crate::resource::{ListView, ResourceView};
use crate::state::LoadingFlag;

/// Accounts of the logged-in user
pub struct AccountsView {
    list: ListView<Account>,
}

impl AccountsView {
    pub fn new() -> Self {
        Self {
            list: ListView::new(
                MessageCatalog::new("Ошибка загрузки счетов"),
                MessageCatalog::new("Ошибка создания счета"),
            ),
        }
    }

    pub fn list(&self) -> &ListView<Account> {
        &self.list
    }

    pub async fn create(&mut self, client: &ApiClient, bank_id: &str) -> bool {
        self.list
            .set_submit_catalog(MessageCatalog::new("Ошибка создания счета"));
        self.list.open_form();

        let bank_id = match param_id(Some(bank_id), "Введите корректный ID банка") {
            Ok(id) => id,
            Err(error) => {
                self.list.reject(error);
                return false;
            }
        };

        let body = AccountCreate { bank_id };
        self.list
            .submit(client.create_account(&body), "Счет успешно создан!")
            .await
    }

    pub async fn set_status(
        &mut self,
        client: &ApiClient,
        account_id: &str,
        status: AccountStatus,
    ) -> bool {
        self.list
            .set_submit_catalog(MessageCatalog::new("Ошибка обновления счета"));

        let account_id = match param_id(Some(account_id), "Неверный идентификатор счета") {
            Ok(id) => id,
            Err(error) => {
                self.list.reject(error);
                return false;
            }
        };

        self.list
            .submit(
                client.update_account_status(account_id, status),
                "Статус счета успешно обновлен!",
            )
            .await
    }
}

impl Default for AccountsView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for AccountsView {
    async fn load(&mut self, client: &ApiClient) {
        self.list.load(client.list_accounts()).await;
    }

    fn render(&self) -> Screen {
        Screen::from_state(
            "Счета",
            self.list.state(),
            self.list.catalog(),
            NO_DATA_TEXT,
            |accounts| cards(accounts),
        )
        .notice(self.list.notice())
        .error(self.list.submit_error())
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.list.loading_flag()
    }
}

/// One account with links to its operations
pub struct AccountDetailView {
    account_id: Result<i64, ClientError>,
    account: ResourceView<Account>,
}

impl AccountDetailView {
    pub fn new(raw_id: &str) -> Self {
        let catalog = MessageCatalog::new("Ошибка загрузки данных счета.")
            .with(ErrorKind::Unauthorized, "Неверный или просроченный токен.")
            .with(ErrorKind::Forbidden, "Учетная запись неактивна.")
            .with(ErrorKind::NotFound, "Счет не найден.")
            .with(ErrorKind::Server, "Внутренняя ошибка сервера.");

        Self {
            account_id: param_id(Some(raw_id), "Некорректный идентификатор счета."),
            account: ResourceView::new(catalog),
        }
    }

    pub fn account(&self) -> &ResourceView<Account> {
        &self.account
    }
}

#[async_trait]
impl View for AccountDetailView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.account_id {
            Ok(id) => {
                self.account.load(client.get_account(*id)).await;
            }
            Err(error) => self.account.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        let screen = Screen::from_state(
            "Информация о счёте",
            self.account.state(),
            self.account.catalog(),
            NO_DATA_TEXT,
            |account| vec![account.to_card()],
        );

        match self.account.data() {
            Some(account) => screen
                .line(format!("Добавления: /additions?account_id={}", account.id))
                .line(format!("Выводы: /withdrawals?account_id={}", account.id))
                .line(format!("Переводы: /transfers?account_id={}", account.id)),
            None => screen,
        }
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.account.loading_flag()
    }
}

/// Accounts of any user, for staff
pub struct StaffAccountsView {
    user_id: Result<i64, ClientError>,
    list: ListView<Account>,
}

impl StaffAccountsView {
    pub fn new(raw_user_id: Option<&str>) -> Self {
        Self {
            user_id: match raw_user_id.map(str::trim) {
                None | Some("") => Err(ClientError::Validation(
                    "Не указан ID пользователя".to_string(),
                )),
                Some(raw) => param_id(
                    Some(raw),
                    "ID пользователя должен быть положительным числом",
                ),
            },
            list: ListView::new(
                MessageCatalog::new("Не удалось загрузить счета"),
                MessageCatalog::new("Ошибка обновления счета"),
            ),
        }
    }

    pub fn list(&self) -> &ListView<Account> {
        &self.list
    }
}

#[async_trait]
impl View for StaffAccountsView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.user_id {
            Ok(id) => {
                self.list.load(client.list_user_accounts(*id)).await;
            }
            Err(error) => self.list.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        let title = match &self.user_id {
            Ok(id) => format!("Счета пользователя #{}", id),
            Err(_) => "Счета пользователя".to_string(),
        };
        Screen::from_state(
            title,
            self.list.state(),
            self.list.catalog(),
            "У пользователя нет активных счетов",
            |accounts| cards(accounts),
        )
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.list.loading_flag()
    }
}
