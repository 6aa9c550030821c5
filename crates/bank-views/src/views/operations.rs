//! Additions, withdrawals and transfers of one account

use async_trait::async_trait;
use bank_client::ApiClient;
use bank_core::models::{
    Addition, AdditionCreate, Transfer, TransferCreate, Withdrawal, WithdrawalCreate,
};
use bank_core::ClientError;

use super::{param_id, View};
use crate::cards::{cards, ToCard};
use crate::messages::MessageCatalog;
use crate::render::{Screen, NO_DATA_TEXT};
use crate::resource::{ListView, ResourceView};
use crate::state::LoadingFlag;

const INVALID_ACCOUNT: &str = "Неверный идентификатор счета";

fn title(prefix: &str, account_id: &Result<i64, ClientError>) -> String {
    match account_id {
        Ok(id) => format!("{} #{}", prefix, id),
        Err(_) => prefix.to_string(),
    }
}

pub struct AdditionsView {
    account_id: Result<i64, ClientError>,
    list: ListView<Addition>,
}

impl AdditionsView {
    pub fn new(raw_account_id: Option<&str>) -> Self {
        Self {
            account_id: param_id(raw_account_id, INVALID_ACCOUNT),
            list: ListView::new(
                MessageCatalog::new("Ошибка загрузки добавлений"),
                MessageCatalog::new("Ошибка создания добавления"),
            ),
        }
    }

    pub fn list(&self) -> &ListView<Addition> {
        &self.list
    }

    pub fn open_form(&mut self) {
        self.list.open_form();
    }

    pub async fn create(&mut self, client: &ApiClient, body: AdditionCreate) -> bool {
        self.list.open_form();
        match &self.account_id {
            Ok(id) => {
                self.list
                    .submit(
                        client.create_addition(*id, &body),
                        "Добавление успешно создано!",
                    )
                    .await
            }
            Err(error) => {
                self.list.reject(error.clone());
                false
            }
        }
    }
}

#[async_trait]
impl View for AdditionsView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.account_id {
            Ok(id) => {
                self.list.load(client.list_additions(*id)).await;
            }
            Err(error) => self.list.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        let screen = Screen::from_state(
            title("Добавления к счету", &self.account_id),
            self.list.state(),
            self.list.catalog(),
            "Нет добавлений для этого счета",
            |items| cards(items),
        )
        .notice(self.list.notice())
        .error(self.list.submit_error());

        if self.list.is_form_open() {
            screen.line("Новое добавление: введите сумму и источник")
        } else {
            screen
        }
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.list.loading_flag()
    }
}

pub struct WithdrawalsView {
    account_id: Result<i64, ClientError>,
    list: ListView<Withdrawal>,
}

impl WithdrawalsView {
    pub fn new(raw_account_id: Option<&str>) -> Self {
        Self {
            account_id: param_id(raw_account_id, INVALID_ACCOUNT),
            list: ListView::new(
                MessageCatalog::new("Ошибка загрузки выводов"),
                MessageCatalog::new("Ошибка создания вывода"),
            ),
        }
    }

    pub fn list(&self) -> &ListView<Withdrawal> {
        &self.list
    }

    pub async fn create(&mut self, client: &ApiClient, body: WithdrawalCreate) -> bool {
        self.list.open_form();
        match &self.account_id {
            Ok(id) => {
                self.list
                    .submit(client.create_withdrawal(*id, &body), "Вывод успешно создан!")
                    .await
            }
            Err(error) => {
                self.list.reject(error.clone());
                false
            }
        }
    }
}

#[async_trait]
impl View for WithdrawalsView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.account_id {
            Ok(id) => {
                self.list.load(client.list_withdrawals(*id)).await;
            }
            Err(error) => self.list.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        Screen::from_state(
            title("Выводы со счета", &self.account_id),
            self.list.state(),
            self.list.catalog(),
            "Нет выводов для этого счета",
            |items| cards(items),
        )
        .notice(self.list.notice())
        .error(self.list.submit_error())
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.list.loading_flag()
    }
}

pub struct TransfersView {
    account_id: Result<i64, ClientError>,
    list: ListView<Transfer>,
}

impl TransfersView {
    pub fn new(raw_account_id: Option<&str>) -> Self {
        Self {
            account_id: param_id(raw_account_id, INVALID_ACCOUNT),
            list: ListView::new(
                MessageCatalog::new("Ошибка загрузки переводов"),
                MessageCatalog::new("Ошибка создания перевода"),
            ),
        }
    }

    pub fn list(&self) -> &ListView<Transfer> {
        &self.list
    }

    pub async fn create(&mut self, client: &ApiClient, body: TransferCreate) -> bool {
        self.list.open_form();
        match &self.account_id {
            Ok(id) => {
                self.list
                    .submit(client.create_transfer(*id, &body), "Перевод успешно создан!")
                    .await
            }
            Err(error) => {
                self.list.reject(error.clone());
                false
            }
        }
    }
}

#[async_trait]
impl View for TransfersView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.account_id {
            Ok(id) => {
                self.list.load(client.list_transfers(*id)).await;
            }
            Err(error) => self.list.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        Screen::from_state(
            title("Переводы счета", &self.account_id),
            self.list.state(),
            self.list.catalog(),
            "Нет переводов для этого счета",
            |items| cards(items),
        )
        .notice(self.list.notice())
        .error(self.list.submit_error())
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.list.loading_flag()
    }
}

/// One transfer, for staff, with reversal
pub struct TransferDetailView {
    transfer_id: Result<i64, ClientError>,
    transfer: ResourceView<Transfer>,
}

impl TransferDetailView {
    pub fn new(raw_id: &str) -> Self {
        Self {
            transfer_id: param_id(Some(raw_id), "Некорректный идентификатор перевода."),
            transfer: ResourceView::new(MessageCatalog::new(
                "Ошибка при получении данных о переводе",
            ))
            .with_action_catalog(MessageCatalog::new("Ошибка при отмене перевода")),
        }
    }

    pub fn transfer(&self) -> &ResourceView<Transfer> {
        &self.transfer
    }

    /// Reverse the transfer; only completed transfers can be reversed
    pub async fn reverse(&mut self, client: &ApiClient) -> bool {
        let id = match &self.transfer_id {
            Ok(id) => *id,
            Err(error) => {
                self.transfer.reject(error.clone());
                return false;
            }
        };

        if let Some(transfer) = self.transfer.data() {
            if !transfer.status.is_reversible() {
                self.transfer.reject(ClientError::Validation(
                    "Отменить можно только выполненный перевод".to_string(),
                ));
                return false;
            }
        }

        self.transfer
            .submit(client.reverse_transfer(id), "Перевод успешно отменён!")
            .await
    }
}

#[async_trait]
impl View for TransferDetailView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.transfer_id {
            Ok(id) => {
                self.transfer.load(client.get_transfer(*id)).await;
            }
            Err(error) => self.transfer.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        let title = match &self.transfer_id {
            Ok(id) => format!("Детали перевода #{}", id),
            Err(_) => "Детали перевода".to_string(),
        };
        Screen::from_state(
            title,
            self.transfer.state(),
            self.transfer.catalog(),
            NO_DATA_TEXT,
            |transfer| vec![transfer.to_card()],
        )
        .notice(self.transfer.notice())
        .error(self.transfer.action_error())
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.transfer.loading_flag()
    }
}
