//! Public bank directory

use async_trait::async_trait;
use bank_client::ApiClient;
use bank_core::models::{Bank, BankCreate};
use bank_core::ClientError;

use super::{param_id, View};
use crate::cards::{cards, ToCard};
use crate::messages::MessageCatalog;
use crate::render::{Screen, NO_DATA_TEXT};
use crate::resource::{ListView, ResourceView};
use crate::state::LoadingFlag;

const LOAD_ERROR: &str = "Ошибка загрузки данных";

pub struct BankListView {
    list: ListView<Bank>,
}

impl BankListView {
    pub fn new() -> Self {
        Self {
            list: ListView::new(
                MessageCatalog::new(LOAD_ERROR),
                MessageCatalog::new("Ошибка создания банка"),
            ),
        }
    }

    pub fn list(&self) -> &ListView<Bank> {
        &self.list
    }

    pub async fn create(&mut self, client: &ApiClient, body: BankCreate) -> bool {
        self.list.open_form();
        self.list
            .submit(client.create_bank(&body), "Банк успешно создан!")
            .await
    }
}

impl Default for BankListView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for BankListView {
    async fn load(&mut self, client: &ApiClient) {
        self.list.load(client.list_banks()).await;
    }

    fn render(&self) -> Screen {
        Screen::from_state(
            "Банки",
            self.list.state(),
            self.list.catalog(),
            NO_DATA_TEXT,
            |banks| cards(banks),
        )
        .notice(self.list.notice())
        .error(self.list.submit_error())
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.list.loading_flag()
    }
}

pub struct BankView {
    bank_id: Result<i64, ClientError>,
    bank: ResourceView<Bank>,
}

impl BankView {
    pub fn new(raw_id: &str) -> Self {
        Self {
            bank_id: param_id(Some(raw_id), "Некорректный идентификатор банка."),
            bank: ResourceView::new(MessageCatalog::new(LOAD_ERROR)),
        }
    }
}

#[async_trait]
impl View for BankView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.bank_id {
            Ok(id) => {
                self.bank.load(client.get_bank(*id)).await;
            }
            Err(error) => self.bank.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        Screen::from_state(
            "Банк",
            self.bank.state(),
            self.bank.catalog(),
            NO_DATA_TEXT,
            |bank| vec![bank.to_card()],
        )
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.bank.loading_flag()
    }
}
