use async_trait::async_trait;
use bank_client::ApiClient;
use bank_core::models::{DepositAccount, DepositAccountCreate};
use bank_core::ClientError;

use super::{param_id, View};
use crate::cards::ToCard;
use crate::messages::MessageCatalog;
use crate::render::{Screen, NO_DATA_TEXT};
use crate::resource::{FormView, ResourceView};
use crate::state::LoadingFlag;

/// `/deposit_accounts/new`
pub struct DepositCreateView {
    form: FormView<DepositAccount>,
}

impl DepositCreateView {
    pub fn new() -> Self {
        Self {
            form: FormView::new(MessageCatalog::new("Ошибка при создании счета")),
        }
    }

    pub fn form(&self) -> &FormView<DepositAccount> {
        &self.form
    }

    pub async fn create(&mut self, client: &ApiClient, body: DepositAccountCreate) -> bool {
        self.form
            .submit(
                client.create_deposit_account(&body),
                "Депозитный счет успешно создан!",
            )
            .await
    }
}

impl Default for DepositCreateView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for DepositCreateView {
    async fn load(&mut self, _client: &ApiClient) {}

    fn render(&self) -> Screen {
        let screen = Screen::new("Создать депозитный счет")
            .notice(self.form.notice())
            .error(self.form.error());

        match self.form.created() {
            Some(deposit) => screen
                .card(deposit.to_card())
                .line(format!("Депозитный счет: /deposit_accounts/{}", deposit.id)),
            None => screen.line("Поля: ID банка, исходный счет, сумма, процентная ставка"),
        }
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.form.loading_flag()
    }
}

/// `/deposit_accounts/{id}`
pub struct DepositView {
    deposit_account_id: Result<i64, ClientError>,
    deposit: ResourceView<DepositAccount>,
}

impl DepositView {
    pub fn new(raw_id: &str) -> Self {
        Self {
            deposit_account_id: param_id(
                Some(raw_id),
                "Некорректный идентификатор депозитного счета.",
            ),
            deposit: ResourceView::new(MessageCatalog::new("Ошибка загрузки данных")),
        }
    }
}

#[async_trait]
impl View for DepositView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.deposit_account_id {
            Ok(id) => {
                self.deposit.load(client.get_deposit_account(*id)).await;
            }
            Err(error) => self.deposit.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        let title = match &self.deposit_account_id {
            Ok(id) => format!("Депозитный счет #{}", id),
            Err(_) => "Депозитный счет".to_string(),
        };
        Screen::from_state(
            title,
            self.deposit.state(),
            self.deposit.catalog(),
            NO_DATA_TEXT,
            |deposit| vec![deposit.to_card()],
        )
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.deposit.loading_flag()
    }
}
