//! Loan application, loan detail, repayments and staff approval

use async_trait::async_trait;
use bank_client::ApiClient;
use bank_core::models::{LoanAccount, LoanAccountCreate, LoanTransaction, LoanTransactionCreate};
use bank_core::validation::LOAN_TERMS;
use bank_core::ClientError;
use rust_decimal::Decimal;

use super::{param_id, View};
use crate::cards::{cards, ToCard};
use crate::messages::MessageCatalog;
use crate::render::{Screen, NO_DATA_TEXT};
use crate::resource::{FormView, ListView, ResourceView};
use crate::state::LoadingFlag;

const INVALID_LOAN: &str = "Некорректный идентификатор кредита.";

/// `/loans/new`
pub struct LoanCreateView {
    form: FormView<LoanAccount>,
}

impl LoanCreateView {
    pub fn new() -> Self {
        Self {
            form: FormView::new(MessageCatalog::new("Ошибка создания кредита")),
        }
    }

    pub fn form(&self) -> &FormView<LoanAccount> {
        &self.form
    }

    pub async fn create(&mut self, client: &ApiClient, body: LoanAccountCreate) -> bool {
        self.form
            .submit(client.create_loan_account(&body), "Кредит успешно создан!")
            .await
    }
}

impl Default for LoanCreateView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for LoanCreateView {
    async fn load(&mut self, _client: &ApiClient) {}

    fn render(&self) -> Screen {
        let terms: Vec<String> = LOAN_TERMS.iter().map(u32::to_string).collect();
        let mut screen = Screen::new("Создание нового кредита")
            .notice(self.form.notice())
            .error(self.form.error());

        match self.form.created() {
            Some(loan_account) => {
                screen = screen
                    .card(loan_account.to_card())
                    .line(format!("Кредитный счёт: /loans/{}", loan_account.id));
            }
            None => {
                screen = screen
                    .line("Поля: ID банка, сумма кредита, срок, процентная ставка")
                    .line(format!("Срок (месяцев): {}", terms.join(", ")));
            }
        }
        screen
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.form.loading_flag()
    }
}

/// `/loans/{id}`
pub struct LoanView {
    loan_account_id: Result<i64, ClientError>,
    loan: ResourceView<LoanAccount>,
}

impl LoanView {
    pub fn new(raw_id: &str) -> Self {
        Self {
            loan_account_id: param_id(Some(raw_id), INVALID_LOAN),
            loan: ResourceView::new(MessageCatalog::new("Ошибка загрузки данных о кредите")),
        }
    }

    pub fn loan(&self) -> &ResourceView<LoanAccount> {
        &self.loan
    }
}

#[async_trait]
impl View for LoanView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.loan_account_id {
            Ok(id) => {
                self.loan.load(client.get_loan_account(*id)).await;
            }
            Err(error) => self.loan.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        let screen = Screen::from_state(
            "Детали кредита",
            self.loan.state(),
            self.loan.catalog(),
            NO_DATA_TEXT,
            |loan_account| vec![loan_account.to_card()],
        );

        match self.loan.data() {
            Some(loan_account) => screen.line(format!(
                "Транзакции: /loans/{}/transactions",
                loan_account.id
            )),
            None => screen,
        }
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.loan.loading_flag()
    }
}

/// `/loans/{id}/transactions`
pub struct LoanTransactionsView {
    loan_account_id: Result<i64, ClientError>,
    list: ListView<LoanTransaction>,
}

impl LoanTransactionsView {
    pub fn new(raw_id: &str) -> Self {
        Self {
            loan_account_id: param_id(Some(raw_id), INVALID_LOAN),
            list: ListView::new(
                MessageCatalog::new("Ошибка загрузки транзакций."),
                MessageCatalog::new("Ошибка создания транзакции."),
            ),
        }
    }

    pub fn list(&self) -> &ListView<LoanTransaction> {
        &self.list
    }

    /// Record a repayment
    pub async fn pay(&mut self, client: &ApiClient, amount: Decimal) -> bool {
        self.list.open_form();

        let id = match &self.loan_account_id {
            Ok(id) => *id,
            Err(error) => {
                self.list.reject(error.clone());
                return false;
            }
        };

        if amount <= Decimal::ZERO {
            self.list.reject(ClientError::Validation(
                "Введите корректную сумму.".to_string(),
            ));
            return false;
        }

        let body = LoanTransactionCreate { amount };
        self.list
            .submit(
                client.create_loan_transaction(id, &body),
                "Транзакция успешно создана!",
            )
            .await
    }
}

#[async_trait]
impl View for LoanTransactionsView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.loan_account_id {
            Ok(id) => {
                self.list.load(client.list_loan_transactions(*id)).await;
            }
            Err(error) => self.list.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        let title = match &self.loan_account_id {
            Ok(id) => format!("Транзакции кредита #{}", id),
            Err(_) => "Транзакции кредита".to_string(),
        };
        Screen::from_state(
            title,
            self.list.state(),
            self.list.catalog(),
            "Нет транзакций",
            |items| cards(items),
        )
        .notice(self.list.notice())
        .error(self.list.submit_error())
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.list.loading_flag()
    }
}

/// `/loans/{id}/approve`, for staff
pub struct LoanApproveView {
    loan_account_id: Result<i64, ClientError>,
    form: FormView<LoanAccount>,
}

impl LoanApproveView {
    pub fn new(raw_id: &str) -> Self {
        Self {
            loan_account_id: param_id(Some(raw_id), INVALID_LOAN),
            form: FormView::new(MessageCatalog::new("Ошибка при одобрении кредита")),
        }
    }

    pub fn form(&self) -> &FormView<LoanAccount> {
        &self.form
    }

    pub async fn approve(&mut self, client: &ApiClient) -> bool {
        match &self.loan_account_id {
            Ok(id) => {
                self.form
                    .submit(client.approve_loan(*id), "Кредит успешно одобрен!")
                    .await
            }
            Err(error) => {
                self.form.reject(error.clone());
                false
            }
        }
    }
}

#[async_trait]
impl View for LoanApproveView {
    async fn load(&mut self, _client: &ApiClient) {
        if let Err(error) = &self.loan_account_id {
            self.form.reject(error.clone());
        }
    }

    fn render(&self) -> Screen {
        let title = match &self.loan_account_id {
            Ok(id) => format!("Одобрение кредита #{}", id),
            Err(_) => "Одобрение кредита".to_string(),
        };
        let screen = Screen::new(title)
            .notice(self.form.notice())
            .error(self.form.error());

        match self.form.created() {
            Some(loan_account) => screen.card(loan_account.to_card()),
            None => screen,
        }
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.form.loading_flag()
    }
}
