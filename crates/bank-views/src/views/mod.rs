//! One view per console screen

mod accounts;
mod auth;
mod banks;
mod deposits;
mod enterprises;
mod home;
mod loans;
mod operations;
mod profile;

pub use accounts::{AccountDetailView, AccountsView, StaffAccountsView};
pub use auth::{LoginView, RegistrationView};
pub use banks::{BankListView, BankView};
pub use deposits::{DepositCreateView, DepositView};
pub use enterprises::{EnterpriseCreateView, EnterpriseView};
pub use home::{HomeView, NotFoundView};
pub use loans::{LoanApproveView, LoanCreateView, LoanTransactionsView, LoanView};
pub use operations::{AdditionsView, TransferDetailView, TransfersView, WithdrawalsView};
pub use profile::{ProfileView, SpecialistProfileView};

use async_trait::async_trait;
use bank_client::ApiClient;
use bank_core::validation::require_id;
use bank_core::ClientError;

use crate::render::Screen;
use crate::router::Route;
use crate::state::LoadingFlag;

/// A routed screen
#[async_trait]
pub trait View: Send {
    /// Fetch whatever the screen shows; views without data do nothing
    async fn load(&mut self, client: &ApiClient);

    fn render(&self) -> Screen;

    fn loading_flag(&self) -> LoadingFlag;
}

/// Parse an identifier parameter, reporting failure with `message`
pub(crate) fn param_id(raw: Option<&str>, message: &str) -> Result<i64, ClientError> {
    require_id(raw, "identifier").map_err(|_| ClientError::Validation(message.to_string()))
}

/// Builds the view for `route`
pub fn view_for(route: &Route) -> Box<dyn View> {
    match route {
        Route::Home => Box::new(HomeView),
        Route::Banks => Box::new(BankListView::new()),
        Route::Bank { bank_id } => Box::new(BankView::new(bank_id)),
        Route::Login => Box::new(LoginView::new()),
        Route::Registration => Box::new(RegistrationView::new()),
        Route::Profile => Box::new(ProfileView::new()),
        Route::Accounts => Box::new(AccountsView::new()),
        Route::Account { account_id } => Box::new(AccountDetailView::new(account_id)),
        Route::Additions { account_id } => Box::new(AdditionsView::new(account_id.as_deref())),
        Route::Withdrawals { account_id } => {
            Box::new(WithdrawalsView::new(account_id.as_deref()))
        }
        Route::Transfers { account_id } => Box::new(TransfersView::new(account_id.as_deref())),
        Route::Transfer { transfer_id } => Box::new(TransferDetailView::new(transfer_id)),
        Route::LoanCreate => Box::new(LoanCreateView::new()),
        Route::Loan { loan_account_id } => Box::new(LoanView::new(loan_account_id)),
        Route::LoanTransactions { loan_account_id } => {
            Box::new(LoanTransactionsView::new(loan_account_id))
        }
        Route::LoanApprove { loan_account_id } => Box::new(LoanApproveView::new(loan_account_id)),
        Route::DepositCreate => Box::new(DepositCreateView::new()),
        Route::Deposit { deposit_account_id } => Box::new(DepositView::new(deposit_account_id)),
        Route::StaffAccounts { user_id } => Box::new(StaffAccountsView::new(user_id.as_deref())),
        Route::EnterpriseCreate => Box::new(EnterpriseCreateView::new()),
        Route::Enterprise { enterprise_id } => Box::new(EnterpriseView::new(enterprise_id)),
        Route::SpecialistProfile => Box::new(SpecialistProfileView::new()),
        Route::NotFound { path } => Box::new(NotFoundView::new(path)),
    }
}

/// Route `path`, run its view and return what it renders
pub async fn open(client: &ApiClient, path: &str) -> Screen {
    let mut view = view_for(&Route::parse(path));
    view.load(client).await;
    view.render()
}
