//! bank-console
//!
//! Routes a path or an action to a view of the banking API and prints the
//! rendered screen. Logs go to stderr, screens to stdout.

mod cli;

use anyhow::{Context, Result};
use bank_auth::{FileTokenStore, MemoryTokenStore, Session};
use bank_client::ApiClient;
use bank_core::models::{
    AdditionCreate, BankCreate, DepositAccountCreate, EnterpriseCreate, LoanAccountCreate,
    LoginForm, ProfileUpdate, Registration, TransferCreate, WithdrawalCreate,
};
use bank_core::AppConfig;
use bank_views::views::{
    AccountsView, AdditionsView, BankListView, DepositCreateView, EnterpriseCreateView,
    LoanApproveView, LoanCreateView, LoanTransactionsView, LoginView, ProfileView,
    RegistrationView, TransferDetailView, TransfersView, WithdrawalsView,
};
use bank_views::{Screen, View};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{
    AccountCommand, AdditionCommand, BankCommand, Cli, Command, DepositCommand,
    EnterpriseCommand, LoanCommand, ProfileCommand, TransferCommand, WithdrawalCommand,
};

/// Initialize tracing/logging
fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "bank_console={0},bank_views={0},bank_client={0},bank_auth={0},bank_core={0},reqwest=warn",
            log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_config(path: Option<&str>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to read configuration from {}", path))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };
    Ok(config)
}

/// Runs the owning view of a command and returns what it renders
async fn run(client: &ApiClient, command: Command) -> Result<Screen> {
    let screen = match command {
        Command::Open { path } => bank_views::open(client, &path).await,

        Command::Login { username, password } => {
            let mut view = LoginView::new();
            view.submit(client, LoginForm::new(username, password)).await;
            view.render()
        }

        Command::Logout => {
            client.logout()?;
            info!("Session cleared");
            Screen::new("Выход").notice(Some("Сессия завершена"))
        }

        Command::Register(args) => {
            let registration = Registration {
                name: args.name,
                passport_number: args.passport_number,
                phone_number: args.phone_number,
                email: args.email,
                password: args.password,
                role: args.role,
                is_foreign: args.foreign,
            };
            let mut view = RegistrationView::new();
            view.submit(client, registration).await;
            view.render()
        }

        Command::Profile(command) => {
            let mut view = ProfileView::new();
            view.load(client).await;
            match command {
                ProfileCommand::Update {
                    name,
                    passport_number,
                    email,
                } => {
                    let body = ProfileUpdate {
                        name,
                        passport_number,
                        email,
                    };
                    view.update(client, body).await;
                }
                ProfileCommand::Delete => {
                    view.delete(client).await;
                }
            }
            view.render()
        }

        Command::Account(command) => {
            let mut view = AccountsView::new();
            view.load(client).await;
            match command {
                AccountCommand::Create { bank_id } => {
                    view.create(client, &bank_id).await;
                }
                AccountCommand::SetStatus { account_id, status } => {
                    view.set_status(client, &account_id, status).await;
                }
            }
            view.render()
        }

        Command::Addition(AdditionCommand::Create {
            account_id,
            amount,
            source,
        }) => {
            let mut view = AdditionsView::new(Some(&account_id));
            view.load(client).await;
            view.create(client, AdditionCreate { amount, source }).await;
            view.render()
        }

        Command::Withdrawal(WithdrawalCommand::Create {
            account_id,
            amount,
            source,
        }) => {
            let mut view = WithdrawalsView::new(Some(&account_id));
            view.load(client).await;
            view.create(client, WithdrawalCreate { amount, source }).await;
            view.render()
        }

        Command::Transfer(TransferCommand::Create {
            account_id,
            to_account_id,
            amount,
        }) => {
            let mut view = TransfersView::new(Some(&account_id));
            view.load(client).await;
            view.create(
                client,
                TransferCreate {
                    amount,
                    to_account_id,
                },
            )
            .await;
            view.render()
        }

        Command::Transfer(TransferCommand::Reverse { transfer_id }) => {
            let mut view = TransferDetailView::new(&transfer_id);
            view.load(client).await;
            view.reverse(client).await;
            view.render()
        }

        Command::Loan(LoanCommand::Create {
            bank_id,
            amount,
            term,
            rate,
        }) => {
            let mut view = LoanCreateView::new();
            view.create(client, LoanAccountCreate::new(bank_id, amount, term, rate))
                .await;
            view.render()
        }

        Command::Loan(LoanCommand::Pay {
            loan_account_id,
            amount,
        }) => {
            let mut view = LoanTransactionsView::new(&loan_account_id);
            view.load(client).await;
            view.pay(client, amount).await;
            view.render()
        }

        Command::Loan(LoanCommand::Approve { loan_account_id }) => {
            let mut view = LoanApproveView::new(&loan_account_id);
            view.load(client).await;
            view.approve(client).await;
            view.render()
        }

        Command::Deposit(DepositCommand::Create {
            bank_id,
            from_account_id,
            amount,
            rate,
        }) => {
            let mut view = DepositCreateView::new();
            view.create(
                client,
                DepositAccountCreate::new(bank_id, from_account_id, amount, rate),
            )
            .await;
            view.render()
        }

        Command::Enterprise(EnterpriseCommand::Create {
            name,
            enterprise_type,
            unp,
            bank_id,
            address,
        }) => {
            let body = EnterpriseCreate {
                name,
                enterprise_type,
                unp,
                bank_id,
                address,
            };
            let mut view = EnterpriseCreateView::new();
            view.create(client, body).await;
            view.render()
        }

        Command::Bank(BankCommand::Create { name, bic, address }) => {
            let mut view = BankListView::new();
            view.load(client).await;
            view.create(client, BankCreate { name, bic, address }).await;
            view.render()
        }
    };

    Ok(screen)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    init_tracing(&config.log.level);
    debug!(base_url = %config.api.base_url, "Configuration loaded");

    let session = if cli.ephemeral {
        Session::new(MemoryTokenStore::new())
    } else {
        Session::new(FileTokenStore::new(config.session.path.clone()))
    };
    let client = ApiClient::from_config(&config, session)?;

    let screen = run(&client, cli.command).await?;
    print!("{}", screen);

    if screen.error.is_some() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
