//! Command-line interface

use bank_core::models::{AccountStatus, AdditionSource, EnterpriseType, UserRole, WithdrawalSource};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(name = "bank-console")]
#[command(about = "Console client for the banking REST API", version)]
pub struct Cli {
    /// Keep the session in memory instead of the session file
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Configuration file to use instead of config/default and config/$RUN_MODE
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open a screen by path, e.g. `/profile/accounts/42`
    Open { path: String },

    /// Log in and store the bearer token
    Login {
        /// Phone number
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored token
    Logout,

    /// Create a user
    Register(RegisterArgs),

    #[command(subcommand)]
    Profile(ProfileCommand),

    #[command(subcommand)]
    Account(AccountCommand),

    #[command(subcommand)]
    Addition(AdditionCommand),

    #[command(subcommand)]
    Withdrawal(WithdrawalCommand),

    #[command(subcommand)]
    Transfer(TransferCommand),

    #[command(subcommand)]
    Loan(LoanCommand),

    #[command(subcommand)]
    Deposit(DepositCommand),

    #[command(subcommand)]
    Enterprise(EnterpriseCommand),

    #[command(subcommand)]
    Bank(BankCommand),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub passport_number: String,
    #[arg(long)]
    pub phone_number: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, default_value = "CLIENT")]
    pub role: UserRole,
    /// Register as a foreign citizen
    #[arg(long)]
    pub foreign: bool,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Change name, passport number and e-mail
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        passport_number: String,
        #[arg(long)]
        email: String,
    },
    /// Delete the profile and log out
    Delete,
}

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Open an account in a bank
    Create {
        #[arg(long)]
        bank_id: String,
    },
    /// Change the status of an account
    SetStatus {
        account_id: String,
        #[arg(long)]
        status: AccountStatus,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdditionCommand {
    Create {
        #[arg(long)]
        account_id: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value = "CASH")]
        source: AdditionSource,
    },
}

#[derive(Debug, Subcommand)]
pub enum WithdrawalCommand {
    Create {
        #[arg(long)]
        account_id: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value = "CASH")]
        source: WithdrawalSource,
    },
}

#[derive(Debug, Subcommand)]
pub enum TransferCommand {
    Create {
        /// Account the money leaves
        #[arg(long)]
        account_id: String,
        #[arg(long)]
        to_account_id: i64,
        #[arg(long)]
        amount: Decimal,
    },
    /// Reverse a completed transfer (staff)
    Reverse { transfer_id: String },
}

#[derive(Debug, Subcommand)]
pub enum LoanCommand {
    /// Apply for a loan
    Create {
        #[arg(long)]
        bank_id: i64,
        #[arg(long)]
        amount: Decimal,
        /// Term in months: 3, 6, 12, 24, 36 or 48
        #[arg(long)]
        term: u32,
        /// Interest rate, percent
        #[arg(long)]
        rate: Decimal,
    },
    /// Repay part of a loan
    Pay {
        loan_account_id: String,
        #[arg(long)]
        amount: Decimal,
    },
    /// Approve a pending loan (staff)
    Approve { loan_account_id: String },
}

#[derive(Debug, Subcommand)]
pub enum DepositCommand {
    Create {
        #[arg(long)]
        bank_id: i64,
        /// Account that funds the deposit
        #[arg(long)]
        from_account_id: i64,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        rate: Decimal,
    },
}

#[derive(Debug, Subcommand)]
pub enum EnterpriseCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        enterprise_type: EnterpriseType,
        #[arg(long)]
        unp: String,
        #[arg(long)]
        bank_id: i64,
        #[arg(long)]
        address: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum BankCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        bic: String,
        #[arg(long)]
        address: String,
    },
}
