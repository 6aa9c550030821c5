//! Data model of the banking API
//!
//! Response types decode what the API returns and ignore fields they do
//! not know about. Request types carry their own client-side `check()`
//! which runs before anything is sent.

/// Declares an enumeration that travels as an upper-case string
///
/// Generates serde renames, `as_str`, `Display`, `FromStr`
/// (case-insensitive) and an `ALL` list.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ClientError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let upper = s.trim().to_uppercase();
                $(
                    if upper == $wire {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::error::ClientError::Validation(format!(
                    "unknown {} {:?}",
                    stringify!($name),
                    s
                )))
            }
        }
    };
}

pub mod account;
pub mod auth;
pub mod bank;
pub mod deposit;
pub mod enterprise;
pub mod loan;
pub mod operation;
pub mod timestamp;
pub mod transfer;
pub mod user;

pub use account::{Account, AccountCreate, AccountStatus, AccountType, AccountUpdate};
pub use auth::{AccessToken, LoginForm};
pub use bank::{Bank, BankCreate};
pub use deposit::{DepositAccount, DepositAccountCreate, DepositTerms, NewDepositAccount};
pub use enterprise::{Enterprise, EnterpriseCreate, EnterpriseSpecialist, EnterpriseType};
pub use loan::{
    Loan, LoanAccount, LoanAccountCreate, LoanStatus, LoanTerms, LoanTransaction,
    LoanTransactionCreate, LoanTransactionType, NewLoanAccount,
};
pub use operation::{Addition, AdditionCreate, AdditionSource, Withdrawal, WithdrawalCreate, WithdrawalSource};
pub use transfer::{Transfer, TransferCreate, TransferStatus};
pub use user::{Profile, ProfileUpdate, Registration, UserRole};
