//! Path routing
//!
//! Maps a console path (`/profile/accounts/42`, `/additions?account_id=5`)
//! to a [`Route`]. Parameters are kept as raw strings; each view parses and
//! rejects them itself.

use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Banks,
    Bank { bank_id: String },
    Login,
    Registration,
    Profile,
    Accounts,
    Account { account_id: String },
    Additions { account_id: Option<String> },
    Withdrawals { account_id: Option<String> },
    Transfers { account_id: Option<String> },
    Transfer { transfer_id: String },
    LoanCreate,
    Loan { loan_account_id: String },
    LoanTransactions { loan_account_id: String },
    LoanApprove { loan_account_id: String },
    DepositCreate,
    Deposit { deposit_account_id: String },
    StaffAccounts { user_id: Option<String> },
    EnterpriseCreate,
    Enterprise { enterprise_id: String },
    SpecialistProfile,
    NotFound { path: String },
}

/// Percent-decode one query component (`+` is a space)
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn query_value(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode_component(k) == key)
        .map(|(_, v)| decode_component(v))
}

impl Route {
    pub fn parse(raw: &str) -> Route {
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let param = |key: &str| query_value(query, key);

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["banks"] => Route::Banks,
            ["banks", id] => Route::Bank {
                bank_id: id.to_string(),
            },
            ["login"] => Route::Login,
            ["registration"] => Route::Registration,
            ["profile"] => Route::Profile,
            ["profile", "accounts"] => Route::Accounts,
            ["profile", "accounts", id] => Route::Account {
                account_id: id.to_string(),
            },
            ["additions"] => Route::Additions {
                account_id: param("account_id"),
            },
            ["withdrawals"] => Route::Withdrawals {
                account_id: param("account_id"),
            },
            ["transfers"] => Route::Transfers {
                account_id: param("account_id"),
            },
            ["transfers", id] => Route::Transfer {
                transfer_id: id.to_string(),
            },
            ["loans", "new"] => Route::LoanCreate,
            ["loans", id] => Route::Loan {
                loan_account_id: id.to_string(),
            },
            ["loans", id, "transactions"] => Route::LoanTransactions {
                loan_account_id: id.to_string(),
            },
            ["loans", id, "approve"] => Route::LoanApprove {
                loan_account_id: id.to_string(),
            },
            ["deposit_accounts", "new"] => Route::DepositCreate,
            ["deposit_accounts", id] => Route::Deposit {
                deposit_account_id: id.to_string(),
            },
            ["staff", "accounts"] => Route::StaffAccounts {
                user_id: param("user_id"),
            },
            ["staff", "enterprises", "new"] => Route::EnterpriseCreate,
            ["staff", "enterprises", id] => Route::Enterprise {
                enterprise_id: id.to_string(),
            },
            ["enterprises", "specialists", "profile"] => Route::SpecialistProfile,
            _ => Route::NotFound {
                path: raw.to_string(),
            },
        };

        debug!(path = raw, route = ?route, "Routed");
        route
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn with_query(f: &mut fmt::Formatter<'_>, path: &str, key: &str, value: &Option<String>) -> fmt::Result {
            match value {
                Some(value) => write!(f, "{}?{}={}", path, key, urlencoding::encode(value)),
                None => f.write_str(path),
            }
        }

        match self {
            Route::Home => f.write_str("/"),
            Route::Banks => f.write_str("/banks"),
            Route::Bank { bank_id } => write!(f, "/banks/{}", bank_id),
            Route::Login => f.write_str("/login"),
            Route::Registration => f.write_str("/registration"),
            Route::Profile => f.write_str("/profile"),
            Route::Accounts => f.write_str("/profile/accounts"),
            Route::Account { account_id } => write!(f, "/profile/accounts/{}", account_id),
            Route::Additions { account_id } => with_query(f, "/additions", "account_id", account_id),
            Route::Withdrawals { account_id } => {
                with_query(f, "/withdrawals", "account_id", account_id)
            }
            Route::Transfers { account_id } => with_query(f, "/transfers", "account_id", account_id),
            Route::Transfer { transfer_id } => write!(f, "/transfers/{}", transfer_id),
            Route::LoanCreate => f.write_str("/loans/new"),
            Route::Loan { loan_account_id } => write!(f, "/loans/{}", loan_account_id),
            Route::LoanTransactions { loan_account_id } => {
                write!(f, "/loans/{}/transactions", loan_account_id)
            }
            Route::LoanApprove { loan_account_id } => write!(f, "/loans/{}/approve", loan_account_id),
            Route::DepositCreate => f.write_str("/deposit_accounts/new"),
            Route::Deposit { deposit_account_id } => {
                write!(f, "/deposit_accounts/{}", deposit_account_id)
            }
            Route::StaffAccounts { user_id } => with_query(f, "/staff/accounts", "user_id", user_id),
            Route::EnterpriseCreate => f.write_str("/staff/enterprises/new"),
            Route::Enterprise { enterprise_id } => write!(f, "/staff/enterprises/{}", enterprise_id),
            Route::SpecialistProfile => f.write_str("/enterprises/specialists/profile"),
            Route::NotFound { path } => f.write_str(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/banks"), Route::Banks);
        assert_eq!(Route::parse("/banks/"), Route::Banks);
        assert_eq!(Route::parse("/profile/accounts"), Route::Accounts);
        assert_eq!(Route::parse("/loans/new"), Route::LoanCreate);
        assert_eq!(Route::parse("/deposit_accounts/new"), Route::DepositCreate);
        assert_eq!(Route::parse("/staff/enterprises/new"), Route::EnterpriseCreate);
        assert_eq!(
            Route::parse("/enterprises/specialists/profile"),
            Route::SpecialistProfile
        );
    }

    #[test]
    fn test_path_params_stay_raw() {
        assert_eq!(
            Route::parse("/profile/accounts/abc"),
            Route::Account {
                account_id: "abc".to_string()
            }
        );
        assert_eq!(
            Route::parse("/loans/7/transactions"),
            Route::LoanTransactions {
                loan_account_id: "7".to_string()
            }
        );
        assert_eq!(
            Route::parse("/loans/7/approve"),
            Route::LoanApprove {
                loan_account_id: "7".to_string()
            }
        );
    }

    #[test]
    fn test_query_params() {
        assert_eq!(
            Route::parse("/additions?account_id=5"),
            Route::Additions {
                account_id: Some("5".to_string())
            }
        );
        assert_eq!(
            Route::parse("/transfers?foo=1&account_id=-3"),
            Route::Transfers {
                account_id: Some("-3".to_string())
            }
        );
        assert_eq!(
            Route::parse("/withdrawals"),
            Route::Withdrawals { account_id: None }
        );
        assert_eq!(
            Route::parse("/staff/accounts?user_id=12"),
            Route::StaffAccounts {
                user_id: Some("12".to_string())
            }
        );
    }

    #[test]
    fn test_query_params_are_percent_decoded() {
        assert_eq!(
            Route::parse("/staff/accounts?user_id=%31%32"),
            Route::StaffAccounts {
                user_id: Some("12".to_string())
            }
        );
        assert_eq!(
            Route::parse("/additions?account%5Fid=+7"),
            Route::Additions {
                account_id: Some(" 7".to_string())
            }
        );
        // malformed escapes stay as typed
        assert_eq!(
            Route::parse("/transfers?account_id=%ZZ"),
            Route::Transfers {
                account_id: Some("%ZZ".to_string())
            }
        );

        let route = Route::StaffAccounts {
            user_id: Some("a b".to_string()),
        };
        assert_eq!(route.to_string(), "/staff/accounts?user_id=a%20b");
        assert_eq!(Route::parse(&route.to_string()), route);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(
            Route::parse("/staff/accounts/5/delete"),
            Route::NotFound {
                path: "/staff/accounts/5/delete".to_string()
            }
        );
        assert!(matches!(Route::parse("/nope"), Route::NotFound { .. }));
    }

    #[test]
    fn test_display_reverses_parse() {
        for path in [
            "/",
            "/banks/3",
            "/profile/accounts/42",
            "/additions?account_id=5",
            "/loans/7/transactions",
            "/staff/accounts?user_id=12",
            "/enterprises/specialists/profile",
        ] {
            assert_eq!(Route::parse(path).to_string(), path);
        }
    }
}
