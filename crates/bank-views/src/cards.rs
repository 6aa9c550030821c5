//! Card layout for every API entity

use bank_core::models::{
    Account, AccountStatus, AccountType, Addition, AdditionSource, Bank, DepositAccount,
    Enterprise, EnterpriseSpecialist, LoanAccount, LoanStatus, LoanTransaction,
    LoanTransactionType, Profile, Transfer, TransferStatus, Withdrawal, WithdrawalSource,
};
use chrono::{DateTime, Utc};

use crate::render::Card;

/// Renders an entity as a [`Card`]
pub trait ToCard {
    fn to_card(&self) -> Card;
}

pub fn cards<T: ToCard>(items: &[T]) -> Vec<Card> {
    items.iter().map(ToCard::to_card).collect()
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y %H:%M").to_string()
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Да"
    } else {
        "Нет"
    }
}

pub fn account_status_label(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "АКТИВЕН",
        AccountStatus::Blocked => "ЗАБЛОКИРОВАН",
        AccountStatus::Frozen => "ЗАМОРОЖЕН",
        AccountStatus::OnConsideration => "НА РАССМОТРЕНИИ",
        AccountStatus::Cancelled => "ЗАКРЫТ",
    }
}

pub fn account_type_label(account_type: AccountType) -> &'static str {
    match account_type {
        AccountType::Salary => "Зарплатный",
        AccountType::Deposit => "Депозитный",
        AccountType::Settlement => "Расчётный",
        AccountType::Loan => "Кредитный",
        AccountType::Enterprise => "Корпоративный",
    }
}

pub fn addition_source_label(source: AdditionSource) -> &'static str {
    match source {
        AdditionSource::BankTransfer => "Банковский перевод",
        AdditionSource::CardPayment => "Карта",
        AdditionSource::Cash => "Наличные",
        AdditionSource::Crypto => "Криптовалюта",
        AdditionSource::Other => "Другое",
    }
}

pub fn withdrawal_source_label(source: WithdrawalSource) -> &'static str {
    match source {
        WithdrawalSource::CardPayment => "Карта",
        WithdrawalSource::Cash => "Наличные",
        WithdrawalSource::Crypto => "Криптовалюта",
        WithdrawalSource::Other => "Другое",
    }
}

pub fn transfer_status_label(status: TransferStatus) -> &'static str {
    match status {
        TransferStatus::Pending => "В обработке",
        TransferStatus::Completed => "Выполнен",
        TransferStatus::Cancelled => "Отменён",
    }
}

pub fn loan_status_label(status: LoanStatus) -> &'static str {
    match status {
        LoanStatus::Pending => "На рассмотрении",
        LoanStatus::Active => "Активен",
        LoanStatus::Rejected => "Отклонён",
        LoanStatus::Completed => "Погашен",
    }
}

impl ToCard for Bank {
    fn to_card(&self) -> Card {
        Card::new(&self.name)
            .field("ID", self.id)
            .field("БИК", &self.bic)
            .field("Адрес", &self.address)
            .field("Создан", format_date(&self.created_at))
            .field("Обновлен", format_date(&self.updated_at))
    }
}

impl ToCard for Account {
    fn to_card(&self) -> Card {
        let mut card = Card::new(format!("Счет #{}", self.id))
            .field("Баланс", self.balance)
            .field("Статус", account_status_label(self.status));
        if let Some(account_type) = self.account_type {
            card = card.field("Тип счета", account_type_label(account_type));
        }
        card.field("Банк ID", self.bank_id)
            .field("Пользователь ID", self.user_id)
            .field("Дата создания", format_date(&self.created_at))
            .field("Дата обновления", format_date(&self.updated_at))
    }
}

impl ToCard for Addition {
    fn to_card(&self) -> Card {
        Card::new(format!("Добавление #{}", self.id))
            .field("Сумма", self.amount)
            .field("Источник", addition_source_label(self.source))
            .field("Создан", format_date(&self.created_at))
    }
}

impl ToCard for Withdrawal {
    fn to_card(&self) -> Card {
        Card::new(format!("Вывод #{}", self.id))
            .field("Сумма", self.amount)
            .field("Источник", withdrawal_source_label(self.source))
            .field("Создан", format_date(&self.created_at))
    }
}

impl ToCard for Transfer {
    fn to_card(&self) -> Card {
        let mut card = Card::new(format!("Перевод #{}", self.id))
            .field("Со счета", self.from_account_id)
            .field("На счет", self.to_account_id)
            .field("Сумма", self.amount)
            .field("Статус", transfer_status_label(self.status))
            .field("Создан", format_date(&self.created_at));
        if let Some(updated_at) = &self.updated_at {
            card = card.field("Обновлён", format_date(updated_at));
        }
        card
    }
}

impl ToCard for LoanAccount {
    fn to_card(&self) -> Card {
        Card::new(format!("Кредитный счёт #{}", self.id))
            .field("Сумма кредита", self.loan.amount)
            .field("Срок", format!("{} мес.", self.loan.term_months))
            .field("Процентная ставка", format!("{}%", self.loan.interest_rate))
            .field("Статус", loan_status_label(self.loan.status))
            .field("Счёт", self.account_id)
            .field("Баланс", self.account.balance)
            .field("Дата создания", format_date(&self.loan.created_at))
    }
}

impl ToCard for LoanTransaction {
    fn to_card(&self) -> Card {
        let kind = match self.transaction_type {
            LoanTransactionType::Credit => "Кредит",
            LoanTransactionType::Payment => "Оплата",
        };
        Card::new(format!("Транзакция #{}", self.id))
            .field("Тип", kind)
            .field("Сумма", self.amount)
            .field("Дата", format_date(&self.created_at))
    }
}

impl ToCard for DepositAccount {
    fn to_card(&self) -> Card {
        Card::new(format!("Депозитный счет #{}", self.id))
            .field("Процентная ставка", format!("{}%", self.interest_rate))
            .field("Исходный счет ID", self.from_account_id)
            .field("ID счета", self.account.id)
            .field("Баланс", self.account.balance)
            .field("Статус", account_status_label(self.account.status))
            .field("Дата создания", format_date(&self.account.created_at))
    }
}

impl ToCard for Enterprise {
    fn to_card(&self) -> Card {
        let mut card = Card::new(&self.name)
            .field("ID", self.id)
            .field("Тип", self.enterprise_type)
            .field("УНП", &self.unp)
            .field("ID банка", self.bank_id)
            .field("Адрес", &self.address);
        if let Some(account) = &self.account {
            card = card
                .field("ID счета", account.id)
                .field("Баланс", account.balance);
        }
        card
    }
}

impl ToCard for Profile {
    fn to_card(&self) -> Card {
        Card::new(&self.name)
            .field("ID", self.id)
            .field("Номер паспорта", &self.passport_number)
            .field("Телефон", &self.phone_number)
            .field("Email", &self.email)
            .field("Роль", self.role)
            .field("Активен", yes_no(self.is_active))
            .field("Иностранный", yes_no(self.is_foreign))
    }
}

impl ToCard for EnterpriseSpecialist {
    fn to_card(&self) -> Card {
        self.user
            .to_card()
            .field("Предприятие", &self.enterprise.name)
            .field("УНП", &self.enterprise.unp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn account() -> Account {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        Account {
            id: 42,
            user_id: 1,
            bank_id: 3,
            balance: dec!(150.50),
            status: AccountStatus::OnConsideration,
            account_type: None,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_account_card() {
        let card = account().to_card();
        assert_eq!(card.title, "Счет #42");
        assert_eq!(card.value("Баланс"), Some("150.50"));
        assert_eq!(card.value("Статус"), Some("НА РАССМОТРЕНИИ"));
        assert_eq!(card.value("Тип счета"), None);
        assert_eq!(card.value("Дата создания"), Some("01.05.2024 10:00"));
    }

    #[test]
    fn test_typed_account_card() {
        let mut account = account();
        account.account_type = Some(AccountType::Settlement);
        assert_eq!(account.to_card().value("Тип счета"), Some("Расчётный"));
    }
}
