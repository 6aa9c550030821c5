use bank_auth::{MemoryTokenStore, Session};
use bank_client::ApiClient;
use bank_core::models::{AdditionCreate, AdditionSource, TransferCreate};
use bank_views::views::{
    AccountDetailView, AdditionsView, LoanTransactionsView, LoginView, ProfileView,
    StaffAccountsView, TransferDetailView, TransfersView,
};
use bank_views::{open, View, ViewState};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(
        &server.uri(),
        Session::new(MemoryTokenStore::with_token("t0k")),
        None,
    )
    .unwrap()
}

fn addition_json(id: i64, amount: f64) -> serde_json::Value {
    json!({
        "id": id,
        "amount": amount,
        "source": "CASH",
        "created_at": "2024-05-02T08:30:00.654321"
    })
}

fn transfer_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "from_account_id": 5,
        "to_account_id": 8,
        "amount": "25.00",
        "status": status,
        "created_at": "2024-05-02T08:30:00Z"
    })
}

#[tokio::test]
async fn test_bank_list_renders_one_card() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/banks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "A",
            "bic": "X",
            "address": "Y",
            "created_at": "2025-03-01T12:00:00.123456",
            "updated_at": "2025-03-01T12:00:00.123456"
        }])))
        .mount(&server)
        .await;

    let screen = open(&client(&server), "/banks").await;

    assert_eq!(screen.card_titles(), vec!["A"]);
    assert_eq!(screen.cards[0].value("Создан"), Some("01.03.2025 12:00"));
    assert!(screen.error.is_none());
    assert!(!screen.loading);
}

#[tokio::test]
async fn test_addition_is_appended_and_form_closes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/accounts/additions/"))
        .and(query_param("account_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([addition_json(3, 20.0)])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/accounts/additions/"))
        .and(query_param("account_id", "5"))
        .and(body_json(json!({"amount": 100.0, "source": "CASH"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(addition_json(9, 100.0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut view = AdditionsView::new(Some("5"));
    view.load(&client).await;
    view.open_form();
    assert!(view.list().is_form_open());

    let created = view
        .create(
            &client,
            AdditionCreate {
                amount: dec!(100),
                source: AdditionSource::Cash,
            },
        )
        .await;

    assert!(created);
    let ids: Vec<i64> = view.list().items().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 9]);
    assert!(!view.list().is_form_open());

    let screen = view.render();
    assert_eq!(screen.notice.as_deref(), Some("Добавление успешно создано!"));
    assert_eq!(screen.cards.len(), 2);
}

#[tokio::test]
async fn test_missing_account_renders_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/accounts/42"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Account not found"})),
        )
        .mount(&server)
        .await;

    let screen = open(&client(&server), "/profile/accounts/42").await;

    assert_eq!(screen.error.as_deref(), Some("Счет не найден."));
    assert!(screen.cards.is_empty());
    assert!(screen.to_string().contains("Счет не найден"));
}

#[tokio::test]
async fn test_invalid_ids_make_no_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let client = client(&server);

    let screen = open(&client, "/profile/accounts/abc").await;
    assert_eq!(
        screen.error.as_deref(),
        Some("Некорректный идентификатор счета.")
    );

    let screen = open(&client, "/additions?account_id=0").await;
    assert_eq!(screen.error.as_deref(), Some("Неверный идентификатор счета"));

    let screen = open(&client, "/transfers").await;
    assert_eq!(screen.error.as_deref(), Some("Неверный идентификатор счета"));

    let screen = open(&client, "/loans/-4").await;
    assert_eq!(
        screen.error.as_deref(),
        Some("Некорректный идентификатор кредита.")
    );

    let screen = open(&client, "/staff/enterprises/1.5").await;
    assert_eq!(screen.error.as_deref(), Some("Некорректный ID предприятия"));

    let mut staff = StaffAccountsView::new(Some("x"));
    staff.load(&client).await;
    assert!(matches!(staff.list().state(), ViewState::Failed(_)));

    let mut transfers = TransfersView::new(Some("nope"));
    let sent = transfers
        .create(
            &client,
            TransferCreate {
                amount: dec!(10),
                to_account_id: 8,
            },
        )
        .await;
    assert!(!sent);
    assert_eq!(
        transfers.list().submit_error().as_deref(),
        Some("Неверный идентификатор счета")
    );
}

#[tokio::test]
async fn test_failed_transfer_keeps_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/accounts/transfers/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([transfer_json(1, "COMPLETED")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/accounts/transfers/"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"detail": "Insufficient funds"})),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let mut view = TransfersView::new(Some("5"));
    view.load(&client).await;
    let before = view.list().state().clone();

    let sent = view
        .create(
            &client,
            TransferCreate {
                amount: dec!(1000),
                to_account_id: 8,
            },
        )
        .await;

    assert!(!sent);
    assert_eq!(view.list().state(), &before);
    assert!(view.list().is_form_open());

    let screen = view.render();
    assert_eq!(screen.error.as_deref(), Some("Insufficient funds"));
    assert_eq!(screen.cards.len(), 1);
    assert!(screen.notice.is_none());
}

#[tokio::test]
async fn test_failed_submit_without_detail_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/accounts/additions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/accounts/additions/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = client(&server);
    let mut view = AdditionsView::new(Some("5"));
    view.load(&client).await;
    assert_eq!(view.list().state(), &ViewState::Empty);

    view.create(
        &client,
        AdditionCreate {
            amount: dec!(5),
            source: AdditionSource::Other,
        },
    )
    .await;

    assert_eq!(view.list().state(), &ViewState::Empty);
    assert_eq!(
        view.list().submit_error().as_deref(),
        Some("Ошибка создания добавления")
    );
    assert!(view
        .render()
        .to_string()
        .contains("Нет добавлений для этого счета"));
}

#[tokio::test]
async fn test_loading_flag_cleared_after_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/accounts/7"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut view = AccountDetailView::new("7");
    let flag = view.loading_flag();
    assert!(view.render().loading);

    view.load(&client(&server)).await;

    assert!(!flag.is_raised());
    let screen = view.render();
    assert!(!screen.loading);
    assert_eq!(screen.error.as_deref(), Some("Внутренняя ошибка сервера."));
}

#[tokio::test]
async fn test_transfer_reversal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transfers/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transfer_json(11, "COMPLETED")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/transfers/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transfer_json(11, "CANCELLED")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut view = TransferDetailView::new("11");
    view.load(&client).await;

    assert!(view.reverse(&client).await);
    let screen = view.render();
    assert_eq!(screen.notice.as_deref(), Some("Перевод успешно отменён!"));
    assert_eq!(screen.cards[0].value("Статус"), Some("Отменён"));

    // already cancelled: rejected locally, the mock expects exactly one POST
    assert!(!view.reverse(&client).await);
    assert_eq!(
        view.render().error.as_deref(),
        Some("Отменить можно только выполненный перевод")
    );
}

#[tokio::test]
async fn test_loan_payment_rejects_bad_amount() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut view = LoanTransactionsView::new("3");
    assert!(!view.pay(&client(&server), dec!(0)).await);
    assert_eq!(
        view.list().submit_error().as_deref(),
        Some("Введите корректную сумму.")
    );
}

#[tokio::test]
async fn test_login_override_and_profile_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "Ivan",
            "passport_number": "MP1234567",
            "phone_number": "375291112233",
            "email": "ivan@example.com",
            "role": "CLIENT",
            "is_active": true,
            "is_foreign": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client(&server);

    let mut login = LoginView::new();
    let form = bank_core::models::LoginForm::new("375291112233", "wrong");
    assert!(!login.submit(&client, form).await);
    assert_eq!(
        login.render().error.as_deref(),
        Some("Неверный номер телефона или пароль")
    );

    let mut profile = ProfileView::new();
    profile.load(&client).await;
    assert_eq!(profile.render().card_titles(), vec!["Ivan"]);

    assert!(profile.delete(&client).await);
    let screen = profile.render();
    assert_eq!(screen.notice.as_deref(), Some("Профиль успешно удален!"));
    assert!(screen.cards.is_empty());
    assert!(!client.session().is_authenticated().unwrap());
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let server = MockServer::start().await;
    let screen = open(&client(&server), "/staff/accounts/5/delete").await;
    assert_eq!(screen.title, "404 - Страница не найдена");
}

#[tokio::test]
async fn test_staff_accounts_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/staff/accounts/"))
        .and(query_param("user_id", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server);

    let screen = open(&client, "/staff/accounts").await;
    assert_eq!(screen.error.as_deref(), Some("Не указан ID пользователя"));

    let screen = open(&client, "/staff/accounts?user_id=0").await;
    assert_eq!(
        screen.error.as_deref(),
        Some("ID пользователя должен быть положительным числом")
    );

    let screen = open(&client, "/staff/accounts?user_id=%31%32").await;
    assert!(screen.error.is_none());
    assert!(screen.to_string().contains("У пользователя нет активных счетов"));
}
