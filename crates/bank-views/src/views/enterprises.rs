//! Enterprise registration and detail (staff)

use async_trait::async_trait;
use bank_client::ApiClient;
use bank_core::models::{Enterprise, EnterpriseCreate, EnterpriseType};
use bank_core::ClientError;

use super::{param_id, View};
use crate::cards::ToCard;
use crate::messages::MessageCatalog;
use crate::render::{Screen, NO_DATA_TEXT};
use crate::resource::{FormView, ResourceView};
use crate::state::LoadingFlag;

pub struct EnterpriseCreateView {
    form: FormView<Enterprise>,
}

impl EnterpriseCreateView {
    pub fn new() -> Self {
        Self {
            form: FormView::new(MessageCatalog::new("Ошибка при создании предприятия")),
        }
    }

    pub fn form(&self) -> &FormView<Enterprise> {
        &self.form
    }

    pub async fn create(&mut self, client: &ApiClient, body: EnterpriseCreate) -> bool {
        self.form
            .submit(client.create_enterprise(&body), "Предприятие успешно создано!")
            .await
    }
}

impl Default for EnterpriseCreateView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for EnterpriseCreateView {
    async fn load(&mut self, _client: &ApiClient) {}

    fn render(&self) -> Screen {
        let screen = Screen::new("Создать предприятие")
            .notice(self.form.notice())
            .error(self.form.error());

        match self.form.created() {
            Some(enterprise) => screen
                .card(enterprise.to_card())
                .line(format!("Предприятие: /staff/enterprises/{}", enterprise.id)),
            None => {
                let types: Vec<&str> = EnterpriseType::ALL.iter().map(|t| t.as_str()).collect();
                screen
                    .line("Поля: название, тип предприятия, УНП, ID банка, адрес")
                    .line(format!("Тип предприятия: {}", types.join(", ")))
            }
        }
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.form.loading_flag()
    }
}

pub struct EnterpriseView {
    enterprise_id: Result<i64, ClientError>,
    enterprise: ResourceView<Enterprise>,
}

impl EnterpriseView {
    pub fn new(raw_id: &str) -> Self {
        Self {
            enterprise_id: param_id(Some(raw_id), "Некорректный ID предприятия"),
            enterprise: ResourceView::new(MessageCatalog::new("Ошибка при загрузке предприятия")),
        }
    }
}

#[async_trait]
impl View for EnterpriseView {
    async fn load(&mut self, client: &ApiClient) {
        match &self.enterprise_id {
            Ok(id) => {
                self.enterprise.load(client.get_enterprise(*id)).await;
            }
            Err(error) => self.enterprise.fail(error.clone()),
        }
    }

    fn render(&self) -> Screen {
        Screen::from_state(
            "Данные предприятия",
            self.enterprise.state(),
            self.enterprise.catalog(),
            NO_DATA_TEXT,
            |enterprise| vec![enterprise.to_card()],
        )
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.enterprise.loading_flag()
    }
}
