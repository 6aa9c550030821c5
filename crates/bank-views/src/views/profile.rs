//! Own profile and the enterprise specialist profile

use async_trait::async_trait;
use bank_client::ApiClient;
use bank_core::models::{EnterpriseSpecialist, Profile, ProfileUpdate};

use super::View;
use crate::cards::ToCard;
use crate::messages::MessageCatalog;
use crate::render::{Screen, NO_DATA_TEXT};
use crate::resource::ResourceView;
use crate::state::LoadingFlag;

pub struct ProfileView {
    profile: ResourceView<Profile>,
}

impl ProfileView {
    pub fn new() -> Self {
        Self {
            profile: ResourceView::new(MessageCatalog::new("Ошибка загрузки профиля")),
        }
    }

    pub fn profile(&self) -> &ResourceView<Profile> {
        &self.profile
    }

    pub async fn update(&mut self, client: &ApiClient, body: ProfileUpdate) -> bool {
        self.profile
            .set_action_catalog(MessageCatalog::new("Ошибка обновления профиля"));
        self.profile
            .submit(client.update_profile(&body), "Профиль успешно обновлен!")
            .await
    }

    /// Delete the profile; the session is cleared by the client
    pub async fn delete(&mut self, client: &ApiClient) -> bool {
        self.profile
            .set_action_catalog(MessageCatalog::new("Ошибка удаления профиля"));
        let deleted = self
            .profile
            .perform(client.delete_profile(), "Профиль успешно удален!")
            .await;
        if deleted {
            self.profile.clear();
        }
        deleted
    }
}

impl Default for ProfileView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for ProfileView {
    async fn load(&mut self, client: &ApiClient) {
        self.profile.load(client.get_profile()).await;
    }

    fn render(&self) -> Screen {
        Screen::from_state(
            "Профиль",
            self.profile.state(),
            self.profile.catalog(),
            NO_DATA_TEXT,
            |profile| vec![profile.to_card()],
        )
        .notice(self.profile.notice())
        .error(self.profile.action_error())
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.profile.loading_flag()
    }
}

pub struct SpecialistProfileView {
    specialist: ResourceView<EnterpriseSpecialist>,
}

impl SpecialistProfileView {
    pub fn new() -> Self {
        Self {
            specialist: ResourceView::new(MessageCatalog::new("Ошибка загрузки профиля")),
        }
    }
}

impl Default for SpecialistProfileView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for SpecialistProfileView {
    async fn load(&mut self, client: &ApiClient) {
        self.specialist.load(client.get_specialist_profile()).await;
    }

    fn render(&self) -> Screen {
        Screen::from_state(
            "Профиль специалиста",
            self.specialist.state(),
            self.specialist.catalog(),
            NO_DATA_TEXT,
            |specialist| vec![specialist.to_card()],
        )
    }

    fn loading_flag(&self) -> LoadingFlag {
        self.specialist.loading_flag()
    }
}
