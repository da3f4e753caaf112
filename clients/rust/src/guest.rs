use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use staywatch_api_structs::*;
use staywatch_domain::ID;
use std::sync::Arc;

#[derive(Clone)]
pub struct GuestClient {
    base: Arc<BaseClient>,
}

pub struct CreateGuestInput {
    pub name: String,
    pub room: String,
    /// In minor currency units
    pub daily_rate: i64,
    /// `YYYY-MM-DD`
    pub check_in_date: String,
    pub contact: String,
}

impl GuestClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateGuestInput) -> APIResponse<create_guest::APIResponse> {
        let body = create_guest::RequestBody {
            name: input.name,
            room: input.room,
            daily_rate: input.daily_rate,
            check_in_date: input.check_in_date,
            contact: input.contact,
        };
        self.base
            .post(body, "guests".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_guests::APIResponse> {
        self.base.get("guests".into(), StatusCode::OK).await
    }

    pub async fn delete(&self, guest_id: &ID) -> APIResponse<delete_guest::APIResponse> {
        self.base
            .delete(format!("guests/{}", guest_id), StatusCode::OK)
            .await
    }
}
