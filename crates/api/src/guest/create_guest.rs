use crate::error::StaywatchError;
use crate::guest::subscribers::SendBillingRemindersOnGuestCreated;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use staywatch_api_structs::create_guest::*;
use staywatch_domain::{parse_check_in_date, Guest};
use staywatch_infra::StaywatchContext;

pub async fn create_guest_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<StaywatchContext>,
) -> Result<HttpResponse, StaywatchError> {
    let body = body.0;
    let usecase = CreateGuestUseCase {
        name: body.name,
        room: body.room,
        daily_rate: body.daily_rate,
        check_in_date: body.check_in_date,
        contact: body.contact,
    };

    execute(usecase, &ctx)
        .await
        .map(|guest| HttpResponse::Created().json(APIResponse::new(guest, ctx.sys.get_datetime())))
        .map_err(StaywatchError::from)
}

#[derive(Debug)]
pub struct CreateGuestUseCase {
    pub name: String,
    pub room: String,
    pub daily_rate: i64,
    pub check_in_date: String,
    pub contact: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidCheckInDate(String),
    InvalidGuest(String),
}

impl From<UseCaseError> for StaywatchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::InvalidCheckInDate(date) => Self::BadClientData(format!(
                "Invalid check in date: {}, expected the format YYYY-MM-DD",
                date
            )),
            UseCaseError::InvalidGuest(msg) => Self::BadClientData(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateGuestUseCase {
    type Response = Guest;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateGuest";

    async fn execute(&mut self, ctx: &StaywatchContext) -> Result<Self::Response, Self::Error> {
        let check_in = parse_check_in_date(&self.check_in_date)
            .map_err(|_| UseCaseError::InvalidCheckInDate(self.check_in_date.clone()))?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::InvalidGuest("Guest name cannot be empty".into()));
        }
        if self.daily_rate < 0 {
            return Err(UseCaseError::InvalidGuest(format!(
                "Daily rate cannot be negative, got: {}",
                self.daily_rate
            )));
        }

        let guest = Guest::new(
            name.to_string(),
            self.room.trim().to_string(),
            self.daily_rate,
            check_in,
            self.contact.trim().to_string(),
        );

        ctx.repos
            .guests
            .insert(&guest)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(guest)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SendBillingRemindersOnGuestCreated)]
    }
}
