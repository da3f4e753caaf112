use crate::error::StaywatchError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use staywatch_api_structs::get_guests::*;
use staywatch_domain::Guest;
use staywatch_infra::StaywatchContext;
use tracing::warn;

pub async fn get_guests_controller(
    ctx: web::Data<StaywatchContext>,
) -> Result<HttpResponse, StaywatchError> {
    execute(GetGuestsUseCase, &ctx)
        .await
        .map(|guests| HttpResponse::Ok().json(APIResponse::new(guests, ctx.sys.get_datetime())))
        .map_err(|e| match e {
            UseCaseError::StorageError => StaywatchError::InternalError,
        })
}

#[derive(Debug)]
pub struct GetGuestsUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetGuestsUseCase {
    type Response = Vec<Guest>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetGuests";

    async fn execute(&mut self, ctx: &StaywatchContext) -> Result<Self::Response, Self::Error> {
        let guests = ctx
            .repos
            .guests
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .filter_map(|guest| match guest {
                Ok(guest) => Some(guest),
                Err(e) => {
                    warn!("Leaving out guest from listing: {}", e);
                    None
                }
            })
            .collect();

        Ok(guests)
    }
}
