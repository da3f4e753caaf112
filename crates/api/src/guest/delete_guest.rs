use crate::error::StaywatchError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use staywatch_api_structs::delete_guest::*;
use staywatch_domain::{Guest, ID};
use staywatch_infra::StaywatchContext;
use tracing::{error, warn};

pub async fn delete_guest_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<StaywatchContext>,
) -> Result<HttpResponse, StaywatchError> {
    let usecase = DeleteGuestUseCase {
        guest_id: path_params.guest_id.clone(),
    };
    execute(usecase, &ctx)
        .await
        .map(|deleted| {
            HttpResponse::Ok().json(APIResponse::new(
                deleted.guest_id,
                deleted.guest,
                ctx.sys.get_datetime(),
            ))
        })
        .map_err(|e| match e {
            UseCaseError::GuestNotFound => StaywatchError::NotFound(format!(
                "A guest with id: {}, was not found.",
                path_params.guest_id
            )),
            UseCaseError::StorageError => StaywatchError::InternalError,
        })
}

/// Checks out a `Guest`. The `GuestNotification`s of the guest are
/// removed with it.
#[derive(Debug)]
pub struct DeleteGuestUseCase {
    pub guest_id: ID,
}

#[derive(Debug)]
pub struct DeletedGuest {
    pub guest_id: ID,
    /// `None` when the removed record could not be decoded
    pub guest: Option<Guest>,
}

#[derive(Debug)]
pub enum UseCaseError {
    GuestNotFound,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteGuestUseCase {
    type Response = DeletedGuest;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteGuest";

    async fn execute(&mut self, ctx: &StaywatchContext) -> Result<Self::Response, Self::Error> {
        let deleted = ctx
            .repos
            .guests
            .delete(&self.guest_id)
            .await
            .map_err(|e| {
                error!("Unable to delete guest {}: {:?}", self.guest_id, e);
                UseCaseError::StorageError
            })?;

        let guest = match deleted {
            Some(Ok(guest)) => Some(guest),
            Some(Err(e)) => {
                warn!("Checked out guest whose record could not be read: {}", e);
                None
            }
            None => return Err(UseCaseError::GuestNotFound),
        };

        // Postgres cascades on its own, the in-memory store does not
        if let Err(e) = ctx
            .repos
            .guest_notifications
            .delete_by_guest(&self.guest_id)
            .await
        {
            error!(
                "Unable to delete billing reminders of guest {}: {:?}",
                self.guest_id, e
            );
        }

        Ok(DeletedGuest {
            guest_id: self.guest_id.clone(),
            guest,
        })
    }
}
