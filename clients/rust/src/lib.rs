mod base;
mod guest;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use guest::GuestClient;
pub use guest::CreateGuestInput;
pub use staywatch_api_structs::dtos::*;
pub use staywatch_domain::ID;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use staywatch_api_structs::dtos::GuestDTO as Guest;

/// Staywatch Server SDK
///
/// The SDK contains methods for interacting with the Staywatch server
/// API.
#[derive(Clone)]
pub struct StaywatchSDK {
    pub guest: GuestClient,
    pub status: StatusClient,
}

impl StaywatchSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let guest = GuestClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { guest, status }
    }
}
