mod guest;
mod status;

pub mod dtos {
    pub use crate::guest::dtos::*;
}

pub use crate::guest::api::*;
pub use crate::status::api::*;
