use serde::Serialize;

pub mod book;
pub mod review;

/// Plain confirmation message returned by delete endpoints.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
