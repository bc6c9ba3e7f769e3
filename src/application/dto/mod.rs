mod request;
mod response;

pub use request::GenerateRequest;
pub use response::GenerateResponse;
