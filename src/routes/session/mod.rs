mod handler;
mod model;

pub use handler::{create_session, create_session_from_token, delete_session, get_session};
pub use model::{
    CreateSessionRequest, CreateTokenSessionRequest, DeleteSessionResponse, SessionResponse,
};
