mod fetch_session;
mod login_user;
mod logout_user;
mod register_user;

pub use fetch_session::{__path_fetch_session_handler, fetch_session_handler};
pub use login_user::{
    __path_login_user_handler, login_user_handler, LoginRequestDto, SessionResponse, SessionUser,
};
pub use logout_user::{__path_logout_user_handler, logout_user_handler, LogoutResponseBody};
pub use register_user::{
    __path_register_user_handler, register_user_handler, RegisterRequestDto,
};
