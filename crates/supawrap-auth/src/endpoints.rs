//! Fixed relative paths for the GoTrue auth endpoints. Pure data.
//!
//! All paths are relative to the project base URL; grant types that the
//! backend selects on ride along as embedded query strings, with any further
//! parameters appended by the request primitive using `&`.

pub const SIGN_UP: &str = "auth/v1/signup?grant_type=signup";
pub const TOKEN_PASSWORD: &str = "auth/v1/token?grant_type=password";
pub const TOKEN_REFRESH: &str = "auth/v1/token?grant_type=refresh_token";
pub const MAGIC_LINK: &str = "auth/v1/magiclink";
pub const RECOVER: &str = "auth/v1/recover";
pub const VERIFY: &str = "auth/v1/verify";
pub const USER: &str = "auth/v1/user";
pub const LOGOUT: &str = "auth/v1/logout";
pub const INVITE: &str = "auth/v1/invite";
pub const RESET: &str = "auth/v1/reset?grant_type=reset_password";
