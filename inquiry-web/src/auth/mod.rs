mod require_auth;

pub use require_auth::use_require_auth;
