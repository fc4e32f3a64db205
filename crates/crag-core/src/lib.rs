pub mod consts;
pub mod error;
pub mod layout;
pub mod machine;
pub mod photo;
pub mod route;
pub mod scroll;
pub mod session;
pub mod viewport;
