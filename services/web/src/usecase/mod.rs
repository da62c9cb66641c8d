pub mod activate;
pub mod login;
pub mod register;
