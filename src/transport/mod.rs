pub mod gateway;
pub mod mail;
pub mod submit;
