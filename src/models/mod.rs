pub mod chatmodels;
pub mod creditmodel;
pub mod gigmodel;
pub mod notificationmodel;
pub mod offermodel;
pub mod reviewmodel;
pub mod usermodel;
