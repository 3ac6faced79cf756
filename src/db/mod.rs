pub mod chatdb;
pub mod creditdb;
pub mod db;
pub mod gigdb;
pub mod notificationdb;
pub mod reviewdb;
pub mod seed;
pub mod userdb;
