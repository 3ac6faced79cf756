pub mod chatdtos;
pub mod gigdtos;
pub mod offerdtos;
pub mod reviewdtos;
pub mod userdtos;
