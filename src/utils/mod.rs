pub mod currency;
pub mod validation;
