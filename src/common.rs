pub mod error;
pub mod filter_param;
pub mod validation;
