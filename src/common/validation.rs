use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::common::error::AppError;

/// Maior preço aceito para quartos e pratos.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

// ---
// Validação Customizada
// ---
pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_price(val: &Decimal) -> Result<(), ValidationError> {
    validate_not_negative(val)?;
    if *val > MAX_PRICE {
        let mut err = ValidationError::new("range");
        err.add_param("max".into(), &1_000_000.0);
        err.message = Some("O preço excede o máximo permitido.".into());
        return Err(err);
    }
    Ok(())
}

/// Erro de validação para um total que não cabe em `Decimal` (ou uma
/// quantidade que não cabe em `u32`).
pub fn amount_overflow(field: &'static str) -> AppError {
    let mut err = ValidationError::new("AmountOverflow");
    err.message = Some("O valor calculado excede o limite suportado.".into());
    let mut errors = ValidationErrors::new();
    errors.add(field, err);
    AppError::ValidationError(errors)
}
