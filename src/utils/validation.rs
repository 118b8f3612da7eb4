use crate::domain::model::TAX_RATE;
use crate::utils::error::{Result, TicketingError};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_price(field_name: &str, price: Decimal) -> Result<()> {
    if price <= Decimal::ZERO {
        return Err(TicketingError::invalid_argument(
            field_name,
            price,
            "Price must be greater than 0",
        ));
    }

    // 含稅價格在讀取時計算，必須保證乘上稅率不會溢位
    if price.checked_mul(TAX_RATE).is_none() {
        return Err(TicketingError::invalid_argument(
            field_name,
            price,
            "Price is too large to apply tax to",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(TicketingError::invalid_argument(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TicketingError::invalid_argument(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TicketingError::invalid_argument(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(TicketingError::invalid_argument(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| TicketingError::MissingField {
        field: field_name.to_string(),
    })
}
