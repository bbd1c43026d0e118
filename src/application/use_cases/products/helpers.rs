use rust_decimal::Decimal;

use crate::application::error::ApiError;
use crate::application::use_cases::users::helpers::required_text;

pub fn valid_name(name: &str) -> Result<String, ApiError> {
    required_text("name", name)
}

pub fn valid_price(price: Decimal) -> Result<Decimal, ApiError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ApiError::Validation("price must not be negative".into()));
    }
    Ok(price)
}

pub fn valid_stock(stock: i32) -> Result<i32, ApiError> {
    if stock < 0 {
        return Err(ApiError::Validation("stock must not be negative".into()));
    }
    Ok(stock)
}
