//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! antes de construir variables GraphQL.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::errors::{missing_field_error, validation_error, TrackingError};

lazy_static! {
    static ref DATE_FORMAT: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Validar formato estricto de fecha `YYYY-MM-DD`
///
/// The regex gate rejects values chrono would accept leniently
/// (e.g. `2024-1-5`); the chrono parse then rejects impossible
/// calendar dates (e.g. `2024-02-30`).
pub fn validate_date(field: &str, value: &str) -> Result<(), TrackingError> {
    if !DATE_FORMAT.is_match(value) {
        return Err(validation_error(field, "must match YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| validation_error(field, "is not a valid calendar date"))?;
    Ok(())
}

/// Validar una fecha opcional; `None` siempre es válido
pub fn validate_optional_date(field: &str, value: Option<&str>) -> Result<(), TrackingError> {
    match value {
        Some(v) => validate_date(field, v),
        None => Ok(()),
    }
}

/// Validar que un campo requerido no esté vacío
pub fn validate_not_empty(field: &str, value: &str) -> Result<(), TrackingError> {
    if value.trim().is_empty() {
        return Err(missing_field_error(field));
    }
    Ok(())
}

/// Validar que un campo opcional esté presente y no vacío
pub fn validate_required(field: &str, value: Option<&str>) -> Result<(), TrackingError> {
    match value {
        Some(v) => validate_not_empty(field, v),
        None => Err(missing_field_error(field)),
    }
}

/// Convertir un campo de formulario opcional en `None` cuando viene vacío
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
