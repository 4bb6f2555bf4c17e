// ==========================================
// Support Stock - registration form validation
// ==========================================
// Turns the raw form into movements, or rejects it before any write.
// Rules, in order:
// 1. a location must be selected
// 2. every quantity is blank or an integer in 0..=MAX_QUANTITY
// 3. at least one quantity is above zero
// Meat / Produce: direction forced to INBOUND, the selection is not read.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::movement::{NewMovement, MAX_QUANTITY};
use crate::domain::types::{Direction, Item, Location};
use crate::i18n::{item_label, t, t_with_args};

/// Raw registration form, as typed by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub date: Option<NaiveDate>,
    /// Stored code or English name; None = nothing selected
    pub location: Option<String>,
    /// None = INBOUND (the selector default)
    pub direction: Option<String>,
    #[serde(default)]
    pub roll_qty: String,
    #[serde(default)]
    pub grid_qty: String,
    #[serde(default)]
    pub crate_qty: String,
}

impl RegistrationForm {
    fn raw_quantities(&self) -> [(Item, &str); 3] {
        [
            (Item::Roll, self.roll_qty.as_str()),
            (Item::Grid, self.grid_qty.as_str()),
            (Item::ReturnableCrate, self.crate_qty.as_str()),
        ]
    }
}

/// State of the direction selector for a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionChoice {
    /// false when the location only accepts INBOUND
    pub enabled: bool,
    pub direction: Direction,
}

/// Selector state after picking `location` with `current` selected
pub fn direction_choice(location: Option<Location>, current: Option<Direction>) -> DirectionChoice {
    match location {
        Some(l) if l.forces_inbound() => DirectionChoice {
            enabled: false,
            direction: Direction::Inbound,
        },
        _ => DirectionChoice {
            enabled: true,
            direction: current.unwrap_or(Direction::Inbound),
        },
    }
}

/// Parse a location selection; blank means "not selected"
pub fn parse_location(raw: Option<&str>) -> ApiResult<Option<Location>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse::<Location>()
            .map(Some)
            .map_err(|e| ApiError::ValidationError(e.to_string())),
    }
}

/// Parse a direction selection; blank means INBOUND
pub fn parse_direction(raw: Option<&str>) -> ApiResult<Direction> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Direction::Inbound),
        Some(s) => s
            .parse::<Direction>()
            .map_err(|e| ApiError::ValidationError(e.to_string())),
    }
}

/// Parse one quantity field: blank = 0, otherwise an integer in 0..=MAX_QUANTITY
pub fn parse_quantity(item: Item, raw: &str) -> ApiResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }

    let label = item_label(item);
    let qty: i64 = raw.parse().map_err(|_| {
        ApiError::ValidationError(t_with_args("notice.quantity_not_integer", &[("item", label.as_str())]))
    })?;
    if qty < 0 {
        return Err(ApiError::ValidationError(t_with_args(
            "notice.quantity_negative",
            &[("item", label.as_str())],
        )));
    }
    if qty > MAX_QUANTITY {
        let max = MAX_QUANTITY.to_string();
        return Err(ApiError::ValidationError(t_with_args(
            "notice.quantity_too_large",
            &[("item", label.as_str()), ("max", max.as_str())],
        )));
    }
    Ok(qty)
}

/// Validate the form and build one movement per positive quantity
///
/// # Returns
/// - Ok(Vec<NewMovement>): 1..=3 movements sharing date/location/direction
/// - Err(ApiError::ValidationError): nothing must be written
pub fn validate_registration(form: &RegistrationForm, today: NaiveDate) -> ApiResult<Vec<NewMovement>> {
    let location = parse_location(form.location.as_deref())?
        .ok_or_else(|| ApiError::ValidationError(t("notice.select_location")))?;
    let direction = if location.forces_inbound() {
        Direction::Inbound
    } else {
        parse_direction(form.direction.as_deref())?
    };
    let date = form.date.unwrap_or(today);

    let mut quantities = Vec::with_capacity(3);
    for (item, raw) in form.raw_quantities() {
        quantities.push((item, parse_quantity(item, raw)?));
    }

    if quantities.iter().all(|(_, q)| *q == 0) {
        return Err(ApiError::ValidationError(t("notice.no_quantity")));
    }

    Ok(quantities
        .into_iter()
        .filter(|(_, q)| *q > 0)
        .map(|(item, q)| NewMovement::new(date, item, direction, location, q))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn form(location: Option<&str>, direction: Option<&str>, qty: [&str; 3]) -> RegistrationForm {
        RegistrationForm {
            date: None,
            location: location.map(str::to_string),
            direction: direction.map(str::to_string),
            roll_qty: qty[0].to_string(),
            grid_qty: qty[1].to_string(),
            crate_qty: qty[2].to_string(),
        }
    }

    #[test]
    fn test_meat_forces_inbound() {
        let movements =
            validate_registration(&form(Some("Meat"), Some("OUTBOUND"), ["5", "0", ""]), today())
                .unwrap();
        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].item, Item::Roll);
        assert_eq!(movements[0].direction, Direction::Inbound);
        assert_eq!(movements[0].quantity, 5);
        assert_eq!(movements[0].date, today());
    }

    #[test]
    fn test_fresh_keeps_requested_direction() {
        let movements =
            validate_registration(&form(Some("Freschi"), Some("USCITA"), ["", "2", "3"]), today())
                .unwrap();
        assert_eq!(movements.len(), 2);
        assert!(movements.iter().all(|m| m.direction == Direction::Outbound));
        assert_eq!(movements[1].item, Item::ReturnableCrate);
    }

    #[test]
    fn test_all_zero_rejected() {
        let err = validate_registration(&form(Some("Dry"), None, ["0", "", " "]), today())
            .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_missing_location_rejected() {
        let err = validate_registration(&form(None, None, ["1", "", ""]), today()).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
        let err = validate_registration(&form(Some("  "), None, ["1", "", ""]), today()).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_non_integer_and_negative_rejected() {
        for bad in ["2.5", "abc", "-1"] {
            let err = validate_registration(&form(Some("Dry"), None, ["1", bad, ""]), today())
                .unwrap_err();
            assert!(matches!(err, ApiError::ValidationError(_)), "input {}", bad);
        }
    }

    #[test]
    fn test_values_outside_enumeration_rejected() {
        let err = validate_registration(&form(Some("Surgelati"), None, ["1", "", ""]), today())
            .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
        let err = validate_registration(&form(Some("Dry"), Some("SIDEWAYS"), ["1", "", ""]), today())
            .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_forced_location_ignores_direction_text() {
        let movements =
            validate_registration(&form(Some("Ortofrutta"), Some("SIDEWAYS"), ["", "1", ""]), today())
                .unwrap();
        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].direction, Direction::Inbound);
        assert_eq!(movements[0].location, Location::Produce);
    }

    #[test]
    fn test_quantity_upper_bound() {
        assert_eq!(parse_quantity(Item::Roll, &MAX_QUANTITY.to_string()).unwrap(), MAX_QUANTITY);

        let too_big = (MAX_QUANTITY + 1).to_string();
        let err = parse_quantity(Item::Roll, &too_big).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));

        let err = validate_registration(
            &form(Some("Secchi"), None, [&i64::MAX.to_string(), "", ""]),
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_direction_choice() {
        let choice = direction_choice(Some(Location::Produce), Some(Direction::Outbound));
        assert!(!choice.enabled);
        assert_eq!(choice.direction, Direction::Inbound);

        let choice = direction_choice(Some(Location::Dry), Some(Direction::Outbound));
        assert!(choice.enabled);
        assert_eq!(choice.direction, Direction::Outbound);

        let choice = direction_choice(None, None);
        assert!(choice.enabled);
        assert_eq!(choice.direction, Direction::Inbound);
    }
}
