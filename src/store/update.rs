//! Truthy-overwrite update rule.
//!
//! A supplied value replaces the stored one only when it is truthy. Empty
//! strings and zero are falsy, so `PUT {"price": 0}` keeps the old price.
//! Absent and `null` values arrive here as `None` and are falsy as well.

use serde_json::Number;

/// Values that can be judged truthy or falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for Number {
    fn is_truthy(&self) -> bool {
        self.as_f64().is_some_and(|n| n != 0.0)
    }
}

/// Replace `slot` with `value` if `value` is present and truthy.
pub fn overwrite_if_truthy<T: Truthy>(slot: &mut Option<T>, value: Option<T>) {
    if let Some(value) = value.filter(Truthy::is_truthy) {
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_value_overwrites() {
        let mut slot = Some("old".to_string());
        overwrite_if_truthy(&mut slot, Some("new".to_string()));
        assert_eq!(slot.as_deref(), Some("new"));
    }

    #[test]
    fn falsy_values_keep_existing() {
        let mut name = Some("old".to_string());
        overwrite_if_truthy(&mut name, Some(String::new()));
        overwrite_if_truthy(&mut name, None);
        assert_eq!(name.as_deref(), Some("old"));

        let mut horsepower = Some(90_i64);
        overwrite_if_truthy(&mut horsepower, Some(0));
        assert_eq!(horsepower, Some(90));

        let mut price = Some(Number::from(10_000));
        overwrite_if_truthy(&mut price, Number::from_f64(0.0));
        assert_eq!(price, Some(Number::from(10_000)));
    }

    #[test]
    fn falsy_value_does_not_fill_an_empty_slot() {
        let mut slot: Option<i64> = None;
        overwrite_if_truthy(&mut slot, Some(0));
        assert_eq!(slot, None);
    }

    #[test]
    fn negative_numbers_are_truthy() {
        let mut slot = Some(1_i64);
        overwrite_if_truthy(&mut slot, Some(-5));
        assert_eq!(slot, Some(-5));
        assert!(Number::from_f64(-0.5).unwrap().is_truthy());
    }
}
