//! Converter screen state and its transitions

use crate::constants::DEFAULT_RESULT;
use crate::converter;
use crate::types::ConversionDirection;
use tracing::debug;

/// Everything the converter screen shows. Lives only as long as the window.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    pub(crate) input: String,
    pub(crate) direction: ConversionDirection,
    pub(crate) result: String,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self {
            input: String::new(),
            direction: ConversionDirection::default(),
            result: DEFAULT_RESULT.to_string(),
        }
    }
}

impl ConverterState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Switch direction. Always clears the result, even when re-selecting
    /// the active direction, so a stale amount is never shown.
    pub fn select_direction(&mut self, direction: ConversionDirection) {
        debug!(from = ?self.direction, to = ?direction, "Direction selected");
        self.direction = direction;
        self.result = DEFAULT_RESULT.to_string();
    }

    pub fn convert(&mut self) {
        self.result = converter::convert(&self.input, self.direction);
        debug!(
            input = %self.input,
            direction = ?self.direction,
            result = %self.result,
            "Converted"
        );
    }

    pub fn result_label(&self) -> String {
        converter::result_label(&self.result, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_zero_result() {
        let state = ConverterState::default();
        assert_eq!(state.input(), "");
        assert_eq!(state.direction(), ConversionDirection::EurToUsd);
        assert_eq!(state.result(), "0.00");
        assert_eq!(state.result_label(), "Result: $0.00");
    }

    #[test]
    fn typing_does_not_recompute() {
        let mut state = ConverterState::default();
        state.set_input("100");
        assert_eq!(state.result(), "0.00");
        state.convert();
        assert_eq!(state.result(), "111.00");
        state.set_input("200");
        assert_eq!(state.result(), "111.00");
    }

    #[test]
    fn switching_direction_resets_result() {
        let mut state = ConverterState::default();
        state.set_input("100");
        state.convert();
        assert_eq!(state.result(), "111.00");

        state.select_direction(ConversionDirection::UsdToEur);
        assert_eq!(state.result(), "0.00");
        assert_eq!(state.input(), "100");

        state.convert();
        assert_eq!(state.result(), "90.09");
        assert_eq!(state.result_label(), "Result: 90.09€");
    }

    #[test]
    fn reselecting_same_direction_also_resets() {
        let mut state = ConverterState::default();
        state.set_input("5");
        state.convert();
        state.select_direction(ConversionDirection::EurToUsd);
        assert_eq!(state.result(), "0.00");
        assert_eq!(state.direction(), ConversionDirection::EurToUsd);
    }

    #[test]
    fn invalid_input_converts_to_zero() {
        let mut state = ConverterState::default();
        state.set_input("12,50");
        state.convert();
        assert_eq!(state.result(), "0.00");
    }
}
