//! Path data serialization and copy-on-write value edits.

use super::command::PathCommand;

/// Formats a number for path data.
///
/// Finite values are written as plain decimals with the shortest digits that
/// read back to the same value, never in exponent form: `e` is a command
/// letter in path data. Whole numbers have no fractional part, `-0` prints as
/// `0`, and non-finite values print as `NaN` / `Infinity` / `-Infinity`.
///
/// # Example
///
/// ```
/// use vectorcraft::path::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e-7), "0.0000001");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Serializes commands back into path data.
///
/// Each command is its letter immediately followed by its values joined with a
/// single space; commands are joined with a single space. The original
/// separators are not preserved, only the geometry.
///
/// # Example
///
/// ```
/// use vectorcraft::path::{parse, serialize};
///
/// assert_eq!(serialize(&parse("M 10,20 L 30 40 Z")), "M10 20 L30 40 Z");
/// ```
pub fn serialize(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|cmd| {
            let params: Vec<String> = cmd.values.iter().map(|v| format_number(*v)).collect();
            format!("{}{}", cmd.letter, params.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns a new command list with one value replaced.
///
/// The input is left untouched.
///
/// # Panics
///
/// Panics if `command_index` or `value_index` is out of range. Callers obtain
/// both indices by enumerating the same list, so a bad index is a bug; use
/// [`try_update_value`] for indices that come from user input.
pub fn update_value(
    commands: &[PathCommand],
    command_index: usize,
    value_index: usize,
    new_value: f64,
) -> Vec<PathCommand> {
    let mut updated = commands.to_vec();
    updated[command_index].values[value_index] = new_value;
    updated
}

/// Like [`update_value`], but returns `None` instead of panicking on an
/// out-of-range index.
pub fn try_update_value(
    commands: &[PathCommand],
    command_index: usize,
    value_index: usize,
    new_value: f64,
) -> Option<Vec<PathCommand>> {
    let in_range = commands
        .get(command_index)
        .is_some_and(|cmd| value_index < cmd.values.len());
    in_range.then(|| update_value(commands, command_index, value_index, new_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse;

    #[test]
    fn test_serialize_spacing_convention() {
        let commands = parse("M 10 20 L 30 40 Z");
        assert_eq!(serialize(&commands), "M10 20 L30 40 Z");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-12.25), "-12.25");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_number_never_uses_exponent() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(-2.5e-7), "-0.00000025");
        for value in [1e21, 1e-7, 123456789e15, 3.0e-12] {
            let text = format_number(value);
            assert!(!text.contains('e'), "{}", text);
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn test_small_and_large_values_round_trip() {
        let commands = parse("M 0.0000001 40 L 1000000000000000000000 5");
        let text = serialize(&commands);
        assert_eq!(text, "M0.0000001 40 L1000000000000000000000 5");
        assert_eq!(parse(&text), commands);
    }

    #[test]
    fn test_nan_survives_serialization() {
        let commands = parse("L 3..4 4");
        assert_eq!(serialize(&commands), "LNaN 4");
    }

    #[test]
    fn test_update_value_is_copy_on_write() {
        let commands = parse("M 10 20 L 30 40 Z");
        let updated = update_value(&commands, 1, 0, 99.0);

        assert_eq!(commands[1].values, vec![30.0, 40.0]);
        assert_eq!(updated[1].values, vec![99.0, 40.0]);
        assert_eq!(updated[0], commands[0]);
        assert_eq!(updated[2], commands[2]);
        assert_eq!(serialize(&updated), "M10 20 L99 40 Z");
    }

    #[test]
    #[should_panic]
    fn test_update_value_out_of_range_panics() {
        let commands = parse("M 10 20 Z");
        update_value(&commands, 1, 0, 1.0);
    }

    #[test]
    fn test_try_update_value_guards() {
        let commands = parse("M 10 20 Z");
        assert!(try_update_value(&commands, 1, 0, 1.0).is_none());
        assert!(try_update_value(&commands, 5, 0, 1.0).is_none());
        assert!(try_update_value(&commands, 0, 2, 1.0).is_none());
        let updated = try_update_value(&commands, 0, 1, 5.0).unwrap();
        assert_eq!(updated[0].values, vec![10.0, 5.0]);
    }
}
