//! Path data tokenizer.

use super::command::{CommandKind, PathCommand};
use super::error::PathError;
use std::str::FromStr;

/// How the parser treats malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Bad numbers become `NaN` and unknown letters pass through untouched.
    #[default]
    Permissive,
    /// The first malformed number, unknown letter, stray leading text or
    /// wrong argument count fails the whole parse.
    Strict,
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(ParseMode::Permissive),
            "strict" => Ok(ParseMode::Strict),
            other => Err(format!("Unknown path parse mode: {}", other)),
        }
    }
}

/// Parses path data permissively.
///
/// Never fails: a malformed number yields `NaN` in its slot and the rest of the
/// path is still parsed.
///
/// # Example
///
/// ```
/// use vectorcraft::path::parse;
///
/// let commands = parse("M10,20 L 30 40 Z");
/// assert_eq!(commands[0].values, vec![10.0, 20.0]);
/// assert_eq!(commands[1].values, vec![30.0, 40.0]);
/// assert!(commands[2].values.is_empty());
///
/// let broken = parse("M 1 2 L 1..5 4");
/// assert!(broken[1].values[0].is_nan());
/// assert_eq!(broken[1].values[1], 4.0);
/// ```
pub fn parse(d: &str) -> Vec<PathCommand> {
    tokenize(d)
        .1
        .into_iter()
        .map(|(letter, args)| {
            PathCommand::new(letter, split_numbers(args).map(parse_lenient).collect())
        })
        .collect()
}

/// Parses path data with an explicit [`ParseMode`].
pub fn parse_with_mode(d: &str, mode: ParseMode) -> Result<Vec<PathCommand>, PathError> {
    match mode {
        ParseMode::Permissive => Ok(parse(d)),
        ParseMode::Strict => parse_strict(d),
    }
}

fn parse_strict(d: &str) -> Result<Vec<PathCommand>, PathError> {
    let (leading, tokens) = tokenize(d);
    if !leading.trim().is_empty() {
        return Err(PathError::UnexpectedText {
            text: leading.trim().to_string(),
        });
    }

    let mut commands = Vec::with_capacity(tokens.len());
    for (command_index, (letter, args)) in tokens.into_iter().enumerate() {
        let kind = CommandKind::from_letter(letter).ok_or(PathError::UnknownCommand {
            command_index,
            letter,
        })?;

        let mut values = Vec::new();
        for text in split_numbers(args) {
            let value = text.parse::<f64>().map_err(|_| PathError::InvalidNumber {
                command_index,
                text: text.to_string(),
            })?;
            values.push(value);
        }

        let arity = kind.arity();
        let count_ok = if arity == 0 {
            values.is_empty()
        } else {
            !values.is_empty() && values.len() % arity == 0
        };
        if !count_ok {
            return Err(PathError::ParameterCount {
                command_index,
                letter,
                expected: arity,
                found: values.len(),
            });
        }

        commands.push(PathCommand::new(letter, values));
    }

    Ok(commands)
}

/// Splits path data into the text before the first letter and a list of
/// `(letter, argument text)` pairs.
fn tokenize(d: &str) -> (&str, Vec<(char, &str)>) {
    let starts: Vec<usize> = d
        .char_indices()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .collect();

    let leading = &d[..starts.first().copied().unwrap_or(d.len())];

    let tokens = starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(d.len());
            // ASCII letters are one byte wide
            let letter = d.as_bytes()[start] as char;
            (letter, &d[start + 1..end])
        })
        .collect();

    (leading, tokens)
}

fn split_numbers(args: &str) -> impl Iterator<Item = &str> {
    args.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
}

fn parse_lenient(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let commands = parse("M 10 20 L 30 40 Z");
        assert_eq!(
            commands,
            vec![
                PathCommand::new('M', vec![10.0, 20.0]),
                PathCommand::new('L', vec![30.0, 40.0]),
                PathCommand::new('Z', vec![]),
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
    }

    #[test]
    fn test_parse_mixed_separators() {
        let commands = parse("M10,20L30 , 40\n\tz");
        assert_eq!(commands[0].values, vec![10.0, 20.0]);
        assert_eq!(commands[1].values, vec![30.0, 40.0]);
        assert_eq!(commands[2].letter, 'z');
    }

    #[test]
    fn test_leading_text_ignored_in_permissive_mode() {
        let commands = parse("12 M 1 2");
        assert_eq!(commands, vec![PathCommand::new('M', vec![1.0, 2.0])]);
    }

    #[test]
    fn test_unknown_letter_passes_through() {
        let commands = parse("M 0 0 X 1 2 3");
        assert_eq!(commands[1], PathCommand::new('X', vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_exponent_letter_splits_command() {
        // Exponent letters are command letters under this tokenization rule
        let commands = parse("M 1e5 2");
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].values, vec![1.0]);
        assert_eq!(commands[1].letter, 'e');
        assert_eq!(commands[1].values, vec![5.0, 2.0]);
    }

    #[test]
    fn test_bad_number_is_local() {
        let commands = parse("M 1 2 L 3..4 5 Z");
        assert_eq!(commands.len(), 3);
        assert!(commands[1].values[0].is_nan());
        assert_eq!(commands[1].values[1], 5.0);
        assert_eq!(commands[0].values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_arc_flags_are_numbers() {
        let commands = parse("A 25 25 -30 0 1 50 -25");
        assert_eq!(commands[0].values, vec![25.0, 25.0, -30.0, 0.0, 1.0, 50.0, -25.0]);
    }

    #[test]
    fn test_strict_accepts_well_formed() {
        let commands = parse_with_mode("M 0 0 L 1 1 2 2 Z", ParseMode::Strict).unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[1].values.len(), 4);
    }

    #[test]
    fn test_strict_rejects_bad_number() {
        let err = parse_with_mode("M 1 2 L 3..4 5", ParseMode::Strict).unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidNumber {
                command_index: 1,
                text: "3..4".to_string()
            }
        );
    }

    #[test]
    fn test_strict_rejects_unknown_letter() {
        let err = parse_with_mode("M 1 2 X 3", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, PathError::UnknownCommand { letter: 'X', .. }));
    }

    #[test]
    fn test_strict_rejects_wrong_count() {
        let err = parse_with_mode("M 1 2 C 1 2 3", ParseMode::Strict).unwrap_err();
        assert_eq!(
            err,
            PathError::ParameterCount {
                command_index: 1,
                letter: 'C',
                expected: 6,
                found: 3
            }
        );
        assert!(parse_with_mode("Z 1", ParseMode::Strict).is_err());
        assert!(parse_with_mode("M", ParseMode::Strict).is_err());
    }

    #[test]
    fn test_strict_rejects_leading_text() {
        let err = parse_with_mode("12 M 1 2", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, PathError::UnexpectedText { .. }));
    }

    #[test]
    fn test_permissive_mode_never_fails() {
        let commands = parse_with_mode("M 1 2 X 3..4", ParseMode::Permissive).unwrap();
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_parse_mode_from_str() {
        assert_eq!("strict".parse::<ParseMode>(), Ok(ParseMode::Strict));
        assert_eq!(" Permissive ".parse::<ParseMode>(), Ok(ParseMode::Permissive));
        assert!("loose".parse::<ParseMode>().is_err());
    }
}
