use vectorcraft::path::{
    parse, parse_with_mode, serialize, try_update_value, update_value, ParseMode, PathCommand,
    PathError,
};

const WELL_FORMED: &[&str] = &[
    "M 10 20 L 30 40 Z",
    "M10,20 L30,40 z",
    "m 1.5 -2 l 3 4 h 5 v -6 z",
    "M 0 0 C 10 20, 30 40, 50 60 S 70 80 90 100",
    "M0 0 Q 5 5 10 0 T 20 0",
    "M 10 10 A 25 25 -30 0 1 50 -25 a 5 5 0 1 0 10 10",
    "M .5 -.25 L -1.5 3",
    "M 0.0000001 40",
    "L 1000000000000000000000 5",
    "M 0 0",
];

fn letters(commands: &[PathCommand]) -> String {
    commands.iter().map(|c| c.letter).collect()
}

#[test]
fn test_semantic_round_trip() {
    for d in WELL_FORMED {
        let parsed = parse(d);
        let reparsed = parse(&serialize(&parsed));
        assert_eq!(reparsed, parsed, "round trip of {:?}", d);
    }
}

#[test]
fn test_reserialization_is_idempotent() {
    for d in WELL_FORMED {
        let once = serialize(&parse(d));
        let twice = serialize(&parse(&once));
        assert_eq!(once, twice, "reserializing {:?}", d);
    }
}

#[test]
fn test_separator_choice_does_not_matter() {
    assert_eq!(parse("M 10 20 L 30 40"), parse("M10,20L30,40"));
    assert_eq!(parse("M 10 20"), parse("M  10 ,, 20 "));
}

#[test]
fn test_concrete_update_scenario() {
    let commands = parse("M 10 20 L 30 40 Z");
    assert_eq!(
        commands,
        vec![
            PathCommand::new('M', vec![10.0, 20.0]),
            PathCommand::new('L', vec![30.0, 40.0]),
            PathCommand::new('Z', vec![]),
        ]
    );

    let updated = update_value(&commands, 1, 0, 99.0);
    assert_eq!(
        updated,
        vec![
            PathCommand::new('M', vec![10.0, 20.0]),
            PathCommand::new('L', vec![99.0, 40.0]),
            PathCommand::new('Z', vec![]),
        ]
    );
    assert_eq!(serialize(&updated), "M10 20 L99 40 Z");

    // copy on write
    assert_eq!(commands[1].values, vec![30.0, 40.0]);
}

#[test]
#[should_panic]
fn test_update_value_out_of_range_panics() {
    let commands = parse("M 10 20");
    let _ = update_value(&commands, 3, 0, 1.0);
}

#[test]
fn test_try_update_value_out_of_range() {
    let commands = parse("M 10 20 Z");
    assert!(try_update_value(&commands, 5, 0, 1.0).is_none());
    assert!(try_update_value(&commands, 1, 0, 1.0).is_none());
    assert!(try_update_value(&commands, 0, 1, 1.0).is_some());
}

#[test]
fn test_bad_number_is_local() {
    let commands = parse("M 1 2 L 3..4 5 L 6 7");
    assert_eq!(letters(&commands), "MLL");
    assert!(commands[1].values[0].is_nan());
    assert_eq!(commands[1].values[1], 5.0);
    assert_eq!(commands[2].values, vec![6.0, 7.0]);
}

#[test]
fn test_unknown_letters_pass_through() {
    let commands = parse("M 0 0 X 1 2 3 Z");
    assert_eq!(letters(&commands), "MXZ");
    assert_eq!(commands[1].values, vec![1.0, 2.0, 3.0]);
    assert_eq!(serialize(&commands), "M0 0 X1 2 3 Z");
}

#[test]
fn test_empty_path() {
    assert!(parse("").is_empty());
    assert!(parse("   ").is_empty());
    assert_eq!(serialize(&[]), "");
}

#[test]
fn test_strict_mode_rejects_what_permissive_tolerates() {
    assert!(parse_with_mode("M 1 2 L 3..4 5", ParseMode::Permissive).is_ok());
    assert!(matches!(
        parse_with_mode("M 1 2 L 3..4 5", ParseMode::Strict),
        Err(PathError::InvalidNumber {
            command_index: 1,
            ..
        })
    ));
    assert!(matches!(
        parse_with_mode("M 0 0 X 1", ParseMode::Strict),
        Err(PathError::UnknownCommand { letter: 'X', .. })
    ));
    assert!(matches!(
        parse_with_mode("M 0 0 L 1", ParseMode::Strict),
        Err(PathError::ParameterCount { letter: 'L', .. })
    ));
    assert_eq!(
        parse_with_mode("M 10 20 L 30 40 Z", ParseMode::Strict).unwrap(),
        parse("M 10 20 L 30 40 Z")
    );
}
