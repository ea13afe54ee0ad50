use chrono::{TimeZone, Utc};
use vectorcraft::config::Config;
use vectorcraft::editor::inspector::{swatch_color, Inspector};
use vectorcraft::editor::session::EditorSession;
use vectorcraft::editor::state::{EditorState, PromptKind};
use vectorcraft::path::ParseMode;

const DOC: &str = concat!(
    "<svg width=\"100\" height=\"100\">",
    "<g id=\"layer\">",
    "<rect x=\"5\" y=\"5\" width=\"20\" height=\"10\" fill=\"#ff0000\"/>",
    "<circle cx=\"50\" cy=\"50\" r=\"8\"/>",
    "</g>",
    "<path d=\"M 10 20 L 30 40 Z\" stroke=\"#00f\" stroke-width=\"2\"/>",
    "</svg>"
);

#[test]
fn test_session_starts_unselected_with_structure() {
    let session = EditorSession::new(DOC);
    assert_eq!(session.document(), DOC);
    assert!(session.selection().is_none());
    assert_eq!(session.structure().unwrap().tag_name, "svg");
    assert!(session.inspector().is_none());
}

#[test]
fn test_select_does_not_touch_document() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![0, 1]));
    assert_eq!(session.selection(), Some(&[0, 1][..]));
    assert_eq!(session.document(), DOC);

    let details = session.selected_element().unwrap();
    assert_eq!(details.tag_name, "circle");
    assert_eq!(details.attributes["r"], "8");
}

#[test]
fn test_update_attribute_on_selection() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![0, 1]));

    assert!(session.update_attribute("r", "12"));
    assert!(session.document().contains("<circle cx=\"50\" cy=\"50\" r=\"12\"/>"));
    assert_eq!(session.selection(), Some(&[0, 1][..]));

    // structure is recomputed with the new text
    let circle = session.structure().unwrap().find(&[0, 1]).unwrap();
    assert_eq!(circle.attributes["r"], "12");
}

#[test]
fn test_update_without_selection_is_ignored() {
    let mut session = EditorSession::new(DOC);
    assert!(!session.update_attribute("fill", "blue"));
    assert_eq!(session.document(), DOC);
}

#[test]
fn test_same_value_reports_no_change() {
    let mut session = EditorSession::new("<svg><rect x=\"1\"/></svg>");
    session.select(Some(vec![0]));
    assert!(!session.update_attribute("x", "1"));
}

#[test]
fn test_load_replaces_document_and_clears_selection() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![1]));
    session.load_document("<svg><ellipse/></svg>");

    assert!(session.selection().is_none());
    assert_eq!(session.structure().unwrap().children[0].tag_name, "ellipse");
}

#[test]
fn test_stale_selection_is_nothing_selected() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![0, 1]));
    session.set_document_text("<svg><g><rect/></g></svg>");

    assert_eq!(session.selection(), Some(&[0, 1][..]));
    assert!(session.selected_element().is_none());
    assert!(session.inspector().is_none());
    assert!(!session.update_attribute("r", "1"));
}

#[test]
fn test_unparseable_text_has_no_structure() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![0]));
    session.set_document_text("<svg><g></svg>");

    assert!(session.structure().is_none());
    assert!(session.selected_element().is_none());
    assert!(!session.update_attribute("fill", "red"));
    assert_eq!(session.document(), "<svg><g></svg>");
}

#[test]
fn test_selection_kept_by_default_after_edit() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![0, 7]));
    session.update_attribute("fill", "red");
    assert_eq!(session.selection(), Some(&[0, 7][..]));
}

#[test]
fn test_revalidation_clears_dangling_selection() {
    let mut session = EditorSession::new(DOC);
    session.set_revalidate_selection(true);
    session.select(Some(vec![0, 7]));
    session.update_attribute("fill", "red");
    assert!(session.selection().is_none());

    session.select(Some(vec![0, 0]));
    session.update_attribute("fill", "red");
    assert_eq!(session.selection(), Some(&[0, 0][..]));
}

#[test]
fn test_update_path_value() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![1]));

    assert!(session.update_path_value(1, 0, 99.0));
    let details = session.selected_element().unwrap();
    assert_eq!(details.d.as_deref(), Some("M10 20 L99 40 Z"));

    // out of range and non-finite values are ignored
    assert!(!session.update_path_value(2, 0, 1.0));
    assert!(!session.update_path_value(9, 0, 1.0));
    assert!(!session.update_path_value(0, 0, f64::NAN));
    assert_eq!(
        session.selected_element().unwrap().d.as_deref(),
        Some("M10 20 L99 40 Z")
    );
}

#[test]
fn test_path_edit_requires_path_selection() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![0, 0]));
    assert!(!session.update_path_value(0, 0, 1.0));
}

#[test]
fn test_strict_mode_blocks_edits_of_malformed_paths() {
    let text = "<svg><path d=\"M 5 2 L 1..2 5\"/></svg>";

    let mut permissive = EditorSession::new(text);
    permissive.select(Some(vec![0]));
    assert!(permissive.update_path_value(0, 0, 7.0));
    assert_eq!(
        permissive.selected_element().unwrap().d.as_deref(),
        Some("M7 2 LNaN 5")
    );

    let mut strict = EditorSession::new(text);
    strict.set_parse_mode(ParseMode::Strict);
    strict.select(Some(vec![0]));
    assert!(!strict.update_path_value(0, 0, 7.0));

    match strict.inspector() {
        Some(Inspector::Path {
            commands,
            parse_error,
            ..
        }) => {
            assert!(commands.is_empty());
            assert!(parse_error.unwrap().contains("1..2"));
        }
        other => panic!("expected a path inspector, got {:?}", other),
    }
}

#[test]
fn test_path_inspector() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![1]));

    let Some(Inspector::Path {
        commands,
        appearance,
        raw_d,
        parse_error,
    }) = session.inspector()
    else {
        panic!("expected a path inspector");
    };

    assert_eq!(raw_d, "M 10 20 L 30 40 Z");
    assert!(parse_error.is_none());
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0].name, "Move To (Abs)");
    assert_eq!(
        commands[1].params,
        vec![("x".to_string(), 30.0), ("y".to_string(), 40.0)]
    );
    assert!(commands[2].params.is_empty());

    assert_eq!(appearance.stroke, "#00f");
    assert_eq!(appearance.stroke_width, "2");
    assert_eq!(appearance.fill, "none");
    assert_eq!(appearance.opacity, "1");
}

#[test]
fn test_rect_inspector_defaults_missing_fields() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![0, 0]));

    let inspector = session.inspector().unwrap();
    assert_eq!(inspector.title(), "Rectangle Properties");
    let Inspector::Shape { fields, .. } = &inspector else {
        panic!("expected a shape inspector");
    };
    let values: Vec<(&str, &str)> = fields
        .iter()
        .map(|f| (f.attribute, f.value.as_str()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("x", "5"),
            ("y", "5"),
            ("width", "20"),
            ("height", "10"),
            ("rx", "0"),
            ("ry", "0"),
        ]
    );
    assert_eq!(inspector.appearance().fill, "#ff0000");
}

#[test]
fn test_elements_without_inspector() {
    let mut session = EditorSession::new(DOC);
    session.select(Some(vec![0]));
    assert!(session.inspector().is_none());

    let mut empty_path = EditorSession::new("<svg><path/></svg>");
    empty_path.select(Some(vec![0]));
    assert!(empty_path.inspector().is_none());
}

#[test]
fn test_swatch_colors() {
    assert_eq!(swatch_color("#abc"), "#abc");
    assert_eq!(swatch_color("none"), "#000000");
    assert_eq!(swatch_color("url(#fade)"), "#000000");
}

#[test]
fn test_export_file_name() {
    let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
    assert_eq!(
        EditorSession::export_file_name("vectorcraft", now),
        "vectorcraft-1700000000123.svg"
    );
}

#[test]
fn test_state_edit_flow() {
    let mut state = EditorState::new(EditorSession::new(DOC), Config::default());

    state.move_cursor_down();
    state.move_cursor_down();
    state.move_cursor_down();
    assert_eq!(state.cursor().path(), &[0, 1]);
    state.select_at_cursor();

    state.start_attribute_edit().unwrap();
    assert_eq!(state.prompt(), Some(PromptKind::Attribute));
    for c in "fill=#00ff00".chars() {
        state.push_to_edit_buffer(c);
    }
    assert!(state.commit_editing().unwrap());
    assert!(state.is_dirty());
    assert!(state.prompt().is_none());
    assert!(state
        .session()
        .document()
        .contains("<circle cx=\"50\" cy=\"50\" r=\"8\" fill=\"#00ff00\"/>"));
}

#[test]
fn test_state_path_prompt_rejects_non_paths() {
    let mut state = EditorState::new(EditorSession::new(DOC), Config::default());
    state.move_cursor_down();
    state.select_at_cursor();
    assert!(state.start_path_edit().is_err());
    assert!(state.prompt().is_none());
}

#[test]
fn test_state_picks_up_config() {
    let config = Config {
        path_parse_mode: "strict".to_string(),
        revalidate_selection: true,
        ..Config::default()
    };
    let state = EditorState::new(EditorSession::new(DOC), config);
    assert_eq!(state.session().parse_mode(), ParseMode::Strict);
}
