use vectorcraft::theme::{get_builtin_theme, list_builtin_themes};

#[test]
fn test_every_listed_theme_loads() {
    let names = list_builtin_themes();
    assert_eq!(names.len(), 5);
    for name in &names {
        let theme = get_builtin_theme(name).unwrap_or_else(|| panic!("{} missing", name));
        assert_eq!(&theme.name, name);
    }
}

#[test]
fn test_theme_list_is_sorted() {
    let names = list_builtin_themes();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_unknown_theme() {
    assert!(get_builtin_theme("solarized").is_none());
    assert!(get_builtin_theme("").is_none());
}

#[test]
fn test_themes_differ() {
    let dark = get_builtin_theme("default-dark").unwrap();
    let light = get_builtin_theme("default-light").unwrap();
    assert_ne!(dark.colors.background, light.colors.background);
}
