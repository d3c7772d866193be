use super::*;

fn favs(slugs: &[&str]) -> Favorites {
    slugs.iter().copied().collect()
}

// =============================================================
// Membership
// =============================================================

#[test]
fn new_set_is_empty() {
    let set = Favorites::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn insert_ignores_duplicates() {
    let mut set = Favorites::new();
    assert!(set.insert("alpha"));
    assert!(!set.insert("alpha"));
    assert_eq!(set.len(), 1);
}

#[test]
fn remove_reports_whether_slug_was_present() {
    let mut set = favs(&["alpha"]);
    assert!(!set.remove("beta"));
    assert!(set.remove("alpha"));
    assert!(set.is_empty());
}

#[test]
fn toggle_adds_then_removes() {
    let mut set = Favorites::new();
    assert!(set.toggle("alpha"));
    assert!(set.contains("alpha"));
    assert!(!set.toggle("alpha"));
    assert!(!set.contains("alpha"));
}

#[test]
fn double_toggle_restores_original_membership() {
    let original = favs(&["alpha", "beta"]);
    for slug in ["alpha", "gamma"] {
        let mut set = original.clone();
        set.toggle(slug);
        set.toggle(slug);
        assert_eq!(set, original);
    }
}

// =============================================================
// Ordering and equality
// =============================================================

#[test]
fn toggled_slug_is_appended_last() {
    let mut set = favs(&["alpha", "beta"]);
    set.toggle("gamma");
    assert_eq!(set.to_vec(), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn equality_ignores_order() {
    assert_eq!(favs(&["alpha", "beta"]), favs(&["beta", "alpha"]));
    assert_ne!(favs(&["alpha"]), favs(&["alpha", "beta"]));
}

#[test]
fn collecting_drops_duplicates() {
    let set = favs(&["alpha", "beta", "alpha"]);
    assert_eq!(set.to_vec(), vec!["alpha", "beta"]);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serializes_as_plain_json_array() {
    let json = serde_json::to_string(&favs(&["alpha", "beta"])).unwrap();
    assert_eq!(json, r#"["alpha","beta"]"#);
}

#[test]
fn deserialize_collapses_duplicates() {
    let set: Favorites = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
    assert_eq!(set.to_vec(), vec!["a", "b"]);
}

#[test]
fn deserialize_rejects_non_string_members() {
    assert!(serde_json::from_str::<Favorites>("[1,2]").is_err());
}
