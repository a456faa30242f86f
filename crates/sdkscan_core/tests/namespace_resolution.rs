use sdkscan_core::{resolve, Loader, ResolutionError, SearchPath, TypeHandle, TypeRegistry};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

fn touch_unit(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn registry_of(names: &[&str]) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    for name in names {
        registry.register(TypeHandle::concrete(*name).build()).unwrap();
    }
    registry
}

fn names(found: &BTreeSet<TypeHandle>) -> Vec<String> {
    found.iter().map(|handle| handle.name().to_string()).collect()
}

#[test]
fn overlapping_roots_do_not_duplicate_types() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    touch_unit(first.path(), "com/acme/ext/AddAuditColumn.plugin");
    touch_unit(second.path(), "com/acme/ext/AddAuditColumn.plugin");
    touch_unit(second.path(), "com/acme/ext/DropAuditColumn.plugin");

    let loader = Loader::new(
        SearchPath::new([first.path(), second.path()]),
        registry_of(&[
            "com.acme.ext.AddAuditColumn",
            "com.acme.ext.DropAuditColumn",
        ]),
    );

    let found = resolve(&loader, ["com.acme.ext"]).unwrap();
    assert_eq!(
        names(&found),
        vec![
            "com.acme.ext.AddAuditColumn".to_string(),
            "com.acme.ext.DropAuditColumn".to_string(),
        ]
    );
}

#[test]
fn sub_namespace_reachable_twice_is_counted_once() {
    let root = tempfile::tempdir().unwrap();
    touch_unit(root.path(), "com/acme/Top.plugin");
    touch_unit(root.path(), "com/acme/nested/Inner.plugin");

    let loader = Loader::new(
        SearchPath::new([root.path()]),
        registry_of(&["com.acme.Top", "com.acme.nested.Inner"]),
    );

    let found = resolve(&loader, ["com.acme", "com.acme.nested"]).unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn empty_namespace_directory_still_descends() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("com/acme/empty")).unwrap();
    touch_unit(root.path(), "com/acme/deep/er/Leaf.plugin");

    let loader = Loader::new(
        SearchPath::new([root.path()]),
        registry_of(&["com.acme.deep.er.Leaf"]),
    );

    let found = resolve(&loader, ["com.acme"]).unwrap();
    assert_eq!(names(&found), vec!["com.acme.deep.er.Leaf".to_string()]);

    let found = resolve(&loader, ["com.acme.empty"]).unwrap();
    assert!(found.is_empty());
}

#[test]
fn namespace_without_contributing_root_contributes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let loader = Loader::new(SearchPath::new([root.path()]), TypeRegistry::new());

    let found = resolve(&loader, ["org.absent"]).unwrap();
    assert!(found.is_empty());
}

#[test]
fn empty_namespace_set_is_not_an_error() {
    let loader = Loader::new(
        SearchPath::new(["/nonexistent/sdkscan/root"]),
        TypeRegistry::new(),
    );
    let found = resolve(&loader, Vec::<&str>::new()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn unregistered_unit_fails_the_whole_resolution() {
    let root = tempfile::tempdir().unwrap();
    touch_unit(root.path(), "com/acme/good/Known.plugin");
    touch_unit(root.path(), "com/acme/stale/RenamedAway.plugin");

    let loader = Loader::new(
        SearchPath::new([root.path()]),
        registry_of(&["com.acme.good.Known"]),
    );

    let err = resolve(&loader, ["com.acme"]).unwrap_err();
    match err {
        ResolutionError::UnregisteredType { name, path } => {
            assert_eq!(name, "com.acme.stale.RenamedAway");
            assert!(path.ends_with("RenamedAway.plugin"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_search_root_fails_resolution() {
    let root = tempfile::tempdir().unwrap();
    let loader = Loader::new(
        SearchPath::new([root.path().to_path_buf(), root.path().join("gone")]),
        TypeRegistry::new(),
    );

    let err = resolve(&loader, ["com.acme"]).unwrap_err();
    assert!(matches!(err, ResolutionError::MissingSearchRoot(_)));
}

#[test]
fn custom_unit_extension_is_honored() {
    let root = tempfile::tempdir().unwrap();
    touch_unit(root.path(), "com/acme/Special.ext");
    touch_unit(root.path(), "com/acme/Ignored.plugin");

    let loader = Loader::new(
        SearchPath::new([root.path()]).with_unit_extension("ext"),
        registry_of(&["com.acme.Special"]),
    );

    let found = resolve(&loader, ["com.acme"]).unwrap();
    assert_eq!(names(&found), vec!["com.acme.Special".to_string()]);
}
