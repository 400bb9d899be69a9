#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(condense::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!condense::VERSION.is_empty());
}
