//! Display-path normalization cases.

use cascade::hir::document_path;
use rstest::rstest;

#[rstest]
#[case("/styles/a.less", "/styles/b.less", Some("b.less"))]
#[case("/styles/a.less", "/styles/vendor/grid.less", Some("vendor/grid.less"))]
#[case("/styles/nested/a.less", "/styles/b.less", Some("../b.less"))]
#[case("a.less", "b.less", Some("b.less"))]
#[case("a.less", "/abs/b.less", Some("/abs/b.less"))]
#[case("/styles/a.less", "/styles/a.less", None)]
#[case("a.less", "./a.less", None)]
fn test_document_path(
    #[case] current: &str,
    #[case] declaring: &str,
    #[case] expected: Option<&str>,
) {
    let location = document_path(current, declaring);
    match expected {
        Some(path) => assert_eq!(location.as_path(), Some(path)),
        None => assert!(location.is_current(), "expected Current, got {location:?}"),
    }
}
