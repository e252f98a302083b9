use super::*;

#[test]
fn search_url_appends_trimmed_query() {
    let url = search_url("https://pixi.test/read", "  dune  ").unwrap();
    assert_eq!(url, "https://pixi.test/read?search=dune");
}

#[test]
fn search_url_replaces_existing_value_and_keeps_genre() {
    let url = search_url("https://pixi.test/read?genre=Fantasy&search=old", "new words").unwrap();
    assert_eq!(url, "https://pixi.test/read?genre=Fantasy&search=new+words");
}

#[test]
fn search_url_with_blank_query_keeps_empty_key() {
    let url = search_url("https://pixi.test/read", "   ").unwrap();
    assert_eq!(url, "https://pixi.test/read?search=");
}

#[test]
fn genre_filter_sets_parameter() {
    let url = genre_filter_url("https://pixi.test/read?search=x", Some("Science Fiction")).unwrap();
    assert_eq!(url, "https://pixi.test/read?search=x&genre=Science+Fiction");
}

#[test]
fn genre_filter_removes_parameter_when_empty() {
    let url = genre_filter_url("https://pixi.test/read?genre=Horror&search=x", Some("")).unwrap();
    assert_eq!(url, "https://pixi.test/read?search=x");
    let url = genre_filter_url("https://pixi.test/read?genre=Horror", None).unwrap();
    assert_eq!(url, "https://pixi.test/read");
}

#[test]
fn with_query_param_collapses_repeated_keys() {
    let url = with_query_param("https://pixi.test/?genre=a&x=1&genre=b", "genre", Some("c")).unwrap();
    assert_eq!(url, "https://pixi.test/?genre=c&x=1");
}

#[test]
fn with_query_param_rejects_relative_href() {
    assert!(with_query_param("/read", "genre", Some("a")).is_err());
}
