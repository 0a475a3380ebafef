use super::*;

#[test]
fn normalize_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("https://api.example.org/"), "https://api.example.org");
    assert_eq!(normalize_base_url("https://api.example.org///"), "https://api.example.org");
}

#[test]
fn normalize_trims_whitespace() {
    assert_eq!(normalize_base_url("  http://localhost:8001  "), "http://localhost:8001");
}

#[test]
fn normalize_keeps_empty_as_same_origin() {
    assert_eq!(normalize_base_url(""), "");
    assert_eq!(normalize_base_url("/"), "");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn base_url_outside_browser_comes_from_build_env() {
    let expected = normalize_base_url(option_env!("HUB_BACKEND_URL").unwrap_or_default());
    assert_eq!(backend_base_url(), expected);
}
