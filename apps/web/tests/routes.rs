use helphut_web::Route;

#[test]
fn known_paths_parse_to_their_routes() {
    assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
    assert_eq!("/login".parse::<Route>().ok(), Some(Route::Login {}));
    assert_eq!("/register".parse::<Route>().ok(), Some(Route::Register {}));
}

#[test]
fn unknown_paths_redirect_home() {
    for path in ["/unknown", "/signup", "/donor/dashboard"] {
        assert_eq!(path.parse::<Route>().ok(), Some(Route::Home {}), "{path}");
    }
}
