//! Declarative table of the application's navigable views.
//!
//! This is documentation-as-data: one entry per externally reachable view,
//! with `/` redirecting to the book list. The only dynamic segment is the
//! book id on the edit view.

/// Views a user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    BookList,
    BookAdd,
    BookEdit,
    LocationManage,
    BorrowPage,
    BorrowQuery,
    ReturnPage,
}

/// One navigable route: a path pattern and the view it renders.
#[derive(Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// Where `/` redirects to.
pub const ROOT_REDIRECT: &str = "/books";

/// All navigable routes. Order matters: more specific paths come first so
/// `/books/add` is never swallowed by `/books`.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/books/add",
        name: "BookAdd",
        view: View::BookAdd,
    },
    Route {
        path: "/books/edit/:id",
        name: "BookEdit",
        view: View::BookEdit,
    },
    Route {
        path: "/books",
        name: "BookList",
        view: View::BookList,
    },
    Route {
        path: "/locations",
        name: "LocationManage",
        view: View::LocationManage,
    },
    Route {
        path: "/borrow/query",
        name: "BorrowQuery",
        view: View::BorrowQuery,
    },
    Route {
        path: "/borrow",
        name: "BorrowPage",
        view: View::BorrowPage,
    },
    Route {
        path: "/return",
        name: "ReturnPage",
        view: View::ReturnPage,
    },
];

/// A resolved route with any captured path parameters.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteMatch<'p> {
    pub route: &'static Route,
    params: Vec<(&'static str, &'p str)>,
}

impl<'p> RouteMatch<'p> {
    /// Captured value of a `:name` segment, if present.
    pub fn param(&self, name: &str) -> Option<&'p str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

/// Resolve a path to its view, applying the root redirect.
pub fn resolve(path: &str) -> Option<RouteMatch<'_>> {
    let path = if path == "/" { ROOT_REDIRECT } else { path };
    ROUTES.iter().find_map(|route| match_path(route, path))
}

fn match_path<'p>(route: &'static Route, path: &'p str) -> Option<RouteMatch<'p>> {
    let mut params = Vec::new();
    let mut actual = path.trim_start_matches('/').split('/');

    for expected in route.path.trim_start_matches('/').split('/') {
        let segment = actual.next()?;
        if let Some(name) = expected.strip_prefix(':') {
            if segment.is_empty() {
                return None;
            }
            params.push((name, segment));
        } else if expected != segment {
            return None;
        }
    }

    if actual.next().is_some() {
        return None;
    }

    Some(RouteMatch { route, params })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_book_list() {
        let matched = resolve("/").expect("root resolves");
        assert_eq!(matched.route.view, View::BookList);
    }

    #[test]
    fn every_declared_path_resolves_to_its_view() {
        for route in ROUTES {
            // Substitute a concrete value for the dynamic segment.
            let concrete = route.path.replace(":id", "7");
            let matched = resolve(&concrete).expect("declared route resolves");
            assert_eq!(matched.route.view, route.view, "path {}", route.path);
        }
    }

    #[test]
    fn edit_route_captures_book_id() {
        let matched = resolve("/books/edit/42").expect("edit resolves");
        assert_eq!(matched.route.view, View::BookEdit);
        assert_eq!(matched.param("id"), Some("42"));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert!(resolve("/nope").is_none());
        assert!(resolve("/books/edit").is_none());
        assert!(resolve("/books/edit/1/extra").is_none());
    }

    #[test]
    fn static_routes_carry_no_params() {
        let matched = resolve("/borrow/query").expect("query resolves");
        assert_eq!(matched.route.view, View::BorrowQuery);
        assert_eq!(matched.param("id"), None);
    }
}
