//! Application Entry View
//!
//! Resolves the current location to one page component. Routing proper
//! stays server-side; this only decides which controllers to mount.

use leptos::prelude::*;

use crate::components::{
    HomePage, LoginPage, MyListPage, MyRatingsPage, SeriesDetailPage, SignupPage,
};
use crate::page_data;
use crate::toast::{provide_toasts, ToastHost};

/// Pages this bundle knows how to drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    SeriesDetail(u32),
    MyList,
    MyRatings,
}

impl Route {
    /// Map a location path to a page. Unknown paths fall back to the home
    /// catalog view.
    pub fn parse(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/mylist" => Self::MyList,
            "/myratings" => Self::MyRatings,
            path => match path.strip_prefix("/series/").and_then(|id| id.parse().ok()) {
                Some(id) => Self::SeriesDetail(id),
                None => Self::Home,
            },
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_toasts();
    let route = Route::parse(&page_data::current_path());

    view! {
        <ToastHost />
        {match route {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Signup => view! { <SignupPage /> }.into_any(),
            Route::SeriesDetail(serie_id) => view! { <SeriesDetailPage serie_id /> }.into_any(),
            Route::MyList => view! { <MyListPage /> }.into_any(),
            Route::MyRatings => view! { <MyRatingsPage /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/signup"), Route::Signup);
        assert_eq!(Route::parse("/mylist"), Route::MyList);
        assert_eq!(Route::parse("/myratings"), Route::MyRatings);
        assert_eq!(Route::parse("/series/42"), Route::SeriesDetail(42));
        assert_eq!(Route::parse("/series/42/"), Route::SeriesDetail(42));
    }

    #[test]
    fn test_route_parse_fallback() {
        assert_eq!(Route::parse("/series/abc"), Route::Home);
        assert_eq!(Route::parse("/unknown"), Route::Home);
    }
}
