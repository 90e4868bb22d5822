//! UI Components
//!
//! One file per widget or page, flat.

mod carousel;
mod catalog;
mod hero;
mod home;
mod list_toggle;
mod login;
mod my_list;
mod my_ratings;
mod rating;
mod recommendations;
mod search;
mod series_card;
mod series_detail;
mod signup;
mod similar;
mod synopsis;

pub use carousel::CarouselRow;
pub use catalog::CatalogLoader;
pub use hero::HeroSlideshow;
pub use home::HomePage;
pub use list_toggle::ListToggleButton;
pub use login::LoginPage;
pub use my_list::MyListPage;
pub use my_ratings::MyRatingsPage;
pub use rating::RatingStars;
pub use recommendations::PersonalRecommendations;
pub use search::{SearchBar, SearchResultsView};
pub use series_card::SeriesCard;
pub use series_detail::SeriesDetailPage;
pub use signup::SignupPage;
pub use similar::SimilarSeries;
pub use synopsis::SynopsisBlock;
