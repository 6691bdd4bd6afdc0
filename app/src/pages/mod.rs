pub(crate) mod day;
pub(crate) mod index;
pub(crate) mod not_found;

pub use self::day::DayPage;
pub use self::index::IndexPage;
pub use self::not_found::NotFoundPage;
