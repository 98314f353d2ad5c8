pub mod amenity;
pub mod pricing;
pub mod gallery;

pub use amenity::{classify, AmenityCategory, AmenityRule, AMENITY_RULES};
pub use pricing::{format_currency, format_stay_date, group_thousands, nights_between, StarRating};
pub use gallery::ImageGallery;
