pub mod american_football;
pub mod parsed_match;
pub mod soccer;
pub mod sport_format;
pub mod tennis;

pub use american_football::*;
pub use parsed_match::*;
pub use soccer::*;
pub use sport_format::*;
pub use tennis::*;
