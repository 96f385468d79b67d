pub mod key_object;
pub mod museum;
pub mod section;
pub mod tour;

pub use key_object::KeyObject;
pub use museum::Museum;
pub use section::Section;
pub use tour::{Tour, TourSection};
