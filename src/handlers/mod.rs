pub mod health;
pub mod info;
pub mod view;
pub mod patient;
pub mod sort;

pub use health::health_handler;
pub use info::{about_handler, root_handler, status_handler};
pub use view::view_handler;
pub use patient::patient_handler;
pub use sort::sort_handler;
