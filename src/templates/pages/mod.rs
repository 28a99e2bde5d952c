pub mod complaints;
pub mod home;
pub mod submit;

pub use complaints::{complaints_page, ComplaintsVm};
pub use home::home_page;
pub use submit::submit_page;
