pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, complaint_card, notice_banner, Notice};
pub use layouts::desktop::desktop_layout;
