//! UI Components
//!
//! Reusable Leptos components.

mod banner;
mod delete_confirm_modal;
mod filter_bar;
mod item_card;
mod nav_bar;
mod pagination_bar;
mod report_links;
mod tab_bar;

pub use banner::{BannerKind, BannerStack, Banners};
pub use delete_confirm_modal::DeleteConfirmModal;
pub use filter_bar::{FilterBar, CATEGORIES};
pub use item_card::ItemCard;
pub use nav_bar::NavBar;
pub use pagination_bar::PaginationBar;
pub use report_links::ReportLinks;
pub use tab_bar::TabBar;
