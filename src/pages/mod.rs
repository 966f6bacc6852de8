//! Pages
//!
//! One component per navigation entry.

mod dashboard;
mod home;
mod report;
mod view_items;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use report::ReportPage;
pub use view_items::ViewItemsPage;
