pub mod dashboard;
pub mod mode;
pub mod render;
pub mod switch;

pub use dashboard::Dashboard;
pub use mode::DashboardMode;
pub use render::render_dashboard;
pub use switch::SwitchConfirm;
