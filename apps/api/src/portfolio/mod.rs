// Portfolio assembly (resume/export view) and the dashboard summary.

pub mod assembler;
pub mod dashboard;
pub mod handlers;

pub use assembler::{assemble_portfolio, PortfolioDocument};
pub use dashboard::{summarize_dashboard, DashboardSummary};
