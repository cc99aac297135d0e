mod dashboard;

pub use dashboard::DashboardUseCases;
