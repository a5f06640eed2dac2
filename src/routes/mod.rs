pub mod analyze_route;
pub mod api_route;
pub mod default_route;
pub mod health_route;
pub mod page;
