pub mod render;
pub mod routes;

pub use routes::router;
