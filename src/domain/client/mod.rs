pub mod outbound;

mod app;

pub use app::ApplicationCore;
