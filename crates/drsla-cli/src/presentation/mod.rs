pub mod renderer;
pub mod style;
pub mod view_models;

pub use renderer::ConsoleRenderer;
pub use view_models::CommandResultViewModel;
