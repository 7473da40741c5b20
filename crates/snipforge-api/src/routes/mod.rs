mod generate;
mod health;
mod prompts;
mod render;
mod rubric;
mod similarity;
mod snippets;

pub use generate::generate_routes;
pub use health::health_routes;
pub use prompts::prompt_routes;
pub use render::render_routes;
pub use rubric::rubric_routes;
pub use similarity::similarity_routes;
pub use snippets::snippet_routes;
