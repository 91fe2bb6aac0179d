pub mod answers;

pub mod auth;

pub mod choices;

pub mod materials;

pub mod questions;

pub mod sections;

pub mod tests;

pub mod users;

pub use answers::configure_answer_routes;
pub use auth::configure_auth_routes;
pub use choices::configure_choice_routes;
pub use materials::configure_material_routes;
pub use questions::configure_question_routes;
pub use sections::configure_section_routes;
pub use tests::configure_test_routes;
pub use users::configure_user_routes;
