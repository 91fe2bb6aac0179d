pub mod answers;
pub mod auth;
pub mod choices;
pub mod materials;
pub mod questions;
pub mod sections;
pub mod tests;
pub mod users;

pub use answers::AnswerService;
pub use auth::AuthService;
pub use choices::ChoiceService;
pub use materials::MaterialService;
pub use questions::QuestionService;
pub use sections::SectionService;
pub use tests::TestService;
pub use users::UserService;
