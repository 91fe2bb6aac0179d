//! 预导入模块，方便使用

pub use super::choices::{ActiveModel as ChoiceActiveModel, Entity as Choices, Model as ChoiceModel};
pub use super::materials::{
    ActiveModel as MaterialActiveModel, Entity as Materials, Model as MaterialModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::sections::{
    ActiveModel as SectionActiveModel, Entity as Sections, Model as SectionModel,
};
pub use super::tests::{ActiveModel as TestActiveModel, Entity as Tests, Model as TestModel};
pub use super::user_answers::{
    ActiveModel as UserAnswerActiveModel, Entity as UserAnswers, Model as UserAnswerModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
