pub mod create_blueprint_command;
pub mod delete_blueprint_command;
pub mod update_blueprint_command;

pub use create_blueprint_command::{CreateBlueprintCommand, CreateBlueprintResult};
pub use delete_blueprint_command::DeleteBlueprintCommand;
pub use update_blueprint_command::UpdateBlueprintCommand;
