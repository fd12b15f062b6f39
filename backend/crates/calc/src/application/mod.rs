//! Application Layer - Use Cases

pub mod create_calculation;
pub mod delete_calculation;
pub mod get_calculation;
pub mod list_calculations;
pub mod report;
pub mod update_calculation;

pub use create_calculation::{CreateCalculationInput, CreateCalculationUseCase};
pub use delete_calculation::DeleteCalculationUseCase;
pub use get_calculation::GetCalculationUseCase;
pub use list_calculations::ListCalculationsUseCase;
pub use report::ReportUseCase;
pub use update_calculation::{UpdateCalculationInput, UpdateCalculationUseCase};
