mod cancel_research;
mod helpers;
mod hire_wizard;
mod select_faction;
mod start_construction;
mod start_research;
mod start_upgrade;

pub use cancel_research::CancelResearchCommandHandler;
pub use hire_wizard::HireWizardCommandHandler;
pub use select_faction::SelectFactionCommandHandler;
pub use start_construction::StartConstructionCommandHandler;
pub use start_research::StartResearchCommandHandler;
pub use start_upgrade::StartUpgradeCommandHandler;
