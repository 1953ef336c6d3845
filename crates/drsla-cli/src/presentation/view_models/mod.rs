mod analyze;
mod codes;
mod duration;
mod result;
mod rpo;

pub use analyze::FleetReportViewModel;
pub use codes::CodeListViewModel;
pub use duration::DurationViewModel;
pub use result::CommandResultViewModel;
pub use rpo::RpoViewModel;
