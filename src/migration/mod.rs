pub mod attachments;
pub mod mapper;
pub mod milestones;
pub mod replay;

pub use attachments::archive_attachments;
pub use mapper::{map_issue, meta_comment};
pub use milestones::{distinct_fix_versions, provision_milestones};
pub use replay::replay_issue;
