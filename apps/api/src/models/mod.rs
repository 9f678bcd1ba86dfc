pub mod dates;
pub mod job;
pub mod project;
pub mod skill;
pub mod user;

pub use job::{JobListing, Requirement};
pub use project::Project;
pub use skill::{Certificate, ProficiencyEntry, RawCertificate, RawProficiencyEntry, RawSkill, Skill};
pub use user::UserProfile;
