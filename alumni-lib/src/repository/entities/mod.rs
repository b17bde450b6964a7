//! Domain records for the graduate directory.
//!
//! A [`Profile`] is a plain value: it is built once by the form assembler, stored in the roster
//! and never mutated in place.

mod gender;
mod profile;
mod profile_id;
mod sections;
mod social;

pub use gender::Gender;
pub use profile::Profile;
pub use profile_id::ProfileId;
pub use sections::{Certification, ContactInfo, Education, Experience, Language, Project};
pub use social::SocialChannel;
