pub mod api;
pub mod models;
pub mod profile;

pub use models::{Gender, Match, MatchSummary, Message, Profile, Socials, User};
pub use profile::{ProfilePatch, Registration};
