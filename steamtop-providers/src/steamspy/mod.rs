//! SteamSpy top-list source.
//!
//! `GET https://steamspy.com/api.php?request=top100in2weeks` returns the
//! most-played apps of the last two weeks as a JSON object keyed by app id.
//! [`SteamSpyTopList`] reads the first N keys in ranking order.

mod api;
pub(crate) mod parser;

pub use api::SteamSpyTopList;
pub use parser::parse_top_ids;
