//! Fetchers: one per source kind, each turning a reading into a fragment

pub mod clock;
pub mod external;
pub mod hardware;
pub mod sensors;
