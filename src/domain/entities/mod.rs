//! Domain entities - Plain values passed between colleagues and mediators

pub mod colleague_id;
pub mod message;

pub use colleague_id::ColleagueId;
pub use message::Message;
