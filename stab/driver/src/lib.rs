//! The session that drives a stabbing tree from a drawn set of intervals, through its
//! construction, to stabbing queries.

pub mod conf;
pub mod err;
pub mod session;
pub mod random;


pub use conf::Conf;
pub use err::*;
pub use session::{Label, Phase, Session};
