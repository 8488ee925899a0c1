mod clock;
mod record;
mod session;

pub use clock::SessionClock;
pub use record::DrawingRecord;
pub use session::{Action, SessionState, reduce};
