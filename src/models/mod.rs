mod filter;
mod results;
mod session;
mod suggestions;

pub use filter::{FilterEntry, FilterList};
pub use results::{QueryTracker, ResultState};
pub use session::{FilterSession, QueryTicket};
pub use suggestions::RowValueSuggestions;
