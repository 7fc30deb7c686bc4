//! Menu Module
//!
//! Interactive text front end over a [`Store`](crate::Store).
//!
//! ## Responsibilities
//! - Show the single-key menu and map keys to actions
//! - Prompt for record fields, re-prompting until input is valid
//! - Render responses for display
//!
//! Everything is generic over `BufRead` / `Write`, so sessions can be driven
//! from tests with in-memory buffers.
//!
//! ## Keys
//! | Key   | Action                        |
//! |-------|-------------------------------|
//! | a     | Add record                    |
//! | e     | Edit record                   |
//! | d     | Delete record                 |
//! | s     | Show all records              |
//! | f     | Find by last transaction date |
//! | o     | Order by balance              |
//! | Enter | Exit                          |

mod prompt;
mod render;
mod session;

pub use prompt::Prompter;
pub use render::write_response;
pub use session::{MenuAction, Session};
