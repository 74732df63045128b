//! The WaraWara Plaza `1stNUP` feed document.
//!
//! The plaza boots from a single XML document listing up to ten topics, each
//! holding posts with an encoded Mii record attached. [`Nup`] models that
//! document: build it up topic by topic, fill in posts, and [`Nup::render`]
//! it with the exact declaration header and escaping the console accepts.
//!
//! ```
//! use wara_feed::Nup;
//!
//! let mut nup = Nup::new();
//! nup.add_topic("my topic").unwrap();
//! nup.add_post("my topic").unwrap().body = "hello plaza".to_owned();
//! let xml = nup.render().unwrap();
//! assert!(xml.contains("hello plaza"));
//! ```

mod defaults;
mod document;
mod error;

pub use document::{Feeling, Nup, Painting, Post, Topic, MAX_POSTS, MAX_TOPICS};
pub use error::FeedError;
