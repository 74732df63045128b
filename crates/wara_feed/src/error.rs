use crate::document::{MAX_POSTS, MAX_TOPICS};
use thiserror::Error;

/// Errors returned by feed document operations.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The document already holds the maximum number of topics.
    #[error("a feed can hold no more than {MAX_TOPICS} topics")]
    TooManyTopics,

    /// A topic with this name is already present.
    #[error("topic `{0}` already exists")]
    DuplicateTopic(String),

    /// No topic with this name.
    #[error("no topic named `{0}`")]
    UnknownTopic(String),

    /// The document already holds the maximum number of posts.
    #[error("a feed can hold no more than {MAX_POSTS} posts")]
    TooManyPosts,

    /// A post index past the end of a topic.
    #[error("post index {index} out of range for topic `{topic}`")]
    PostIndexOutOfRange {
        /// The addressed topic.
        topic: String,
        /// The rejected index.
        index: usize,
    },

    /// The document did not serialize.
    #[error("could not render document: {0}")]
    Render(#[from] quick_xml::SeError),

    /// The input was not a feed document.
    #[error("could not read document: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// Writing the rendered document failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
