//! The 1stNUP document and its topics and posts.

use crate::defaults::{DEFAULT_COMMUNITY_ID, DEFAULT_ICON, DEFAULT_MII, DEFAULT_TITLE_IDS};
use crate::error::FeedError;
use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

/// Most posts a document may carry, across all topics.
pub const MAX_POSTS: usize = 260;

/// Most topics a document may carry. Also the number of canned title ids
/// available, so this is a hard cap.
pub const MAX_TOPICS: usize = 10;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

// Escapes the console-side consumer expects as literal characters.
const UNESCAPES: [(&str, &str); 4] = [
    ("&#xA;", "\n"),
    ("&#10;", "\n"),
    ("&quot;", "\""),
    ("&apos;", "'"),
];

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Mood attached to a post, rendered as its numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub enum Feeling {
    #[default]
    Normal = 0,
    Dance = 1,
    Excited = 2,
    Shocked = 3,
    Angry = 4,
    Sad = 5,
}

impl Serialize for Feeling {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for Feeling {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Feeling::Normal),
            1 => Ok(Feeling::Dance),
            2 => Ok(Feeling::Excited),
            3 => Ok(Feeling::Shocked),
            4 => Ok(Feeling::Angry),
            5 => Ok(Feeling::Sad),
            other => Err(serde::de::Error::custom(format!(
                "unknown feeling id {other}"
            ))),
        }
    }
}

/// A single feed post. The `mii` field is an encoded record, opaque to the
/// document layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Post {
    pub body: String,
    pub community_id: u32,
    pub country_id: u32,
    pub created_at: String,
    pub feeling_id: Feeling,
    pub id: String,
    pub is_autopost: u32,
    #[serde(rename = "is_communityPrivateAutopost")]
    pub is_community_private_autopost: u32,
    pub is_spoiler: u32,
    pub is_app_jumpable: u32,
    pub empathy_count: String,
    pub language_id: u32,
    pub mii: String,
    pub mii_face_url: String,
    pub number: u32,
    pub painting: Painting,
    pub pid: String,
    pub platform_id: u32,
    pub region_id: u32,
    pub reply_count: u32,
    pub screen_name: String,
    pub title_id: String,
}

/// The painting block inside a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Painting {
    pub format: String,
    pub content: String,
    pub size: u32,
    pub url: String,
}

impl Post {
    fn blank(community_id: u32) -> Post {
        Post {
            body: "Blank post".to_owned(),
            community_id,
            country_id: 1,
            created_at: timestamp(),
            feeling_id: Feeling::Normal,
            id: String::new(),
            is_autopost: 0,
            is_community_private_autopost: 0,
            is_spoiler: 0,
            is_app_jumpable: 0,
            empathy_count: String::new(),
            language_id: 1,
            mii: DEFAULT_MII.to_owned(),
            mii_face_url: String::new(),
            number: 0,
            painting: Painting {
                url: "http://botu".to_owned(),
                ..Painting::default()
            },
            pid: String::new(),
            platform_id: 1,
            region_id: 0,
            reply_count: 0,
            screen_name: "Blank".to_owned(),
            title_id: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Posts {
    #[serde(default)]
    post: Vec<Post>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Person {
    posts: Posts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct People {
    person: Person,
}

/// One topic of the feed, holding its posts under `people/person/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    icon: String,
    title_id: u64,
    community_id: u32,
    is_recommended: u32,
    /// Display name, unique within a document.
    pub name: String,
    participant_count: u32,
    people: People,
    empathy_count: i32,
    has_shop_page: u32,
    modified_at: String,
    position: u32,
}

impl Topic {
    /// The topic's posts, in insertion order.
    pub fn posts(&self) -> &[Post] {
        &self.people.person.posts.post
    }
}

/// The 1stNUP result document.
///
/// Carries up to [`MAX_TOPICS`] named topics and [`MAX_POSTS`] posts in
/// total. Every record travels through it as an opaque encoded string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "result")]
pub struct Nup {
    version: u32,
    has_error: u32,
    request_name: String,
    expire: String,
    topics: Topics,
    #[serde(skip)]
    total_posts: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Topics {
    #[serde(default)]
    topic: Vec<Topic>,
}

impl Default for Nup {
    fn default() -> Self {
        Self::new()
    }
}

impl Nup {
    /// An empty document with the canned header values.
    pub fn new() -> Self {
        Nup {
            version: 1,
            has_error: 0,
            request_name: "topics".to_owned(),
            expire: "2100-01-01 10:00:00".to_owned(),
            topics: Topics::default(),
            total_posts: 0,
        }
    }

    /// Parse a rendered document back in.
    pub fn from_xml(xml: &str) -> Result<Self, FeedError> {
        let mut nup: Nup = quick_xml::de::from_str(xml)?;
        nup.total_posts = nup.topics.topic.iter().map(|t| t.posts().len()).sum();
        Ok(nup)
    }

    /// Append an empty topic. Each slot gets its canned title id and icon.
    pub fn add_topic(&mut self, name: &str) -> Result<(), FeedError> {
        let slot = self.topics.topic.len();
        if slot >= MAX_TOPICS {
            return Err(FeedError::TooManyTopics);
        }
        if self.topics.topic.iter().any(|t| t.name == name) {
            return Err(FeedError::DuplicateTopic(name.to_owned()));
        }

        self.topics.topic.push(Topic {
            icon: DEFAULT_ICON.to_owned(),
            title_id: DEFAULT_TITLE_IDS[slot],
            community_id: DEFAULT_COMMUNITY_ID,
            is_recommended: 0,
            name: name.to_owned(),
            participant_count: 0,
            people: People::default(),
            empathy_count: 0,
            has_shop_page: 0,
            modified_at: timestamp(),
            position: 2,
        });

        Ok(())
    }

    /// Look up a topic by name.
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.topic.iter().find(|t| t.name == name)
    }

    fn topic_mut(&mut self, name: &str) -> Result<&mut Topic, FeedError> {
        self.topics
            .topic
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(|| FeedError::UnknownTopic(name.to_owned()))
    }

    /// Remove a topic and everything in it.
    pub fn remove_topic(&mut self, name: &str) -> Result<(), FeedError> {
        let index = self
            .topics
            .topic
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| FeedError::UnknownTopic(name.to_owned()))?;
        self.total_posts -= self.topics.topic[index].posts().len();
        self.topics.topic.remove(index);
        Ok(())
    }

    /// Append a blank post to a topic and hand it back for filling in.
    pub fn add_post(&mut self, topic_name: &str) -> Result<&mut Post, FeedError> {
        if self.total_posts >= MAX_POSTS {
            return Err(FeedError::TooManyPosts);
        }
        let topic = self.topic_mut(topic_name)?;
        let community_id = topic.community_id;
        topic.people.person.posts.post.push(Post::blank(community_id));
        self.total_posts += 1;
        let topic = self.topic_mut(topic_name)?;
        Ok(topic
            .people
            .person
            .posts
            .post
            .last_mut()
            .expect("just pushed"))
    }

    /// Remove one post from a topic.
    pub fn remove_post(&mut self, topic_name: &str, index: usize) -> Result<(), FeedError> {
        let topic = self.topic_mut(topic_name)?;
        let posts = &mut topic.people.person.posts.post;
        if index >= posts.len() {
            return Err(FeedError::PostIndexOutOfRange {
                topic: topic_name.to_owned(),
                index,
            });
        }
        posts.remove(index);
        self.total_posts -= 1;
        Ok(())
    }

    /// Posts across all topics.
    pub fn post_count(&self) -> usize {
        self.total_posts
    }

    /// Stamp the same encoded record onto every post in the document.
    pub fn set_all_miis(&mut self, encoded: &str) {
        for topic in &mut self.topics.topic {
            for post in &mut topic.people.person.posts.post {
                post.mii = encoded.to_owned();
            }
        }
    }

    /// Render to an XML string with declaration header, indented two spaces.
    pub fn render(&self) -> Result<String, FeedError> {
        let mut body = String::new();
        let mut ser = quick_xml::se::Serializer::new(&mut body);
        ser.indent(' ', 2);
        self.serialize(ser)?;

        let mut out = String::with_capacity(XML_HEADER.len() + body.len());
        out.push_str(XML_HEADER);
        out.push_str(&body);
        for (target, replacement) in UNESCAPES {
            if out.contains(target) {
                out = out.replace(target, replacement);
            }
        }
        Ok(out)
    }

    /// Render and write to a file.
    pub fn render_to_file(&self, path: impl AsRef<Path>) -> Result<(), FeedError> {
        std::fs::write(path, self.render()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R = Result<(), FeedError>;

    #[test]
    fn fresh_document_renders_header_values() -> R {
        let nup = Nup::new();
        let xml = nup.render()?;
        assert!(xml.starts_with(XML_HEADER));
        assert!(xml.contains("<result>"));
        assert!(xml.contains("<version>1</version>"));
        assert!(xml.contains("<request_name>topics</request_name>"));
        assert!(xml.contains("<expire>2100-01-01 10:00:00</expire>"));
        Ok(())
    }

    #[test]
    fn topics_get_canned_slots() -> R {
        let mut nup = Nup::new();
        nup.add_topic("first")?;
        nup.add_topic("second")?;

        let xml = nup.render()?;
        assert!(xml.contains("<name>first</name>"));
        assert!(xml.contains(&format!("<title_id>{}</title_id>", DEFAULT_TITLE_IDS[0])));
        assert!(xml.contains(&format!("<title_id>{}</title_id>", DEFAULT_TITLE_IDS[1])));
        assert!(xml.contains("<community_id>4294967295</community_id>"));
        Ok(())
    }

    #[test]
    fn duplicate_and_unknown_topics_are_rejected() {
        let mut nup = Nup::new();
        nup.add_topic("t").unwrap();
        assert!(matches!(
            nup.add_topic("t"),
            Err(FeedError::DuplicateTopic(_))
        ));
        assert!(matches!(
            nup.add_post("missing"),
            Err(FeedError::UnknownTopic(_))
        ));
    }

    #[test]
    fn topic_cap_is_enforced() {
        let mut nup = Nup::new();
        for i in 0..MAX_TOPICS {
            nup.add_topic(&format!("topic {i}")).unwrap();
        }
        assert!(matches!(
            nup.add_topic("one more"),
            Err(FeedError::TooManyTopics)
        ));
    }

    #[test]
    fn posts_count_across_topics() -> R {
        let mut nup = Nup::new();
        nup.add_topic("a")?;
        nup.add_topic("b")?;
        nup.add_post("a")?;
        nup.add_post("b")?;
        nup.add_post("b")?;
        assert_eq!(nup.post_count(), 3);
        assert_eq!(nup.topic("b").unwrap().posts().len(), 2);

        nup.remove_post("b", 1)?;
        assert_eq!(nup.post_count(), 2);
        assert!(matches!(
            nup.remove_post("b", 5),
            Err(FeedError::PostIndexOutOfRange { index: 5, .. })
        ));

        nup.remove_topic("b")?;
        assert_eq!(nup.post_count(), 1);
        Ok(())
    }

    #[test]
    fn blank_posts_carry_the_placeholder_record() -> R {
        let mut nup = Nup::new();
        nup.add_topic("t")?;
        let post = nup.add_post("t")?;
        assert_eq!(post.body, "Blank post");
        assert_eq!(post.screen_name, "Blank");
        assert_eq!(post.painting.url, "http://botu");
        assert_eq!(post.mii, DEFAULT_MII);
        Ok(())
    }

    #[test]
    fn set_all_miis_touches_every_post() -> R {
        let mut nup = Nup::new();
        nup.add_topic("a")?;
        nup.add_topic("b")?;
        nup.add_post("a")?;
        nup.add_post("b")?;
        nup.set_all_miis("REPLACED");
        let xml = nup.render()?;
        assert!(!xml.contains(DEFAULT_MII));
        assert_eq!(xml.matches("<mii>REPLACED</mii>").count(), 2);
        Ok(())
    }

    #[test]
    fn render_parses_back() -> R {
        let mut nup = Nup::new();
        nup.add_topic("round trip")?;
        let post = nup.add_post("round trip")?;
        post.body = "hello".to_owned();
        post.feeling_id = Feeling::Excited;

        let parsed = Nup::from_xml(&nup.render()?)?;
        assert_eq!(parsed.post_count(), 1);
        let topic = parsed.topic("round trip").unwrap();
        assert_eq!(topic.posts()[0].body, "hello");
        assert_eq!(topic.posts()[0].feeling_id, Feeling::Excited);
        Ok(())
    }

    #[test]
    fn encoded_records_pass_through_untouched() -> R {
        let mii = wara_mii::Mii::create_random("feed seed", "wuhu", "plaza")
            .expect("generation cannot fail for short names");
        let mut nup = Nup::new();
        nup.add_topic("t")?;
        nup.add_post("t")?.mii = mii.encode();

        let parsed = Nup::from_xml(&nup.render()?)?;
        let carried = &parsed.topic("t").unwrap().posts()[0].mii;
        assert_eq!(
            wara_mii::Mii::from_encoded(carried).expect("still a record"),
            mii
        );
        Ok(())
    }
}
