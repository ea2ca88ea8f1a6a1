//! Domain entities

mod message;
mod post;
mod profile;
mod reaction;
mod reply;
mod view_marker;

pub use message::Message;
pub use post::Post;
pub use profile::UserProfile;
pub use reaction::ReactionEvent;
pub use reply::Reply;
pub use view_marker::PostViewMarker;
