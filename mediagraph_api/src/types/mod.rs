mod envelope;
pub use self::envelope::{ErrorBody, MessageEnvelope, MessagesEnvelope, PageInfo, Sort};

mod message;
pub use self::message::{Image, ImageSet, Message, Series};
