//! Message model: the tagged-variant record type and its partial-update shape.

pub mod model;
pub mod patch;

pub use model::{
    CardElement, CardElementKind, CardElementValue, Message, MessageBody, MessageKind, Sender,
};
pub use patch::MessagePatch;
