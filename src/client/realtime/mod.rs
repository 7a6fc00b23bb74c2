//! Realtime QnA over a message broker

pub mod broker;
pub mod qna;

pub use broker::{Frame, MemoryBroker, MessageBroker, Subscription};
pub use qna::{QnaBoard, QnaChannel, QnaEvent};
