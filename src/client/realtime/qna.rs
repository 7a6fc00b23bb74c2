//! Realtime QnA channel
//!
//! Agents watch the wait queue and take tickets; once a ticket is matched,
//! both sides exchange replies on the ticket's thread.
//!
//! | Destination                  | Direction | Payload                  |
//! |------------------------------|-----------|--------------------------|
//! | `/sub/waitList`              | in        | [`QnaDelta`]             |
//! | `/user/queue/matched/qna`    | in        | [`QnaTicket`] now ours   |
//! | `/pub/take/waitQna/{id}`     | out       | `{"qnaId": id}`          |
//! | `/sub/qna/{id}`              | in        | [`QnaReply`]             |
//! | `/pub/qna/{id}/reply`        | out       | [`ReplyFrame`]           |

use crate::client::api::QnaApi;
use crate::client::error::ClientError;
use crate::client::realtime::broker::{Frame, MessageBroker};
use crate::shared::event::{decode_reply, QnaDelta, ReplyFrame};
use crate::shared::models::{QnaReply, QnaStatus, QnaTicket};
use crate::shared::SharedError;
use futures_util::stream::{BoxStream, SelectAll, StreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub mod destinations {
    pub const WAIT_LIST: &str = "/sub/waitList";
    pub const MATCHED: &str = "/user/queue/matched/qna";
    pub const THREAD_PREFIX: &str = "/sub/qna/";

    pub fn take(qna_id: i64) -> String {
        format!("/pub/take/waitQna/{}", qna_id)
    }

    pub fn thread(qna_id: i64) -> String {
        format!("{}{}", THREAD_PREFIX, qna_id)
    }

    pub fn reply(qna_id: i64) -> String {
        format!("/pub/qna/{}/reply", qna_id)
    }
}

/// Something that changed the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QnaEvent {
    WaitList(QnaDelta),
    Matched(QnaTicket),
    Reply(QnaReply),
}

/// Local view of the queue, assigned tickets and their threads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QnaBoard {
    waiting: Vec<QnaTicket>,
    assigned: Vec<QnaTicket>,
    replies: HashMap<i64, Vec<QnaReply>>,
}

impl QnaBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waiting(&self) -> &[QnaTicket] {
        &self.waiting
    }

    pub fn assigned(&self) -> &[QnaTicket] {
        &self.assigned
    }

    pub fn replies(&self, qna_id: i64) -> &[QnaReply] {
        self.replies.get(&qna_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fold one wait-queue delta into the list
    pub fn apply(&mut self, delta: QnaDelta) {
        match delta {
            QnaDelta::Reload(tickets) => self.waiting = tickets,
            QnaDelta::Add(ticket) => match self.position(ticket.qna_id) {
                Some(index) => self.waiting[index] = ticket,
                None => self.waiting.push(ticket),
            },
            QnaDelta::Remove(qna_id) => self.waiting.retain(|t| t.qna_id != qna_id),
            QnaDelta::Update(ticket) => {
                if let Some(index) = self.position(ticket.qna_id) {
                    self.waiting[index] = ticket;
                }
            }
        }
    }

    /// A ticket was assigned to us: it leaves the queue
    pub fn assign(&mut self, ticket: QnaTicket) {
        self.waiting.retain(|t| t.qna_id != ticket.qna_id);
        match self.assigned.iter().position(|t| t.qna_id == ticket.qna_id) {
            Some(index) => self.assigned[index] = ticket,
            None => self.assigned.push(ticket),
        }
    }

    pub fn push_reply(&mut self, reply: QnaReply) {
        self.replies.entry(reply.qna_id).or_default().push(reply);
    }

    /// Seed a thread from its REST history
    pub fn load_replies(&mut self, qna_id: i64, replies: Vec<QnaReply>) {
        self.replies.insert(qna_id, replies);
    }

    pub fn close(&mut self, qna_id: i64) {
        for ticket in self.assigned.iter_mut().filter(|t| t.qna_id == qna_id) {
            ticket.status = QnaStatus::Closed;
        }
    }

    fn position(&self, qna_id: i64) -> Option<usize> {
        self.waiting.iter().position(|t| t.qna_id == qna_id)
    }
}

pub struct QnaChannel {
    broker: Arc<dyn MessageBroker>,
    frames: SelectAll<BoxStream<'static, Frame>>,
    threads: HashSet<i64>,
    board: QnaBoard,
}

impl QnaChannel {
    /// Subscribe to the wait queue and to our matched-ticket queue
    pub async fn open(broker: Arc<dyn MessageBroker>) -> Result<Self, ClientError> {
        let mut frames = SelectAll::new();
        frames.push(broker.subscribe(destinations::WAIT_LIST).await?.into_stream());
        frames.push(broker.subscribe(destinations::MATCHED).await?.into_stream());
        tracing::info!("[QNA] Channel open");
        Ok(Self {
            broker,
            frames,
            threads: HashSet::new(),
            board: QnaBoard::new(),
        })
    }

    pub fn board(&self) -> &QnaBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut QnaBoard {
        &mut self.board
    }

    /// Replace the queue with the REST snapshot; deltas that arrive later
    /// apply on top of it
    pub async fn sync_wait_list(&mut self, api: &QnaApi) -> Result<(), ClientError> {
        let tickets = api.wait_list().await?;
        tracing::debug!("[QNA] Wait list snapshot: {} tickets", tickets.len());
        self.board.apply(QnaDelta::Reload(tickets));
        Ok(())
    }

    /// Join a ticket's thread and load its history
    pub async fn open_thread(&mut self, api: &QnaApi, qna_id: i64) -> Result<(), ClientError> {
        self.join_thread(qna_id).await?;
        let history = api.replies(qna_id).await?;
        self.board.load_replies(qna_id, history);
        Ok(())
    }

    /// Close a ticket on the server and mark it closed locally
    pub async fn close(&mut self, api: &QnaApi, qna_id: i64) -> Result<(), ClientError> {
        api.close(qna_id).await?;
        self.board.close(qna_id);
        Ok(())
    }

    /// Ask to take a waiting ticket; the assignment arrives on the matched queue
    pub async fn take(&self, qna_id: i64) -> Result<(), ClientError> {
        let body = serde_json::json!({ "qnaId": qna_id }).to_string();
        self.broker.publish(&destinations::take(qna_id), body).await?;
        tracing::info!("[QNA] Requested ticket {}", qna_id);
        Ok(())
    }

    /// Start receiving replies for a ticket
    pub async fn join_thread(&mut self, qna_id: i64) -> Result<(), ClientError> {
        if !self.threads.insert(qna_id) {
            return Ok(());
        }
        let subscription = self.broker.subscribe(&destinations::thread(qna_id)).await?;
        self.frames.push(subscription.into_stream());
        Ok(())
    }

    pub async fn send_reply(&self, qna_id: i64, content: &str) -> Result<(), ClientError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(SharedError::validation("content", "Message cannot be empty").into());
        }
        let body = serde_json::to_string(&ReplyFrame {
            content: content.to_string(),
        })?;
        self.broker.publish(&destinations::reply(qna_id), body).await
    }

    /// Wait for the next frame, fold it into the board and return it.
    /// Frames that do not decode are logged and skipped. `None` once every
    /// subscription has ended.
    pub async fn next_event(&mut self) -> Option<QnaEvent> {
        loop {
            let frame = self.frames.next().await?;
            match decode_frame(&frame) {
                Ok(event) => {
                    self.fold(event.clone());
                    return Some(event);
                }
                Err(err) => {
                    tracing::warn!("[QNA] Skipping frame on {}: {}", frame.destination, err);
                }
            }
        }
    }

    fn fold(&mut self, event: QnaEvent) {
        match event {
            QnaEvent::WaitList(delta) => {
                tracing::debug!("[QNA] Wait list {}", delta.tag());
                self.board.apply(delta);
            }
            QnaEvent::Matched(ticket) => {
                tracing::info!("[QNA] Ticket {} assigned", ticket.qna_id);
                self.board.assign(ticket);
            }
            QnaEvent::Reply(reply) => self.board.push_reply(reply),
        }
    }
}

pub fn decode_frame(frame: &Frame) -> Result<QnaEvent, SharedError> {
    match frame.destination.as_str() {
        destinations::WAIT_LIST => Ok(QnaEvent::WaitList(QnaDelta::decode(&frame.body)?)),
        destinations::MATCHED => Ok(QnaEvent::Matched(serde_json::from_str(&frame.body)?)),
        other if other.starts_with(destinations::THREAD_PREFIX) => {
            Ok(QnaEvent::Reply(decode_reply(&frame.body)?))
        }
        other => Err(SharedError::payload(format!("unexpected destination {}", other))),
    }
}
