//! Property-based tests for the QnA wait-queue board

use proptest::prelude::*;
use routine_hub::client::realtime::QnaBoard;
use routine_hub::shared::models::{QnaStatus, QnaTicket};
use routine_hub::shared::QnaDelta;

fn ticket(id: i64, revision: u8) -> QnaTicket {
    QnaTicket {
        qna_id: id,
        user_id: id,
        nickname: None,
        title: format!("ticket {} rev {}", id, revision),
        content: String::new(),
        status: QnaStatus::Waiting,
        agent_id: None,
        created_at: None,
    }
}

fn delta() -> impl Strategy<Value = QnaDelta> {
    prop_oneof![
        proptest::collection::vec((0i64..8, any::<u8>()), 0..5)
            .prop_map(|items| QnaDelta::Reload(items.into_iter().map(|(id, r)| ticket(id, r)).collect())),
        (0i64..8, any::<u8>()).prop_map(|(id, r)| QnaDelta::Add(ticket(id, r))),
        (0i64..8).prop_map(QnaDelta::Remove),
        (0i64..8, any::<u8>()).prop_map(|(id, r)| QnaDelta::Update(ticket(id, r))),
    ]
}

proptest! {
    #[test]
    fn test_removed_ticket_is_absent(deltas in proptest::collection::vec(delta(), 0..30), id in 0i64..8) {
        let mut board = QnaBoard::new();
        for delta in deltas {
            board.apply(delta);
        }
        board.apply(QnaDelta::Remove(id));
        prop_assert!(board.waiting().iter().all(|t| t.qna_id != id));
    }

    #[test]
    fn test_adds_never_duplicate_ids(adds in proptest::collection::vec((0i64..8, any::<u8>()), 0..30)) {
        let mut board = QnaBoard::new();
        for (id, revision) in adds {
            board.apply(QnaDelta::Add(ticket(id, revision)));
        }
        let mut ids: Vec<_> = board.waiting().iter().map(|t| t.qna_id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }
}
