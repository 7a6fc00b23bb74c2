//! Server payloads
//!
//! Plain DTOs decoded at the network boundary. Wire names are camelCase; all
//! referential and uniqueness rules live on the server.

pub mod admin;
pub mod category;
pub mod list;
pub mod plan;
pub mod qna;
pub mod social;
pub mod user;

pub use admin::{AdminUser, BanChange, Report, ReportDecision, ReportStatus, ReportTarget, RoleChange};
pub use category::{Category, CategoryKind, NewIcon};
pub use list::{ListEnvelope, Page};
pub use plan::{Activity, ActivityProgress, Plan, PlanForm};
pub use qna::{NewQna, QnaReply, QnaStatus, QnaTicket};
pub use social::{LikeStatus, NewReview, Review, SearchLog};
pub use user::{LoginRequest, ProfileUpdate, Role, SignupRequest, TokenBody, UserInfo};
