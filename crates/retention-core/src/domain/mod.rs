//! Domain model (snapshot, sentiment, incentive, customer, ...).
//!
//! ここにある型はすべて I/O を持たない。外部協調者の出力は
//! 境界で一度だけ型付きの値にデコードされる。

pub mod advice;
pub mod customer;
pub mod errors;
pub mod ids;
pub mod incentive;
pub mod message;
pub mod sentiment;
pub mod snapshot;

pub use advice::Advice;
pub use customer::{CustomerRecord, Phone};
pub use errors::{ErrorKind, Result, RetentionError};
pub use ids::{AdviceId, Id, IdMarker};
pub use incentive::{Incentive, Recommendation, RuleId};
pub use message::{CustomerMessage, MAX_MESSAGE_BYTES};
pub use sentiment::{SentimentAssessment, SentimentLabel};
pub use snapshot::InteractionSnapshot;
