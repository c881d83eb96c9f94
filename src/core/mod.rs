pub mod input_filter;
pub mod validator;

pub use crate::domain::model::{RejectReason, TransferOutcome, TransferRequest};
pub use crate::domain::money::{Money, ParseMoneyError};
pub use crate::domain::ports::{InputFilter, TransferPolicy};
pub use input_filter::{accept, NumericInputFilter};
pub use validator::{evaluate, TransferValidator};
