//! 事件传输/存储形态（persist）
//!
//! 定义事件在传输与持久化层的标准形态（`SerializedEvent`）及其与
//! `EventEnvelope` 之间的转换。具体存储后端与事件仓储由上层提供实现，
//! 本模块只约定形态与转换规则。
//!
mod serialized_event;

pub use serialized_event::{SerializedEvent, deserialize_events, serialize_events};
