use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// 领域事件载荷需要满足的通用能力边界
///
/// 载荷只描述"发生了什么"，不携带事件标识、发生时间等元数据；
/// 这些由 `EventEnvelope` 在发布侧统一补齐。
pub trait DomainEvent:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// 事件所属的聚合类型（形如 `restaurant`）
    const AGGREGATE_TYPE: &'static str;

    /// 事件类型（形如 `RestaurantEvent.Deleted`）
    fn event_type(&self) -> &str;

    /// 事件载荷版本（用于版本兼容与重放）
    fn event_version(&self) -> usize;
}
