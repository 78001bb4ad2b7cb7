use chrono::Utc;
use uuid::Uuid;

use super::domain_event_trait::DomainEvent;
use super::event_context::EventContext;
use super::metadata::Metadata;

/// 事件信封，包含事件载荷、元数据与业务上下文
///
/// 发布方先完整构造信封，再交给传输层；消费方拿到的永远是
/// 构造完成的值，不存在可观察的中间状态。
#[derive(Debug, Clone)]
pub struct EventEnvelope<E>
where
    E: DomainEvent,
{
    pub metadata: Metadata,
    pub payload: E,
    pub context: EventContext,
}

impl<E> EventEnvelope<E>
where
    E: DomainEvent,
{
    /// 封装事件载荷，生成事件标识并记录发生时间
    pub fn new(aggregate_id: impl Into<String>, payload: E, context: EventContext) -> Self {
        let metadata = Metadata::builder()
            .event_id(Uuid::new_v4().to_string())
            .aggregate_id(aggregate_id.into())
            .aggregate_type(E::AGGREGATE_TYPE.to_string())
            .occurred_at(Utc::now())
            .build();

        Self {
            metadata,
            payload,
            context,
        }
    }
}
