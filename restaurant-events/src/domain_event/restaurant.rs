//! 餐厅领域事件
//!
//! `RestaurantDeletedEvent` 表达"某餐厅已被删除"这一既成事实：构造后
//! 不可变，按标识值比较相等，可在任意线程间安全共享读取。
//! `RestaurantEvent` 将餐厅事件收敛为封闭的和类型，消费方据此做穷尽
//! 分发，无需依赖开放式的动态派发。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

use super::domain_event_trait::DomainEvent;

/// 餐厅删除事件：标识为 `id` 的餐厅已被删除
///
/// 业务方通过 [`RestaurantDeletedEvent::new`] 构造；`Default` 产生空白
/// 占位实例，仅服务于反序列化边界（先构造、后填充的框架形态），业务
/// 逻辑不应依赖它。线上字段名 `id` 一经发布即冻结，重命名属于破坏性
/// 变更，会使历史事件无法重放。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantDeletedEvent {
    id: String,
}

impl RestaurantDeletedEvent {
    /// 使用餐厅标识构造事件，空标识被拒绝
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::Validation {
                reason: "restaurant id must not be empty".to_string(),
            });
        }
        Ok(Self { id })
    }

    /// 餐厅标识
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for RestaurantDeletedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RestaurantDeletedEvent(id={})", self.id)
    }
}

/// 餐厅事件族（封闭集合）
///
/// 线上形态为 `kind` 标签加载荷字段，消费方按标签穷尽匹配。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RestaurantEvent {
    Deleted(RestaurantDeletedEvent),
}

impl RestaurantEvent {
    /// 构造删除事件并归入事件族
    pub fn deleted(id: impl Into<String>) -> DomainResult<Self> {
        Ok(Self::Deleted(RestaurantDeletedEvent::new(id)?))
    }

    /// 事件涉及的餐厅标识
    pub fn restaurant_id(&self) -> &str {
        match self {
            Self::Deleted(event) => event.id(),
        }
    }
}

impl From<RestaurantDeletedEvent> for RestaurantEvent {
    fn from(event: RestaurantDeletedEvent) -> Self {
        Self::Deleted(event)
    }
}

impl DomainEvent for RestaurantEvent {
    const AGGREGATE_TYPE: &'static str = "restaurant";

    fn event_type(&self) -> &str {
        match self {
            Self::Deleted(_) => "RestaurantEvent.Deleted",
        }
    }

    fn event_version(&self) -> usize {
        match self {
            Self::Deleted(_) => 1,
        }
    }
}

impl fmt::Display for RestaurantEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted(event) => event.fmt(f),
        }
    }
}
