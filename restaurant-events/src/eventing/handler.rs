//! 事件处理器（EventHandler）
//!
//! 定义消费某类/多类/全部事件的处理逻辑与元信息（名称、订阅类型）。
//! 投递语义为"至少一次"，处理器必须容忍重复投递：对同一删除事件的
//! 重复处理应当是空操作。
//!
use crate::persist::SerializedEvent;
use async_trait::async_trait;

#[derive(Clone, Debug)]
pub enum HandledEventType {
    One(String),
    Many(Vec<String>),
    All,
}

impl HandledEventType {
    /// 判断给定类型的事件是否在订阅范围内
    pub fn handles(&self, event_type: &str) -> bool {
        match self {
            Self::One(subscribed) => subscribed == event_type,
            Self::Many(subscribed) => subscribed.iter().any(|t| t == event_type),
            Self::All => true,
        }
    }
}

/// 事件处理器：处理某一类型的事件
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// 处理器名称（用于失败标记与审计）
    fn handler_name(&self) -> &str;
    /// 返回该处理器支持的事件类型
    fn handled_event_type(&self) -> HandledEventType;
    /// 处理事件
    async fn handle(&self, event: &SerializedEvent) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // 订阅范围匹配
    #[test]
    fn test_handled_event_type_matching() {
        let one = HandledEventType::One("RestaurantEvent.Deleted".to_string());
        assert!(one.handles("RestaurantEvent.Deleted"));
        assert!(!one.handles("RestaurantEvent.Created"));

        let many = HandledEventType::Many(vec![
            "RestaurantEvent.Deleted".to_string(),
            "RestaurantEvent.Created".to_string(),
        ]);
        assert!(many.handles("RestaurantEvent.Created"));
        assert!(!many.handles("OrderEvent.Placed"));

        assert!(HandledEventType::All.handles("anything"));
    }
}
