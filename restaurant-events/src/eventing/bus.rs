//! 事件总线（EventBus）协议
//!
//! 发布方先完成事件构造，再通过 `publish` 移交；移交之后事件可被任意
//! 数量的消费方并发读取。订阅返回 'static 生命周期事件流，便于在异步
//! 运行时（如 tokio::spawn）中消费。
//!
use crate::{error::DomainResult as Result, persist::SerializedEvent};
use async_trait::async_trait;
use futures_core::stream::BoxStream;

/// 事件总线：负责分发事件与订阅事件流
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, event: &SerializedEvent) -> Result<()>;

    async fn publish_batch(&self, events: &[SerializedEvent]) -> Result<()> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }

    /// 返回一个 'static 生命周期的事件流
    async fn subscribe(&self) -> BoxStream<'static, Result<SerializedEvent>>;
}
