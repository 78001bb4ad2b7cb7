//! 内存总线端到端示例：
//! 构造删除事件 -> 信封 -> 序列化 -> 发布 -> 幂等消费更新读模型。
//! 同一事件发布两次，演示"至少一次"投递下读模型保持稳定。

use async_trait::async_trait;
use futures_util::StreamExt;
use restaurant_events::domain_event::{EventContext, EventEnvelope, RestaurantEvent};
use restaurant_events::eventing::{EventBus, EventHandler, HandledEventType, InMemoryEventBus};
use restaurant_events::persist::{SerializedEvent, serialize_events};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// 读模型投影（EventHandler）
// ============================================================================

#[derive(Clone, Default)]
struct RestaurantDirectory {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl RestaurantDirectory {
    fn insert(&self, id: &str, name: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(id.to_string(), name.to_string());
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl EventHandler for RestaurantDirectory {
    fn handler_name(&self) -> &str {
        "restaurant-directory"
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::One("RestaurantEvent.Deleted".to_string())
    }

    async fn handle(&self, event: &SerializedEvent) -> anyhow::Result<()> {
        let payload: RestaurantEvent = serde_json::from_value(event.payload().clone())?;
        match payload {
            RestaurantEvent::Deleted(deleted) => {
                // 条目不存在时 remove 即空操作，重复投递由此天然幂等
                self.entries.lock().unwrap().remove(deleted.id());
            }
        }
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let directory = RestaurantDirectory::default();
    directory.insert("r-1", "Trattoria Uno");
    directory.insert("r-2", "Sushi Ni");
    println!("directory before: {} entries", directory.len());

    let bus = InMemoryEventBus::new(16);
    let mut stream = bus.subscribe().await;

    // 删除动作落定，构造事件并发布
    let envelope = EventEnvelope::new(
        "r-1",
        RestaurantEvent::deleted("r-1")?,
        EventContext::builder()
            .maybe_actor_type(Some("system".into()))
            .build(),
    );
    let serialized = serialize_events(&[envelope])?;

    bus.publish(&serialized[0]).await?;
    // 再投一次，模拟"至少一次"语义下的重复投递
    bus.publish(&serialized[0]).await?;

    for _ in 0..2 {
        let event = stream.next().await.expect("bus closed")?;
        if directory.handled_event_type().handles(event.event_type()) {
            directory.handle(&event).await?;
        }
        println!(
            "consumed {} for aggregate {}, directory now {} entries",
            event.event_type(),
            event.aggregate_id(),
            directory.len()
        );
    }

    Ok(())
}
