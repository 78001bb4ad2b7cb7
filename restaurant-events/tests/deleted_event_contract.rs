//! 删除事件对外契约的端到端校验：
//! 构造 -> 信封 -> 序列化形态 -> JSON 文本 -> 读回，全程保持标识与
//! 相等性语义不变。

use restaurant_events::domain_event::{
    EventContext, EventEnvelope, RestaurantDeletedEvent, RestaurantEvent,
};
use restaurant_events::error::DomainError;
use restaurant_events::persist::{SerializedEvent, deserialize_events, serialize_events};

// 构造 -> JSON -> 解析，与直接构造的实例相等
#[test]
fn construct_serialize_parse_equal() {
    let event = RestaurantDeletedEvent::new("r-42").unwrap();

    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"id":"r-42"}"#);

    let parsed: RestaurantDeletedEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.id(), "r-42");
    assert_eq!(parsed, RestaurantDeletedEvent::new("r-42").unwrap());
}

// 完整链路：信封封装、序列化形态、JSON 文本往返
#[test]
fn envelope_wire_roundtrip_preserves_identity() {
    let envelope = EventEnvelope::new(
        "r-7",
        RestaurantEvent::deleted("r-7").unwrap(),
        EventContext::builder()
            .maybe_correlation_id(Some("order-flow-1".into()))
            .maybe_actor_type(Some("system".into()))
            .build(),
    );

    let serialized = serialize_events(&[envelope.clone()]).unwrap();
    let text = serde_json::to_string(&serialized[0]).unwrap();
    let stored: SerializedEvent = serde_json::from_str(&text).unwrap();

    assert_eq!(stored.event_id(), envelope.metadata.event_id());
    assert_eq!(stored.event_type(), "RestaurantEvent.Deleted");
    assert_eq!(stored.aggregate_id(), "r-7");

    let restored = deserialize_events::<RestaurantEvent>(&[stored]).unwrap();
    assert_eq!(restored[0].payload, envelope.payload);
    assert_eq!(restored[0].payload.restaurant_id(), "r-7");
    assert_eq!(restored[0].context.correlation_id(), Some("order-flow-1"));
}

// 重放历史存量记录：按当年写入的字段名读回
#[test]
fn replay_of_stored_record_is_stable() {
    let raw = r#"{
        "event_id": "c7b5f7a0-0000-4000-8000-000000000001",
        "event_type": "RestaurantEvent.Deleted",
        "event_version": 1,
        "sequence_number": 42,
        "aggregate_id": "r-legacy",
        "aggregate_type": "restaurant",
        "correlation_id": null,
        "causation_id": null,
        "actor_type": "system",
        "actor_id": null,
        "occurred_at": "2024-11-05T08:30:00Z",
        "payload": { "kind": "Deleted", "id": "r-legacy" },
        "context": {}
    }"#;

    let stored: SerializedEvent = serde_json::from_str(raw).unwrap();
    assert_eq!(stored.sequence_number(), Some(42));

    let restored = deserialize_events::<RestaurantEvent>(&[stored]).unwrap();
    match &restored[0].payload {
        RestaurantEvent::Deleted(deleted) => assert_eq!(deleted.id(), "r-legacy"),
    }
}

// 校验失败在构造期即向调用方暴露
#[test]
fn empty_id_is_rejected_at_construction() {
    match RestaurantDeletedEvent::new("") {
        Err(DomainError::Validation { .. }) => {}
        other => panic!("unexpected {other:?}"),
    }
    match RestaurantEvent::deleted(String::new()) {
        Err(DomainError::Validation { .. }) => {}
        other => panic!("unexpected {other:?}"),
    }
}

// 不同标识的事件互不相等，也互不覆盖
#[test]
fn distinct_ids_are_distinct_events() {
    let a = RestaurantDeletedEvent::new("r-1").unwrap();
    let b = RestaurantDeletedEvent::new("r-2").unwrap();

    assert_ne!(a, b);

    let mut set = std::collections::HashSet::new();
    set.insert(a);
    set.insert(b);
    assert_eq!(set.len(), 2);
}
