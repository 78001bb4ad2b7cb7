//! 餐厅领域事件库（restaurant-events）
//!
//! 以事件溯源/CQRS 架构为背景，定义餐厅领域事件的载荷与对外契约：
//! - 领域事件（`domain_event`）：事件载荷、信封、元数据与业务上下文
//! - 传输/存储形态（`persist`）：事件在序列化边界上的标准形态
//! - 事件系统（`eventing`）：发布/订阅协议与消费处理器接口
//!
//! 本 crate 只定义事件契约与最小必要的错误类型，不绑定具体的存储与
//! 消息传输实现，以便在不同基础设施（消息中间件、事件库等）上适配。
//!
//! 典型用法：
//! 1. 删除动作在业务侧落定后，通过 `RestaurantDeletedEvent::new` 构造事件；
//! 2. 用 `EventEnvelope::new` 附加元数据（事件标识、发生时间）与业务上下文；
//! 3. 转换为 `SerializedEvent` 后交由 `EventBus` 发布；
//! 4. 消费方实现 `EventHandler`，以幂等方式更新读模型（投递语义为至少一次）。
//!
pub mod domain_event;
pub mod error;
#[cfg(feature = "eventing")]
pub mod eventing;
pub mod persist;
