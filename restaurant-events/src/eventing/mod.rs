//! 事件子系统（eventing）
//!
//! 提供事件发布/订阅与消费的基础抽象：
//! - `EventBus`：统一发布/订阅协议，发布方在此完成构造后移交事件；
//! - `InMemoryEventBus`：面向测试、示例与本地开发的内存实现；
//! - `EventHandler`：消费处理器接口，投递语义为"至少一次"，
//!   处理逻辑必须幂等（重复收到同一删除事件应当是空操作）。
//!
//! 该模块仅定义协议，不绑定具体传输实现，可对接任意消息系统。
//!
pub mod bus;
pub mod bus_inmemory;
pub mod handler;

pub use bus::EventBus;
pub use bus_inmemory::InMemoryEventBus;
pub use handler::{EventHandler, HandledEventType};
