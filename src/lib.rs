//! LEET转换工具库
//!
//! 提供字符映射转换、复制确认状态与剪贴板抽象
//! 遵循MVVM架构模式，界面绑定见main.rs

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::copy_state::{CopyState, ResetTicket};
pub use model::leet_map::{convert, conversion_examples, is_convertible, CharacterMap, ConversionExample};
pub use model::session::ConverterSession;
pub use utils::clipboard::{ClipboardError, ClipboardService, SystemClipboard};
