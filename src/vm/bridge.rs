//! VM桥接层：连接Slint UI与ConverterSession
//!
//! 注意：回调绑定在main.rs中，因为依赖于Slint生成的类型
//! 这里只提供公共常量

use std::time::Duration;

// === 常量定义（消除魔法值） ===

/// 复制成功提示的显示时长
pub const CONFIRM_WINDOW: Duration = Duration::from_millis(2000);

pub const STATUS_READY: &str = "就绪";
pub const STATUS_COPIED: &str = "已复制到剪贴板！";
pub const RESULT_PLACEHOLDER: &str = "转换结果将显示在这里";

/// 示例面板中展示的单词
pub const EXAMPLE_WORDS: [&str; 3] = ["Gamer", "Elite", "Beast"];
