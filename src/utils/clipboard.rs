//! Clipboard  cross-platform clipboard helpers

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("剪贴板不可用: {0}")]
    Unavailable(String),
    #[error("写入剪贴板失败: {0}")]
    Write(String),
}

/// 剪贴板服务：外部平台能力，只关心成功或失败
pub trait ClipboardService {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// 基于 copypasta 的系统剪贴板，首次写入时才创建上下文
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("上下文未初始化".into()))
    }
}

impl ClipboardService for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.context()?;
        let result = ctx
            .set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()));
        if result.is_err() {
            // 丢弃可能已失效的上下文，下次重新创建
            self.ctx = None;
        }
        result
    }
}

/// 从系统剪贴板获取文本（用于测试）
#[cfg(test)]
pub fn get_clipboard_contents() -> Result<String, ClipboardError> {
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    ctx.get_contents()
        .map_err(|e| ClipboardError::Write(e.to_string()))
}
