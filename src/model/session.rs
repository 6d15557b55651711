//! ConverterSession：单个会话的界面状态（输入、转换结果、复制确认）

use crate::model::copy_state::{CopyState, ResetTicket};
use crate::model::leet_map::convert;
use crate::utils::clipboard::ClipboardService;

#[derive(Debug, Clone, Default)]
pub struct ConverterSession {
    input: String,
    output: String,
    copy_state: CopyState,
}

impl ConverterSession {
    pub fn new(copy_state: CopyState) -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            copy_state,
        }
    }

    /// 更新输入并重新计算转换结果
    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
        self.output = convert(text);
        tracing::debug!("输入更新: {} 字符", self.input.chars().count());
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn confirmed(&self) -> bool {
        self.copy_state.confirmed()
    }

    /// 有转换结果时才允许复制
    pub fn can_copy(&self) -> bool {
        !self.output.is_empty()
    }

    /// 有输入时显示结果区，否则显示空状态提示
    pub fn show_result(&self) -> bool {
        !self.input.is_empty()
    }

    /// 复制当前转换结果
    ///
    /// 成功时置位确认状态并返回复位票据，调用方负责在 `ticket.delay()`
    /// 之后调用 [`ConverterSession::expire`]。失败只记录日志，状态保持不变。
    pub fn copy_output(&mut self, clipboard: &mut dyn ClipboardService) -> Option<ResetTicket> {
        if !self.can_copy() {
            tracing::warn!("没有可复制的内容，忽略复制请求");
            return None;
        }

        match clipboard.write(&self.output) {
            Ok(()) => {
                tracing::info!("已复制到剪贴板，长度: {} 字符", self.output.chars().count());
                Some(self.copy_state.confirm())
            }
            Err(e) => {
                tracing::error!("复制失败: {}", e);
                None
            }
        }
    }

    /// 复位到期；被后续复制取代的票据不生效
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        self.copy_state.expire(ticket)
    }
}
