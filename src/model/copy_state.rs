//! 复制确认状态：成功复制后置位，经确认窗口后自动复位
//!
//! 每次确认都会签发新的 [`ResetTicket`]，只有最新的票据能复位状态，
//! 旧的定时器即使触发也不会清除后续复制设置的状态。

use std::time::Duration;

/// 一次待执行的复位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
    delay: Duration,
}

impl ResetTicket {
    /// 距离复位的延迟
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone)]
pub struct CopyState {
    confirmed: bool,
    generation: u64,
    window: Duration,
}

impl CopyState {
    pub fn new(window: Duration) -> Self {
        Self {
            confirmed: false,
            generation: 0,
            window,
        }
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    /// 确认窗口长度
    pub fn window(&self) -> Duration {
        self.window
    }

    /// 置位并签发新票据，之前签发的票据随之失效
    pub fn confirm(&mut self) -> ResetTicket {
        self.generation = self.generation.wrapping_add(1);
        self.confirmed = true;
        ResetTicket {
            generation: self.generation,
            delay: self.window,
        }
    }

    /// 到期复位；票据已被取代时不做任何事，返回是否实际复位
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "忽略过期的复位票据: {} (当前 {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.confirmed = false;
        true
    }
}

impl Default for CopyState {
    fn default() -> Self {
        Self::new(crate::vm::bridge::CONFIRM_WINDOW)
    }
}
