//! 程序入口：初始化日志、加载 Slint UI，并绑定 VM 回调

use std::{cell::RefCell, rc::Rc};

use anyhow::Context;
use slint::{ComponentHandle, ModelRc, Timer, TimerMode, VecModel};
use tracing_subscriber::fmt::SubscriberBuilder;

use leet_converter::vm::bridge::*;
use leet_converter::{
    conversion_examples, is_convertible, CharacterMap, ConversionExample, ConverterSession,
    ResetTicket, SystemClipboard,
};

slint::include_modules!();

// ExampleData转换实现
impl From<&ConversionExample> for ExampleData {
    fn from(example: &ConversionExample) -> Self {
        Self {
            source: example.source.clone().into(),
            converted: example.converted.clone().into(),
        }
    }
}

/// VM桥接器：管理UI与会话状态的交互
struct ViewModelBridge {
    session: Rc<RefCell<ConverterSession>>,
    clipboard: Rc<RefCell<SystemClipboard>>,
    // 唯一的复位定时器，重新 start 即取代尚未触发的复位
    reset_timer: Rc<Timer>,
}

impl ViewModelBridge {
    /// 创建新的VM桥接器并绑定所有回调
    fn new(app_window: &AppWindow, session: Rc<RefCell<ConverterSession>>) -> Self {
        let bridge = Self {
            session,
            clipboard: Rc::new(RefCell::new(SystemClipboard::new())),
            reset_timer: Rc::new(Timer::default()),
        };

        bridge.setup_callbacks(app_window);
        bridge
    }

    /// 设置所有UI回调函数
    fn setup_callbacks(&self, app_window: &AppWindow) {
        // === 输入变化回调 ===
        {
            let session = self.session.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_input_changed(move |text| {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_input_changed(&app_window, &session, &text);
                }
            });
        }

        // === 复制按钮回调 ===
        {
            let session = self.session.clone();
            let clipboard = self.clipboard.clone();
            let reset_timer = self.reset_timer.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_copy_pressed(move || {
                Self::handle_copy_pressed(&app_window_weak, &session, &clipboard, &reset_timer);
            });
        }
    }

    /// 初始化UI状态
    fn initialize_ui(&self, app_window: &AppWindow) {
        app_window.set_input_text("".into());
        app_window.set_status_message(STATUS_READY.into());
        app_window.set_copied_message(STATUS_COPIED.into());
        app_window.set_result_placeholder(RESULT_PLACEHOLDER.into());

        let examples: Vec<ExampleData> = conversion_examples(&EXAMPLE_WORDS)
            .iter()
            .map(ExampleData::from)
            .collect();
        app_window.set_examples(ModelRc::new(VecModel::from(examples)));

        let char_table: Vec<CharEntryData> = CharacterMap::entries()
            .iter()
            .map(|(letter, digit)| CharEntryData {
                letter: letter.to_string().into(),
                digit: digit.to_string().into(),
            })
            .collect();
        app_window.set_char_table(ModelRc::new(VecModel::from(char_table)));

        Self::sync_view(app_window, &self.session.borrow());
    }

    /// 将会话状态同步到界面属性
    fn sync_view(app_window: &AppWindow, session: &ConverterSession) {
        app_window.set_output_text(session.output().into());
        app_window.set_can_copy(session.can_copy());
        app_window.set_show_result(session.show_result());
        app_window.set_copied(session.confirmed());
    }

    /// 处理输入变化：重新计算转换结果
    fn handle_input_changed(app_window: &AppWindow, session: &Rc<RefCell<ConverterSession>>, text: &str) {
        session.borrow_mut().set_input(text);
        Self::sync_view(app_window, &session.borrow());

        let status = if text.is_empty() {
            STATUS_READY.to_string()
        } else {
            let replaced = text.chars().filter(|c| is_convertible(*c)).count();
            format!("已替换 {} / {} 个字符", replaced, text.chars().count())
        };
        app_window.set_status_message(status.into());
    }

    /// 处理复制按钮：异步写入剪贴板，成功后安排确认复位
    fn handle_copy_pressed(
        app_window_weak: &slint::Weak<AppWindow>,
        session: &Rc<RefCell<ConverterSession>>,
        clipboard: &Rc<RefCell<SystemClipboard>>,
        reset_timer: &Rc<Timer>,
    ) {
        let app_weak = app_window_weak.clone();
        let session = session.clone();
        let clipboard = clipboard.clone();
        let reset_timer = reset_timer.clone();

        // 使用 spawn_local 让剪贴板写入在回调返回后执行，保持UI响应
        let spawned = slint::spawn_local(async move {
            let ticket = session.borrow_mut().copy_output(&mut *clipboard.borrow_mut());
            // 失败已在会话中记录日志，界面保持不变
            let Some(ticket) = ticket else {
                return;
            };

            if let Some(app) = app_weak.upgrade() {
                app.set_copied(session.borrow().confirmed());
            }
            Self::schedule_reset(&app_weak, &session, &reset_timer, ticket);
        });

        if let Err(e) = spawned {
            tracing::error!("无法调度复制任务: {}", e);
        }
    }

    /// 安排确认复位，替换任何尚未触发的复位
    fn schedule_reset(
        app_weak: &slint::Weak<AppWindow>,
        session: &Rc<RefCell<ConverterSession>>,
        reset_timer: &Timer,
        ticket: ResetTicket,
    ) {
        let app_weak = app_weak.clone();
        let session = session.clone();
        reset_timer.start(TimerMode::SingleShot, ticket.delay(), move || {
            if session.borrow_mut().expire(ticket) {
                if let Some(app) = app_weak.upgrade() {
                    app.set_copied(false);
                }
            }
        });
    }
}

fn main() -> anyhow::Result<()> {
    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let app = AppWindow::new().context("UI 初始化失败")?;
    let session = Rc::new(RefCell::new(ConverterSession::default()));

    // 创建VM桥接器并绑定UI回调
    let bridge = ViewModelBridge::new(&app, session);
    bridge.initialize_ui(&app);

    tracing::info!("应用启动成功，UI已初始化");
    app.run().context("事件循环异常退出")?;
    Ok(())
}
