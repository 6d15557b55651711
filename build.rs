//! 构建脚本：编译 Slint 界面描述

fn main() {
    slint_build::compile("ui/app_window.slint").expect("Slint UI 编译失败");
}
