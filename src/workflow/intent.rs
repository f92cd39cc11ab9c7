//! 用户意图
//!
//! 终端里每行输入对应一个意图：
//!
//! | 输入   | 意图                         |
//! |--------|------------------------------|
//! | 空行   | 回车                         |
//! | `:n`   | 主按钮（开始/看答案/下一句） |
//! | `:s`   | 跳过                         |
//! | `:w`   | 切换方向                     |
//! | `:r`   | 重新开始                     |
//! | `:q`   | 退出                         |
//! | 其他   | 输入答案并回车               |

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// 主按钮
    Primary,
    /// 回车
    Enter,
    /// 输入文字后回车
    Submit(String),
    Skip,
    ToggleDirection,
    Reset,
    Quit,
}

impl Intent {
    pub fn parse_line(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            "" => Self::Enter,
            ":n" => Self::Primary,
            ":s" => Self::Skip,
            ":w" => Self::ToggleDirection,
            ":r" => Self::Reset,
            ":q" => Self::Quit,
            _ => Self::Submit(line.to_string()),
        }
    }
}
