// author: kodeholic (powered by Claude)
// Command — 원격 서비스 명령 문자열 (단건 또는 순서 있는 묶음)
//
// 클라이언트는 명령 문법을 해석하지 않는다. 묶음은 주어진 순서 그대로
// command=a&command=b 형태의 반복 폼 필드로 인코딩된다.

/// 폼 필드 이름
pub const COMMAND_FIELD: &str = "command";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Single(String),
    Batch(Vec<String>),
}

impl Command {
    /// (필드, 값) 쌍 목록 — reqwest form 인코딩 입력. 순서 보존
    pub fn form_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            Command::Single(cmd)  => vec![(COMMAND_FIELD, cmd.as_str())],
            Command::Batch(cmds)  => cmds.iter().map(|c| (COMMAND_FIELD, c.as_str())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Command::Single(_)   => 1,
            Command::Batch(cmds) => cmds.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Command {
    fn from(cmd: &str) -> Self {
        Command::Single(cmd.to_string())
    }
}

impl From<String> for Command {
    fn from(cmd: String) -> Self {
        Command::Single(cmd)
    }
}

impl From<Vec<String>> for Command {
    fn from(cmds: Vec<String>) -> Self {
        Command::Batch(cmds)
    }
}

impl From<Vec<&str>> for Command {
    fn from(cmds: Vec<&str>) -> Self {
        Command::Batch(cmds.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Command {
    fn from(cmds: [&str; N]) -> Self {
        Command::Batch(cmds.iter().map(|c| c.to_string()).collect())
    }
}
