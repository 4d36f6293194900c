use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Header;

const INDENT: char = '\t';

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Line-oriented builder for the generated header
#[derive(Debug, Clone, Default)]
pub struct CppWriter {
    buf: String,
    line_ending: LineEnding,
}

impl CppWriter {
    pub fn new(line_ending: LineEnding) -> Self {
        Self {
            buf: String::new(),
            line_ending,
        }
    }

    pub fn add_instruction(&mut self, instruction: &str, indent: usize) {
        self.buf.extend(std::iter::repeat_n(INDENT, indent));
        self.buf.push_str(instruction);
        self.buf.push_str(self.line_ending.as_str());
    }

    pub fn skip_line(&mut self) {
        self.buf.push_str(self.line_ending.as_str());
    }

    pub fn add_banner(&mut self, header: &Header) {
        self.add_instruction("/*", 0);
        self.add_instruction(&format!("Generated using {}", header.tool), 1);
        self.add_instruction(&format!("At {}", header.timestamp()), 1);
        match header.version.as_deref().filter(|v| !v.trim().is_empty()) {
            Some(version) => self.add_instruction(&format!("Game version {}", version), 1),
            None => self.add_instruction("Unknown game version", 1),
        }
        self.add_instruction("*/", 0);
    }

    pub fn build(self) -> String {
        self.buf
    }

}
