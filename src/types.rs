//! Core types used throughout the project.

use tower_lsp::lsp_types;

/// A range in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceRange {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl From<lsp_types::Range> for SourceRange {
    fn from(range: lsp_types::Range) -> Self {
        Self { start: range.start.into(), end: range.end.into() }
    }
}

impl From<SourceRange> for lsp_types::Range {
    fn from(range: SourceRange) -> Self {
        Self { start: range.start.into(), end: range.end.into() }
    }
}

/// A position in source code (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    pub line: u32,
    pub character: u32,
}

impl From<lsp_types::Position> for SourcePosition {
    fn from(position: lsp_types::Position) -> Self {
        Self { line: position.line, character: position.character }
    }
}

impl From<SourcePosition> for lsp_types::Position {
    fn from(position: SourcePosition) -> Self {
        Self { line: position.line, character: position.character }
    }
}

/// バイトオフセットから LSP 位置（行 + UTF-16 文字数）を計算する
#[must_use]
#[allow(clippy::cast_possible_truncation)] // ソースファイルが 42 億行を超えることはない
pub fn position_at(text: &str, byte_offset: usize) -> SourcePosition {
    let clamped = byte_offset.min(text.len());
    let prefix = text.get(..clamped).unwrap_or(text);
    let line = prefix.matches('\n').count() as u32;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let character = prefix.get(line_start..).unwrap_or("").encode_utf16().count() as u32;
    SourcePosition { line, character }
}

/// バイトオフセットの組から範囲を作る
#[must_use]
pub fn range_between(text: &str, start: usize, end: usize) -> SourceRange {
    SourceRange { start: position_at(text, start), end: position_at(text, end) }
}

impl SourceRange {
    /// Checks if a position is within this range.
    #[must_use]
    pub const fn contains(&self, position: SourcePosition) -> bool {
        if position.line < self.start.line {
            return false;
        }
        if position.line == self.start.line && position.character < self.start.character {
            return false;
        }
        if position.line > self.end.line {
            return false;
        }
        if position.line == self.end.line && position.character > self.end.character {
            return false;
        }
        true
    }
}
