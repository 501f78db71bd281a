use regex::Regex;

use crate::language::Language;

use super::types::FunctionInfo;

/// Trait for language-specific function detection.
pub trait FunctionParser {
    /// Parse content and extract function information.
    fn parse(&self, content: &str) -> Vec<FunctionInfo>;
}

/// Python function/method parser.
pub struct PythonParser {
    fn_pattern: Regex,
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(r"^(\s*)(?:async\s+)?def\s+([a-zA-Z_][a-zA-Z0-9_]*)")
                .expect("Invalid regex"),
        }
    }
}

impl FunctionParser for PythonParser {
    fn parse(&self, content: &str) -> Vec<FunctionInfo> {
        let lines: Vec<&str> = content.lines().collect();
        let mut functions = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if let Some(caps) = self.fn_pattern.captures(line) {
                let indent = caps.get(1).map_or("", |m| m.as_str()).len();
                let name = caps.get(2).map_or("", |m| m.as_str()).to_string();
                let start_line = i + 1;

                let end_line = find_python_block_end(&lines, i, indent);
                functions.push(FunctionInfo::new(name, start_line, end_line));
            }
        }

        functions
    }
}

/// JavaScript/TypeScript function parser.
pub struct JsParser {
    fn_pattern: Regex,
    arrow_pattern: Regex,
}

impl Default for JsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JsParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(
                r"^[\t ]*(?:export\s+)?(?:async\s+)?function\s+([a-zA-Z_$][a-zA-Z0-9_$]*)",
            )
            .expect("Invalid regex"),
            arrow_pattern: Regex::new(
                r"^[\t ]*(?:export\s+)?(?:const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*(?:async\s+)?\(",
            )
            .expect("Invalid regex"),
        }
    }
}

impl FunctionParser for JsParser {
    fn parse(&self, content: &str) -> Vec<FunctionInfo> {
        let lines: Vec<&str> = content.lines().collect();
        let mut functions = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let name = self
                .fn_pattern
                .captures(line)
                .and_then(|caps| caps.get(1))
                .or_else(|| self.arrow_pattern.captures(line).and_then(|caps| caps.get(1)))
                .map(|m| m.as_str().to_string());

            if let Some(name) = name {
                let start_line = i + 1;
                let end_line = find_block_end(&lines, i);
                functions.push(FunctionInfo::new(name, start_line, end_line));
            }
        }

        functions
    }
}

/// Find the end of a brace-delimited block.
fn find_block_end(lines: &[&str], start: usize) -> usize {
    let mut brace_count = 0;
    let mut found_open = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    brace_count += 1;
                    found_open = true;
                }
                '}' => {
                    brace_count -= 1;
                    if found_open && brace_count == 0 {
                        return i + 1;
                    }
                }
                _ => {}
            }
        }
    }

    // If no matching brace found, return the last line
    lines.len()
}

/// Find the end of a Python indentation-based block.
fn find_python_block_end(lines: &[&str], start: usize, base_indent: usize) -> usize {
    let mut end_line = start + 1;

    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        let trimmed = line.trim();
        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            end_line = i + 1;
            continue;
        }

        let current_indent = line.chars().take_while(|c| c.is_whitespace()).count();
        if current_indent <= base_indent {
            break;
        }
        end_line = i + 1;
    }

    end_line
}

/// Get a function parser for the given language.
#[must_use]
pub fn parser_for(language: Language) -> Option<Box<dyn FunctionParser>> {
    match language {
        Language::Python => Some(Box::new(PythonParser::new())),
        Language::JavaScript | Language::TypeScript => Some(Box::new(JsParser::new())),
        Language::Unknown => None,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
