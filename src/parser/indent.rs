//! Indentation Checking
//!
//! The tree-sitter scanner tolerates indentation Python rejects, so logical
//! line indentation is checked separately against an indent stack.

use super::python::SyntaxError;

const TAB_WIDTH: usize = 8;

/// Open string literal state
#[derive(Debug, Clone, Copy)]
struct Quote {
    ch: char,
    triple: bool,
}

/// Tracks what carries over between physical lines
#[derive(Debug, Default)]
struct LineScanner {
    depth: usize,
    string: Option<Quote>,
    continued: bool,
    /// Last character outside strings and comments in the current logical line
    last_significant: Option<char>,
}

impl LineScanner {
    fn at_logical_start(&self) -> bool {
        self.depth == 0 && self.string.is_none() && !self.continued
    }

    fn scan(&mut self, line: &str) {
        self.continued = false;
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if let Some(quote) = self.string {
                if ch == '\\' {
                    i += 2;
                    continue;
                }
                if ch == quote.ch {
                    if !quote.triple {
                        self.string = None;
                        self.last_significant = Some(ch);
                    } else if chars.get(i + 1) == Some(&ch) && chars.get(i + 2) == Some(&ch) {
                        self.string = None;
                        self.last_significant = Some(ch);
                        i += 3;
                        continue;
                    }
                }
                i += 1;
                continue;
            }

            match ch {
                '#' => break,
                '"' | '\'' => {
                    let triple = chars.get(i + 1) == Some(&ch) && chars.get(i + 2) == Some(&ch);
                    self.string = Some(Quote { ch, triple });
                    i += if triple { 3 } else { 1 };
                    continue;
                }
                '\\' if i + 1 == chars.len() => {
                    self.continued = true;
                    break;
                }
                '(' | '[' | '{' => self.depth += 1,
                ')' | ']' | '}' => self.depth = self.depth.saturating_sub(1),
                c if c.is_whitespace() => {
                    i += 1;
                    continue;
                }
                _ => {}
            }

            self.last_significant = Some(ch);
            i += 1;
        }

        // Unterminated single-quoted strings only continue after a backslash
        if self.string.is_some_and(|q| !q.triple) && !line.ends_with('\\') {
            self.string = None;
        }
    }
}

/// Check block indentation the way Python's tokenizer does
pub fn check_indentation(source: &str) -> Result<(), SyntaxError> {
    let mut stack = vec![0usize];
    let mut scanner = LineScanner::default();
    let mut expects_block = false;
    let mut last_line = 0;

    for (index, line) in source.lines().enumerate() {
        if scanner.at_logical_start() {
            let body = line.trim_start_matches([' ', '\t', '\x0c']);
            if body.is_empty() || body.starts_with('#') {
                continue;
            }

            let indent = &line[..line.len() - body.len()];
            let width = indent_width(indent);
            let top = stack.last().copied().unwrap_or_default();
            let fail = |message: &str| SyntaxError {
                line: index + 1,
                column: indent.len() + 1,
                message: message.to_string(),
            };

            if expects_block {
                if width <= top {
                    return Err(fail("expected an indented block"));
                }
                stack.push(width);
            } else if width > top {
                return Err(fail("unexpected indent"));
            } else if width < top {
                while stack.last().is_some_and(|&w| w > width) {
                    stack.pop();
                }
                if stack.last() != Some(&width) {
                    return Err(fail("unindent does not match any outer indentation level"));
                }
            }

            scanner.last_significant = None;
            last_line = index;
        }

        scanner.scan(line);
        if scanner.at_logical_start() {
            expects_block = scanner.last_significant == Some(':');
        }
    }

    if expects_block {
        return Err(SyntaxError {
            line: last_line + 1,
            column: 1,
            message: "expected an indented block".to_string(),
        });
    }

    Ok(())
}

fn indent_width(indent: &str) -> usize {
    indent.chars().fold(0, |width, ch| match ch {
        '\t' => (width / TAB_WIDTH + 1) * TAB_WIDTH,
        '\x0c' => 0,
        _ => width + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let source = "def f(x):\n    if x:\n        return 1\n    return 2\n\nprint(f(1))\n";
        assert!(check_indentation(source).is_ok());
    }

    #[test]
    fn test_unexpected_indent_at_start() {
        let err = check_indentation("  print(\"Hello, world\")").unwrap_err();
        assert_eq!(err.message, "unexpected indent");
        assert_eq!((err.line, err.column), (1, 3));
    }

    #[test]
    fn test_tab_indented_statement() {
        let err = check_indentation("print(\"Hello, world\")\n\tx=1").unwrap_err();
        assert_eq!(err.message, "unexpected indent");
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_missing_block() {
        let err = check_indentation("def f():\nreturn 1\nprint(\"Hello, world\")").unwrap_err();
        assert_eq!(err.message, "expected an indented block");
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_block_opener_at_end() {
        let err = check_indentation("x = 1\nif x:\n").unwrap_err();
        assert_eq!(err.message, "expected an indented block");
    }

    #[test]
    fn test_inconsistent_dedent() {
        let err = check_indentation("if True:\n    x = 1\n  y = 2\n").unwrap_err();
        assert_eq!(err.message, "unindent does not match any outer indentation level");
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_brackets_and_continuations_ignore_indent() {
        let source = "values = [\n        1,\n  2,\n]\ntotal = 1 + \\\n      2\ncall(a,\n     b)\n";
        assert!(check_indentation(source).is_ok());
    }

    #[test]
    fn test_triple_quoted_strings_ignore_indent() {
        let source = "def f():\n    \"\"\"Doc\n  still doc:\n\"\"\"\n    return 1\n";
        assert!(check_indentation(source).is_ok());
    }

    #[test]
    fn test_colons_inside_strings_and_comments() {
        let source = "x = \"a:\"\ny = {'k': 1}\nz = 2  # note:\nprint(x, y, z)\n";
        assert!(check_indentation(source).is_ok());
    }

    #[test]
    fn test_blank_and_comment_lines_inside_block() {
        let source = "for i in range(3):\n\n# comment at column 0\n    print(i)\n";
        assert!(check_indentation(source).is_ok());
    }

    #[test]
    fn test_one_line_compound_statement() {
        assert!(check_indentation("if True: print(\"Hello, world\")\nx = 1\n").is_ok());
    }

    #[test]
    fn test_indent_width_expands_tabs() {
        assert_eq!(indent_width("\t"), 8);
        assert_eq!(indent_width("  \t"), 8);
        assert_eq!(indent_width("    "), 4);
    }
}
