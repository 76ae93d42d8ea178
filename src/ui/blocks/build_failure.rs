use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Captured compiler output shown after a failed build
///
/// stderr comes first since that is where diagnostics usually land.
#[derive(Debug, Clone)]
pub struct BuildFailureBlock<'a> {
    exit_code: Option<i32>,
    stdout: &'a str,
    stderr: &'a str,
}

impl<'a> BuildFailureBlock<'a> {
    pub fn new(exit_code: Option<i32>, stdout: &'a str, stderr: &'a str) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let status = match self.exit_code {
            Some(code) => format!(" (exit code {code})"),
            None => String::new(),
        };
        let mut out = format!(
            "{} {}{}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("Build failed:").bold().render(supports_color),
            status
        );

        for stream in [self.stderr, self.stdout] {
            let stream = stream.trim_end();
            if stream.is_empty() {
                continue;
            }
            out.push_str(stream);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_precedes_stdout() {
        let block = BuildFailureBlock::new(
            Some(65),
            "** BUILD FAILED **\n",
            "App.swift:3:5: error: cannot find 'foo' in scope\n",
        );
        insta::assert_snapshot!(block.render(false, false), @r"
        [FAIL] Build failed: (exit code 65)
        App.swift:3:5: error: cannot find 'foo' in scope
        ** BUILD FAILED **
        ");
    }

    #[test]
    fn empty_streams_are_skipped() {
        let block = BuildFailureBlock::new(None, "", "  \n");
        assert_eq!(block.render(false, false), "[FAIL] Build failed:\n");
    }
}
