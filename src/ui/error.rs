use relaunch::RelaunchError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }
    if let Some(hint) = err.downcast_ref::<RelaunchError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!("hint: {hint}")).render(supports_color)
        ));
    }
    out
}

fn hint_for(err: &RelaunchError) -> Option<&'static str> {
    match err {
        RelaunchError::Config { .. } => Some("run 'relaunch init --force' to regenerate relaunch.toml"),
        RelaunchError::Watch(_) => Some("use '--mode poll' to fall back to plain polling"),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        println!("{}", output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!("{}", format_error(err, caps.supports_color && !caps.is_ci, caps.supports_unicode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_errors_carry_a_hint() {
        let err = anyhow::Error::new(RelaunchError::Config {
            file: PathBuf::from("relaunch.toml"),
            message: "expected a table".to_string(),
        });
        insta::assert_snapshot!(format_error(&err, false, false), @r"
        [FAIL] invalid config in relaunch.toml: expected a table
          hint: run 'relaunch init --force' to regenerate relaunch.toml
        ");
    }

    #[test]
    fn context_chain_is_listed() {
        let err = anyhow::anyhow!("disk full").context("failed to write relaunch.toml");
        assert_eq!(
            format_error(&err, false, false),
            "[FAIL] failed to write relaunch.toml\n  caused by: disk full\n"
        );
    }
}
