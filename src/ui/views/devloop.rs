use std::time::Duration;

use crate::ui::blocks::build_failure::BuildFailureBlock;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use relaunch::DevLoopEvent;

pub struct HeaderInfo<'a> {
    pub source: &'a str,
    pub build: &'a str,
    pub app: &'a str,
    pub mode: &'a str,
}

pub fn render_devloop_header(
    info: &HeaderInfo<'_>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Relaunch");
    header.add("Source", info.source);
    header.add("Build", info.build);
    header.add("App", info.app);
    header.add("Mode", info.mode);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_devloop_event(
    timestamp: &str,
    event: &DevLoopEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        DevLoopEvent::WatchStarted {
            source, extensions, ..
        } => format!(
            "{} {} Watching {} for changes ({})...\n",
            prefix,
            icon(Icon::Watch),
            source,
            extensions
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        DevLoopEvent::ChangeDetected => format!(
            "\n{} {} Change detected. Rebuilding...\n",
            prefix,
            icon(Icon::Arrow)
        ),
        DevLoopEvent::BuildStarted { .. } => {
            format!("{} {} Building...\n", prefix, icon(Icon::Build))
        }
        DevLoopEvent::BuildSucceeded { duration_ms } => format!(
            "{} {} {} {}\n",
            prefix,
            icon(Icon::Success),
            ColoredText::success("Build succeeded.").render(supports_color),
            ColoredText::dim(format!("({})", format_duration(*duration_ms)))
                .render(supports_color)
        ),
        DevLoopEvent::BuildFailed {
            exit_code,
            stdout,
            stderr,
            ..
        } => format!(
            "{} {}",
            prefix,
            BuildFailureBlock::new(*exit_code, stdout, stderr)
                .render(supports_color, supports_unicode)
        ),
        DevLoopEvent::AppStopping { pid } => format!(
            "{} {} Stopping previous instance (pid {})...\n",
            prefix,
            icon(Icon::Stop),
            pid
        ),
        DevLoopEvent::AppForceKilled { pid } => format!(
            "{} {} {}\n",
            prefix,
            icon(Icon::Warning),
            ColoredText::warning(format!("Force killing pid {}...", pid)).render(supports_color)
        ),
        DevLoopEvent::AppLaunching { path } => format!(
            "{} {} Launching {}\n",
            prefix,
            icon(Icon::Progress),
            ColoredText::dim(path.as_str()).render(supports_color)
        ),
        DevLoopEvent::AppStarted { pid, .. } => {
            let rule = if supports_unicode {
                theme::rules::LOG_SEPARATOR
            } else {
                theme::rules::LOG_SEPARATOR_ASCII
            };
            format!(
                "{} {} Running app (pid {}, logs will appear below)...\n{}\n",
                prefix,
                icon(Icon::Launch),
                pid,
                ColoredText::dim(rule).render(supports_color)
            )
        }
        DevLoopEvent::AppMissing { path } => format!(
            "{} {} {}\n",
            prefix,
            icon(Icon::Error),
            ColoredText::error(format!("App binary not found at {}", path)).render(supports_color)
        ),
        DevLoopEvent::AppLaunchFailed { message } => format!(
            "{} {} {}\n",
            prefix,
            icon(Icon::Error),
            ColoredText::error(format!("Failed to launch app: {}", message))
                .render(supports_color)
        ),
        DevLoopEvent::Warning { message } => format!(
            "{} {} {}\n",
            prefix,
            icon(Icon::Warning),
            ColoredText::warning(message.as_str()).render(supports_color)
        ),
        DevLoopEvent::Shutdown => format!(
            "\n{} {} {}\n",
            prefix,
            icon(Icon::Stop),
            ColoredText::info("Exiting...").render(supports_color)
        ),
    }
}

fn format_duration(ms: u64) -> String {
    let d = Duration::from_millis(ms);
    if d.as_secs() >= 1 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}ms", ms)
    }
}
