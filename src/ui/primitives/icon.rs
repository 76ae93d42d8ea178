use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Watch,
    Build,
    Launch,
    Stop,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};

        if supports_unicode {
            match self {
                Icon::Success => icons::SUCCESS,
                Icon::Error => icons::ERROR,
                Icon::Warning => icons::WARNING,
                Icon::Progress => icons::PROGRESS,
                Icon::Arrow => icons::ARROW,
                Icon::Watch => icons::WATCH,
                Icon::Build => icons::BUILD,
                Icon::Launch => icons::LAUNCH,
                Icon::Stop => icons::STOP,
            }
        } else {
            match self {
                Icon::Success => icons_ascii::SUCCESS,
                Icon::Error => icons_ascii::ERROR,
                Icon::Warning => icons_ascii::WARNING,
                Icon::Progress => icons_ascii::PROGRESS,
                Icon::Arrow => icons_ascii::ARROW,
                Icon::Watch => icons_ascii::WATCH,
                Icon::Build => icons_ascii::BUILD,
                Icon::Launch => icons_ascii::LAUNCH,
                Icon::Stop => icons_ascii::STOP,
            }
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Launch => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress | Icon::Stop => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Watch | Icon::Build => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
